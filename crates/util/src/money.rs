//! Money formatting.
//!
//! Amounts arrive either as strings from the backend (`"12.00"`) or as
//! numbers computed on the page. These helpers normalise both to the strings
//! shown in the payment list.

use crate::error::{Result, UtilError};
use crate::strings::number_to_string;
use crate::types::{classify, is_number_f64};
use serde_json::Value;

/// A monetary amount as received: text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Text(String),
    Number(f64),
}

impl Amount {
    /// The amount as the string the formatters operate on.
    pub fn to_text(&self) -> String {
        match self {
            Amount::Text(s) => s.clone(),
            Amount::Number(n) => number_to_string(*n),
        }
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount::Text(s.to_string())
    }
}

impl From<String> for Amount {
    fn from(s: String) -> Self {
        Amount::Text(s)
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

impl From<i64> for Amount {
    fn from(n: i64) -> Self {
        Amount::Number(n as f64)
    }
}

impl From<u64> for Amount {
    fn from(n: u64) -> Self {
        Amount::Number(n as f64)
    }
}

impl TryFrom<&Value> for Amount {
    type Error = UtilError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Amount::Text(s.clone())),
            Value::Number(n) => match n.as_f64() {
                Some(f) if is_number_f64(f) => Ok(Amount::Number(f)),
                _ => Err(UtilError::NotAmount("number")),
            },
            other => {
                let kind = classify(other).as_str();
                tracing::debug!(kind, "rejecting non-amount value");
                Err(UtilError::NotAmount(kind))
            }
        }
    }
}

/// Integer parse of a leading run of digits, reduced to "is it zero".
fn parses_to_zero(s: &str) -> bool {
    let s = s.trim_start();
    let s = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let digits = crate::strings::numeric_prefix(s);
    !digits.is_empty() && digits.bytes().all(|b| b == b'0')
}

/// Drop a fractional part that is all zeros.
///
/// # Examples
///
/// ```
/// use applet_util::money::trim_trailing_zero_decimal;
///
/// assert_eq!(trim_trailing_zero_decimal("12.00"), "12");
/// assert_eq!(trim_trailing_zero_decimal("12.09"), "12.09");
/// assert_eq!(trim_trailing_zero_decimal(12.5), "12.5");
/// ```
pub fn trim_trailing_zero_decimal(amount: impl Into<Amount>) -> String {
    let text = amount.into().to_text();
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() == 2 && parses_to_zero(parts[1]) {
        parts[0].to_string()
    } else {
        text
    }
}

/// Append `.00` to a plain integer (`0` or no leading zero). Anything with
/// a `.` or that does not look like an integer is returned as is.
///
/// # Examples
///
/// ```
/// use applet_util::money::append_zero_decimals;
///
/// assert_eq!(append_zero_decimals("99"), "99.00");
/// assert_eq!(append_zero_decimals(0i64), "0.00");
/// assert_eq!(append_zero_decimals("099"), "099");
/// ```
pub fn append_zero_decimals(amount: impl Into<Amount>) -> String {
    let text = amount.into().to_text();
    if text.contains('.') {
        return text;
    }
    let looks_integer = text == "0"
        || text
            .strip_prefix(|c: char| ('1'..='9').contains(&c))
            .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()));
    if looks_integer {
        format!("{}.00", text)
    } else {
        text
    }
}

/// Add one to a string of ASCII digits.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Round half up (away from zero) to two decimals on the decimal
/// representation, so `1.005` becomes `1.01`.
fn round_half_up_2(n: f64) -> String {
    let repr = format!("{}", n.abs());
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let mut frac: Vec<u8> = frac_part.bytes().collect();
    frac.resize(frac.len().max(3), b'0');

    let mut digits: Vec<u8> = int_part.bytes().chain(frac[..2].iter().copied()).collect();
    if frac[2] >= b'5' {
        increment_digits(&mut digits);
    }

    let split = digits.len() - 2;
    let is_zero = digits.iter().all(|d| *d == b'0');
    let sign = if n < 0.0 && !is_zero { "-" } else { "" };
    // Digits are all ASCII.
    let digits = String::from_utf8_lossy(&digits);
    format!("{}{}.{}", sign, &digits[..split], &digits[split..])
}

/// Keep exactly two decimals.
///
/// Amounts without a `.` go through [`append_zero_decimals`]. With `round`
/// set the value is rounded half up; without it the fractional part is cut
/// after two characters, which silently drops precision.
///
/// Fails with [`UtilError::InvalidAmount`] when rounding is requested for
/// text that is not a number.
///
/// # Examples
///
/// ```
/// use applet_util::money::pad_two_decimals;
///
/// assert_eq!(pad_two_decimals("0.98999", true).unwrap(), "0.99");
/// assert_eq!(pad_two_decimals("12.3456", false).unwrap(), "12.34");
/// assert_eq!(pad_two_decimals("12", true).unwrap(), "12.00");
/// ```
pub fn pad_two_decimals(amount: impl Into<Amount>, round: bool) -> Result<String> {
    let text = amount.into().to_text();
    if !text.contains('.') {
        return Ok(append_zero_decimals(text));
    }

    if round {
        let trimmed = text.trim();
        match trimmed.parse::<f64>() {
            Ok(n) if is_number_f64(n) => Ok(round_half_up_2(n)),
            _ => {
                tracing::debug!(amount = %text, "cannot round non-numeric amount");
                Err(UtilError::InvalidAmount(text))
            }
        }
    } else {
        let mut parts: Vec<String> = text.split('.').map(str::to_string).collect();
        parts[1] = parts[1].chars().take(2).collect();
        Ok(parts.join("."))
    }
}
