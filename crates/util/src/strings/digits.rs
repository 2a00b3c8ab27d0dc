/// Find the byte index of the first character that is not an ASCII digit.
///
/// Returns `None` when every character is a digit (including the empty
/// string).
///
/// # Examples
///
/// ```
/// use applet_util::strings::first_non_digit_index;
///
/// assert_eq!(first_non_digit_index("23423.88"), Some(5));
/// assert_eq!(first_non_digit_index("2342"), None);
/// ```
pub fn first_non_digit_index(s: &str) -> Option<usize> {
    s.char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map(|(idx, _)| idx)
}

/// The longest leading run of ASCII digits.
///
/// # Examples
///
/// ```
/// use applet_util::strings::numeric_prefix;
///
/// assert_eq!(numeric_prefix("234.88"), "234");
/// assert_eq!(numeric_prefix("14abc"), "14");
/// assert_eq!(numeric_prefix("x1"), "");
/// ```
pub fn numeric_prefix(s: &str) -> &str {
    match first_non_digit_index(s) {
        Some(idx) => &s[..idx],
        None => s,
    }
}

/// True for the empty string and for strings made only of ASCII digits.
pub fn is_all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Left-pad with `0` to a width of two characters.
pub fn pad2(s: &str) -> String {
    if s.len() < 2 {
        format!("0{}", s)
    } else {
        s.to_string()
    }
}
