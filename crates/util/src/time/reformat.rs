use crate::strings::{is_all_digits, numeric_prefix, pad2};
use serde::{Deserialize, Serialize};

/// Output template for [`reformat_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeMode {
    /// `yyyy-MM-dd HH:mm:ss`
    #[default]
    Full,
    /// `MM-dd HH:mm`
    MonthDayHourMinute,
    /// `yyyy:MM:dd`. Date components are joined with `:` here, unlike every
    /// other mode.
    Date,
    /// `HH:mm:ss`
    Time,
    /// `MM-dd`
    MonthDay,
    /// `HH:mm`
    HourMinute,
}

impl TimeMode {
    /// Map the numeric mode used by callers (0..=5). Anything else falls
    /// back to [`TimeMode::Full`].
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => TimeMode::Full,
            1 => TimeMode::MonthDayHourMinute,
            2 => TimeMode::Date,
            3 => TimeMode::Time,
            4 => TimeMode::MonthDay,
            5 => TimeMode::HourMinute,
            other => {
                tracing::debug!(mode = other, "unknown time mode, using full");
                TimeMode::Full
            }
        }
    }
}

/// Separators used to split the date part and the time part of an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    pub date: String,
    pub time: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            date: "-".to_string(),
            time: ":".to_string(),
        }
    }
}

impl Separators {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// Build from a loose list: empty gives the defaults, a single entry
    /// keeps `:` for the time part, extra entries are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use applet_util::time::Separators;
    ///
    /// assert_eq!(Separators::from_slice(&[]), Separators::default());
    /// assert_eq!(Separators::from_slice(&["/"]), Separators::new("/", ":"));
    /// assert_eq!(Separators::from_slice(&["/", ".", "|"]), Separators::new("/", "."));
    /// ```
    pub fn from_slice(items: &[&str]) -> Self {
        match items {
            [] => Self::default(),
            [date] => Self::new(*date, ":"),
            [date, time, ..] => Self::new(*date, *time),
        }
    }
}

/// Split the way the applet's string split does: an empty separator yields
/// one piece per character.
fn split_on<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        s.char_indices()
            .map(|(idx, ch)| &s[idx..idx + ch.len_utf8()])
            .collect()
    } else {
        s.split(sep).collect()
    }
}

fn normalize_component(component: &str) -> String {
    if is_all_digits(component) {
        pad2(component)
    } else {
        numeric_prefix(component).to_string()
    }
}

fn components(part: Option<&str>, sep: &str) -> Vec<String> {
    match part {
        Some(part) => split_on(part, sep).into_iter().map(normalize_component).collect(),
        None => Vec::new(),
    }
}

/// Join `items[range]` when there are more than two items, else all of them.
fn join_slice(items: &[String], start: usize, end: usize, sep: &str) -> String {
    if items.len() > 2 {
        items[start..end.min(items.len())].join(sep)
    } else {
        items.join(sep)
    }
}

/// Reformat a loosely structured timestamp into one of the fixed
/// [`TimeMode`] shapes.
///
/// The input is split on the first space into a date part and a time part.
/// Each component is zero-padded to two digits; components with trailing
/// noise are cut back to their leading digits. Missing parts are simply
/// left out of the output. An empty input is returned unchanged.
///
/// # Examples
///
/// ```
/// use applet_util::time::{reformat_timestamp, Separators, TimeMode};
///
/// let sep = Separators::default();
/// assert_eq!(reformat_timestamp("2020-4-6 9:8:14", TimeMode::Full, &sep), "2020-04-06 09:08:14");
/// assert_eq!(reformat_timestamp("2020-4-6 9:8:14", TimeMode::MonthDay, &sep), "04-06");
/// assert_eq!(reformat_timestamp("2020-4-6 9:8:14", TimeMode::Date, &sep), "2020:04:06");
/// ```
pub fn reformat_timestamp(input: &str, mode: TimeMode, separators: &Separators) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut parts = input.split(' ');
    let date = components(parts.next(), &separators.date);
    let time = components(parts.next(), &separators.time);

    let out = match mode {
        TimeMode::Full => format!("{} {}", date.join("-"), join_slice(&time, 0, 3, ":")),
        TimeMode::MonthDayHourMinute => format!(
            "{} {}",
            join_slice(&date, 1, 3, "-"),
            join_slice(&time, 0, 2, ":")
        ),
        TimeMode::Date => join_slice(&date, 0, 3, ":"),
        TimeMode::Time => join_slice(&time, 0, 3, ":"),
        TimeMode::MonthDay => join_slice(&date, 1, 3, "-"),
        TimeMode::HourMinute => join_slice(&time, 0, 2, ":"),
    };
    out.trim().to_string()
}
