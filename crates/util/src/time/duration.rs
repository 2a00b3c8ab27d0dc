use crate::error::{Result, UtilError};
use crate::strings::pad2;
use serde::{Deserialize, Serialize};

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Which components [`convert_duration`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationStyle {
    /// `HH:mm:ss`, hours are not wrapped at 24.
    #[default]
    HourMinuteSecond,
    /// `dd:HH:mm:ss`
    DayHourMinuteSecond,
}

/// A duration rendered as zero-padded clock components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedDuration {
    /// Components joined with `:`.
    pub format: String,
    pub list: Vec<String>,
}

/// Split a millisecond duration into clock components.
///
/// Each component is floored; sub-second remainders are dropped.
///
/// # Examples
///
/// ```
/// use applet_util::time::{convert_duration, DurationStyle};
///
/// let d = convert_duration(3_723_000, DurationStyle::HourMinuteSecond).unwrap();
/// assert_eq!(d.format, "01:02:03");
///
/// let d = convert_duration(90_061_000, DurationStyle::DayHourMinuteSecond).unwrap();
/// assert_eq!(d.list, vec!["01", "01", "01", "01"]);
/// ```
pub fn convert_duration(ms: i64, style: DurationStyle) -> Result<ConvertedDuration> {
    if ms < 0 {
        tracing::debug!(ms, "refusing to convert negative duration");
        return Err(UtilError::NegativeDuration(ms));
    }

    let mut rest = ms;
    let mut values = Vec::with_capacity(4);
    if style == DurationStyle::DayHourMinuteSecond {
        values.push(rest / DAY_MS);
        rest %= DAY_MS;
    }
    values.push(rest / HOUR_MS);
    rest %= HOUR_MS;
    values.push(rest / MINUTE_MS);
    rest %= MINUTE_MS;
    values.push(rest / SECOND_MS);

    let list: Vec<String> = values.iter().map(|v| pad2(&v.to_string())).collect();
    Ok(ConvertedDuration {
        format: list.join(":"),
        list,
    })
}
