use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

const WEEKDAYS: [&str; 7] = ["星期天", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"];

/// Joiners for the date and the time half of a rendered timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFormat {
    pub year_mark: String,
    pub time_mark: String,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            year_mark: "-".to_string(),
            time_mark: ":".to_string(),
        }
    }
}

/// Options for [`current_time`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentTimeOptions {
    /// Milliseconds since the Unix epoch; `None` (or a negative value) means now.
    pub timestamp: Option<i64>,
    pub format: TimeFormat,
}

/// A point in time broken out into the strings the applet displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentTime {
    /// `yyyy-MM-dd HH:mm:ss` with the configured joiners.
    pub time: String,
    /// Weekday name, e.g. `星期一`.
    pub week: &'static str,
    pub ymd: String,
    pub hms: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Milliseconds since the Unix epoch.
pub fn current_timestamp() -> i64 {
    Local::now().timestamp_millis()
}

/// Render the configured timestamp (or now) in local time.
pub fn current_time(options: &CurrentTimeOptions) -> CurrentTime {
    let at = options
        .timestamp
        .filter(|ms| *ms >= 0)
        .and_then(|ms| Local.timestamp_millis_opt(ms).single())
        .unwrap_or_else(Local::now);
    current_time_at(&at, &options.format)
}

/// Render a specific instant in its own time zone.
pub fn current_time_at<Tz: TimeZone>(at: &DateTime<Tz>, format: &TimeFormat) -> CurrentTime {
    let ymd = format!(
        "{}{mark}{:02}{mark}{:02}",
        at.year(),
        at.month(),
        at.day(),
        mark = format.year_mark
    );
    let hms = format!(
        "{:02}{mark}{:02}{mark}{:02}",
        at.hour(),
        at.minute(),
        at.second(),
        mark = format.time_mark
    );
    CurrentTime {
        time: format!("{} {}", ymd, hms),
        week: WEEKDAYS[at.weekday().num_days_from_sunday() as usize],
        ymd,
        hms,
        timestamp: at.timestamp_millis(),
    }
}
