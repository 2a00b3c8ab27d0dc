/// Normalise the `T`/`.` delimited timestamps emitted by the logistics feed
/// (`2020-04-26T09:28:14.323`, `2020-04-26 09:28:14:323`) into
/// `yyyy-MM-dd HH:mm:ss`.
///
/// Only the first `T` and the first `.` are rewritten; milliseconds and
/// anything after the third time component are dropped.
///
/// # Examples
///
/// ```
/// use applet_util::time::normalize_logged_timestamp;
///
/// assert_eq!(normalize_logged_timestamp("2020-04-26T09:28:14.323"), "2020-04-26 09:28:14");
/// assert_eq!(normalize_logged_timestamp("2020-04-26 09:28:14:323"), "2020-04-26 09:28:14");
/// ```
pub fn normalize_logged_timestamp(input: &str) -> String {
    let normalized = input.replacen('T', " ", 1).replacen('.', ":", 1);
    let mut parts = normalized.split(' ');
    let date = parts.next().unwrap_or_default();
    let time = parts.next().unwrap_or_default();

    let mut out = String::new();
    out.push_str(date);
    if !time.is_empty() {
        out.push(' ');
        out.push_str(&time.split(':').take(3).collect::<Vec<_>>().join(":"));
    }
    out
}
