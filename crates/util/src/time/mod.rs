//! Timestamp helpers.
//!
//! Reformatting of loosely structured timestamp strings, normalisation of the
//! `T`/`.` delimited log format, wall-clock snapshots and millisecond
//! durations rendered as clock components.

mod current;
mod duration;
mod logged;
mod reformat;

pub use current::{current_time, current_time_at, current_timestamp, CurrentTime, CurrentTimeOptions, TimeFormat};
pub use duration::{convert_duration, ConvertedDuration, DurationStyle};
pub use logged::normalize_logged_timestamp;
pub use reformat::{reformat_timestamp, Separators, TimeMode};
