//! applet-util - helpers for the school-payment applet
//!
//! Type predicates over JSON values, timestamp and money formatting, a loose
//! comparison sort, object transforms and a few small conveniences. Every
//! function is pure apart from the clock and RNG readers; none of them
//! panic on bad input.

pub mod error;
pub mod gender;
pub mod is_empty;
pub mod json_clone;
pub mod money;
pub mod object;
pub mod query;
pub mod random;
pub mod sort;
pub mod strings;
pub mod time;
pub mod types;

// Re-exports for convenience
pub use error::{Result, UtilError};
pub use gender::Gender;
pub use is_empty::{is_empty, is_empty_map};
pub use json_clone::{clone, clones};
pub use money::{append_zero_decimals, pad_two_decimals, trim_trailing_zero_decimal, Amount};
pub use object::{add_prefix, first_entry, get_obj_key, param_transform, to_json_string, PrefixMode};
pub use query::query_variable;
pub use random::{random_in_range, SeededRandom};
pub use sort::{loose_cmp, sort_by, sort_values, sort_values_or_empty, Direction, SortSpec};
pub use strings::{first_non_digit_index, is_cn, numeric_prefix, to_hex};
pub use time::{
    convert_duration, current_time, current_timestamp, normalize_logged_timestamp, reformat_timestamp, CurrentTime,
    CurrentTimeOptions, DurationStyle, Separators, TimeFormat, TimeMode,
};
pub use types::{
    classify, is_array, is_boolean, is_class_array, is_function, is_null, is_number, is_object, is_positive_integer,
    is_string, is_undefined, Kind,
};
