//! String utilities.
//!
//! Digit scanning used by the timestamp formatters, number rendering used by
//! the money formatters, and a few character predicates.

mod digits;
mod hex;
mod number;
mod util;

pub use digits::{first_non_digit_index, is_all_digits, numeric_prefix, pad2};
pub use hex::to_hex;
pub use number::number_to_string;
pub use util::{is_cn, is_cn_char};
