use thiserror::Error;

/// Failure reasons for the fallible helpers in this crate.
///
/// None of the helpers panic on bad input; they report one of these instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    #[error("NOT_ARRAY")]
    NotArray,

    #[error("NOT_OBJECT")]
    NotObject,

    #[error("expected a string or number amount, got {0}")]
    NotAmount(&'static str),

    #[error("amount is not numeric: {0:?}")]
    InvalidAmount(String),

    #[error("invalid random range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("duration must be non-negative, got {0}")]
    NegativeDuration(i64),
}

pub type Result<T> = std::result::Result<T, UtilError>;
