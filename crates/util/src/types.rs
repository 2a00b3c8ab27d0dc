use serde_json::Value;
use std::fmt;

/// The runtime kind of a dynamically typed value.
///
/// This is a closed enumeration: callers match on it instead of comparing
/// lowercase type names. [`Kind::as_str`] still yields the lowercase name
/// (`"number"`, `"null"`, ...) for places that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    String,
    Boolean,
    Null,
    Undefined,
    Array,
    Object,
    /// Never produced by JSON data, kept so the set of kinds is complete.
    Function,
}

impl Kind {
    /// Classify an optional value. An absent value is [`Kind::Undefined`].
    ///
    /// # Examples
    ///
    /// ```
    /// use applet_util::types::Kind;
    /// use serde_json::json;
    ///
    /// assert_eq!(Kind::of(Some(&json!(1.5))), Kind::Number);
    /// assert_eq!(Kind::of(Some(&json!(null))), Kind::Null);
    /// assert_eq!(Kind::of(None), Kind::Undefined);
    /// ```
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Kind::Undefined,
            Some(Value::Null) => Kind::Null,
            Some(Value::Bool(_)) => Kind::Boolean,
            Some(Value::Number(_)) => Kind::Number,
            Some(Value::String(_)) => Kind::String,
            Some(Value::Array(_)) => Kind::Array,
            Some(Value::Object(_)) => Kind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Undefined => "undefined",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a present value.
pub fn classify(value: &Value) -> Kind {
    Kind::of(Some(value))
}

/// A "real" number: finite, not NaN and strictly below `f64::MAX`.
pub fn is_number_f64(n: f64) -> bool {
    !n.is_nan() && n.is_finite() && n < f64::MAX
}

/// Check if a value is a real number.
///
/// # Examples
///
/// ```
/// use applet_util::types::is_number;
/// use serde_json::json;
///
/// assert!(is_number(&json!(42)));
/// assert!(is_number(&json!(-0.5)));
/// assert!(!is_number(&json!("42")));
/// assert!(!is_number(&json!(f64::MAX)));
/// ```
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(is_number_f64),
        _ => false,
    }
}

/// A non-negative whole number, zero included.
pub fn is_positive_integer_f64(n: f64) -> bool {
    is_number_f64(n) && n >= 0.0 && n.fract() == 0.0
}

/// Check if a value is a non-negative integer (zero included).
///
/// # Examples
///
/// ```
/// use applet_util::types::is_positive_integer;
/// use serde_json::json;
///
/// assert!(is_positive_integer(&json!(5)));
/// assert!(is_positive_integer(&json!(0)));
/// assert!(!is_positive_integer(&json!(-1)));
/// assert!(!is_positive_integer(&json!(5.5)));
/// ```
pub fn is_positive_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_u64() => true,
        Value::Number(n) if n.is_i64() => false,
        Value::Number(n) => n.as_f64().is_some_and(is_positive_integer_f64),
        _ => false,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

pub fn is_undefined(value: Option<&Value>) -> bool {
    value.is_none()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// JSON has no functions, so this is always false.
pub fn is_function(_value: &Value) -> bool {
    false
}

/// Check if a value is array-like: an object carrying a `length` property
/// that is a non-negative integer.
///
/// # Examples
///
/// ```
/// use applet_util::types::is_class_array;
/// use serde_json::json;
///
/// assert!(is_class_array(&json!({"0": "a", "1": "b", "length": 2})));
/// assert!(!is_class_array(&json!({"length": -1})));
/// assert!(!is_class_array(&json!(["a", "b"])));
/// ```
pub fn is_class_array(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.get("length").is_some_and(is_positive_integer),
        _ => false,
    }
}
