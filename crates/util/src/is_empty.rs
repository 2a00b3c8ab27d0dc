use serde_json::{Map, Value};

/// Check if a value is an empty array or an object with no own keys.
///
/// Every other kind (including empty strings and `null`) is not considered
/// empty.
///
/// # Examples
///
/// ```
/// use applet_util::is_empty::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!([])));
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&json!([1])));
/// assert!(!is_empty(&json!("")));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => is_empty_map(map),
        _ => false,
    }
}

/// Check if a serde_json::Map is empty.
pub fn is_empty_map(obj: &Map<String, Value>) -> bool {
    obj.is_empty()
}
