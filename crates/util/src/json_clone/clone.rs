use serde_json::{Map, Value};

/// Creates a deep clone of any JSON value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use applet_util::json_clone::clone;
///
/// let original = json!({"foo": [1, 2, 3]});
/// assert_eq!(clone(&original), original);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            Value::Object(new_obj)
        }
        scalar => scalar.clone(),
    }
}

/// Copy an array or object; anything else yields an empty array.
///
/// `deep` copies nested containers recursively. A shallow copy only copies
/// the top-level container; in Rust the nested values are still owned
/// copies, so both produce equal results and differ only in how the work is
/// done.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use applet_util::json_clone::clones;
///
/// assert_eq!(clones(&json!([1, [2]]), true), json!([1, [2]]));
/// assert_eq!(clones(&json!("text"), true), json!([]));
/// ```
pub fn clones(value: &Value, deep: bool) -> Value {
    match value {
        Value::Array(_) | Value::Object(_) if deep => clone(value),
        Value::Array(arr) => Value::Array(arr.to_vec()),
        Value::Object(obj) => Value::Object(obj.clone()),
        _ => Value::Array(Vec::new()),
    }
}
