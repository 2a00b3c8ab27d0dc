//! Object transforms: key lookup, key prefixing and serialization.
//!
//! Objects keep insertion order, so "first" means the first key written.

use crate::error::{Result, UtilError};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The first key and value of a non-empty object.
///
/// # Examples
///
/// ```
/// use applet_util::object::first_entry;
/// use serde_json::json;
///
/// let obj = json!({"school": "No.1", "grade": 3});
/// assert_eq!(first_entry(&obj), Some(("school", &json!("No.1"))));
/// assert_eq!(first_entry(&json!({})), None);
/// ```
pub fn first_entry(obj: &Value) -> Option<(&str, &Value)> {
    match obj {
        Value::Object(map) => map.iter().next().map(|(k, v)| (k.as_str(), v)),
        _ => None,
    }
}

/// The value stored under `key`, if `obj` is an object that has it.
pub fn get_obj_key<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    match obj {
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

/// How [`add_prefix`] joins the prefix and the original key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMode {
    /// `prefix.key`, for nested object form fields.
    #[default]
    Dotted,
    /// `prefixkey`, for array form fields.
    Concat,
}

/// Rename every key of an object by prefixing it.
///
/// # Examples
///
/// ```
/// use applet_util::object::{add_prefix, PrefixMode};
/// use serde_json::json;
///
/// let out = add_prefix(&json!({"a": 1, "b": 2}), "num", PrefixMode::Concat).unwrap();
/// assert_eq!(serde_json::Value::Object(out), json!({"numa": 1, "numb": 2}));
/// ```
pub fn add_prefix(obj: &Value, prefix: &str, mode: PrefixMode) -> Result<Map<String, Value>> {
    let Value::Object(map) = obj else {
        return Err(UtilError::NotObject);
    };
    Ok(map
        .iter()
        .map(|(key, value)| {
            let key = match mode {
                PrefixMode::Dotted => format!("{}.{}", prefix, key),
                PrefixMode::Concat => format!("{}{}", prefix, key),
            };
            (key, value.clone())
        })
        .collect())
}

/// Serialize arrays and objects to compact JSON. Other values yield `None`.
pub fn to_json_string(value: &Value) -> Option<String> {
    match value {
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
        _ => None,
    }
}

/// Replace a missing or `null` value with the empty string.
///
/// # Examples
///
/// ```
/// use applet_util::object::param_transform;
/// use serde_json::json;
///
/// assert_eq!(param_transform(None), json!(""));
/// assert_eq!(param_transform(Some(&json!(null))), json!(""));
/// assert_eq!(param_transform(Some(&json!(0))), json!(0));
/// ```
pub fn param_transform(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::String(String::new()),
        Some(v) => v.clone(),
    }
}
