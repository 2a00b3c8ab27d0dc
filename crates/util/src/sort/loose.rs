use crate::strings::number_to_string;
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Text of a value inside a joined array: `null` is empty, nested arrays
/// are joined again, objects are `[object Object]`.
fn join_item(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.as_f64().map_or_else(|| n.to_string(), number_to_string)),
        other => primitive_text(other).unwrap_or(Cow::Borrowed("")),
    }
}

/// The string a container turns into before comparison. Strings are
/// returned as is; `null`, booleans and numbers stay non-strings (`None`).
fn primitive_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Array(items) => Some(Cow::Owned(
            items.iter().map(join_item).collect::<Vec<_>>().join(","),
        )),
        Value::Object(_) => Some(Cow::Borrowed("[object Object]")),
        _ => None,
    }
}

fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        0.0
    } else {
        s.parse().unwrap_or(f64::NAN)
    }
}

/// True for values that compare as strings: strings, arrays and objects.
pub(crate) fn is_string_like(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Array(_) | Value::Object(_))
}

/// Coerce a value to a number the way a relational comparison does.
///
/// `null` is 0, booleans are 0/1, strings are parsed after trimming (the
/// empty string is 0). Arrays are joined with `,` and objects become
/// `[object Object]` before the string rule applies.
///
/// # Examples
///
/// ```
/// use applet_util::sort::to_number;
/// use serde_json::json;
///
/// assert_eq!(to_number(&json!(" 12.5 ")), 12.5);
/// assert_eq!(to_number(&json!(true)), 1.0);
/// assert_eq!(to_number(&json!(["4"])), 4.0);
/// assert!(to_number(&json!("abc")).is_nan());
/// ```
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        other => primitive_text(other).map_or(f64::NAN, |s| string_to_number(&s)),
    }
}

/// Compare with `<`/`>` semantics. Arrays and objects are first turned into
/// strings; then two strings compare by character and anything else
/// compares numerically. Pairs where neither side is greater (including
/// NaN) are `Equal`.
///
/// # Examples
///
/// ```
/// use applet_util::sort::loose_cmp;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(loose_cmp(&json!("10"), &json!("9")), Ordering::Less);
/// assert_eq!(loose_cmp(&json!("10"), &json!(9)), Ordering::Greater);
/// assert_eq!(loose_cmp(&json!(["4"]), &json!("10")), Ordering::Greater);
/// assert_eq!(loose_cmp(&json!({}), &json!(1)), Ordering::Equal);
/// ```
pub fn loose_cmp(a: &Value, b: &Value) -> Ordering {
    let (pa, pb) = (primitive_text(a), primitive_text(b));
    let (na, nb) = match (pa, pb) {
        (Some(a), Some(b)) => return (*a).cmp(&*b),
        (Some(a), None) => (string_to_number(&a), to_number(b)),
        (None, Some(b)) => (to_number(a), string_to_number(&b)),
        (None, None) => (to_number(a), to_number(b)),
    };
    na.partial_cmp(&nb).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(false)), 0.0);
        assert_eq!(to_number(&json!(-3)), -3.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["4"])), 4.0);
        assert_eq!(to_number(&json!([[7]])), 7.0);
        assert_eq!(to_number(&json!([null])), 0.0);
        assert!(to_number(&json!([1, 2])).is_nan());
        assert!(to_number(&json!([true])).is_nan());
        assert!(to_number(&json!({})).is_nan());
        assert!(to_number(&json!("1a")).is_nan());
    }

    #[test]
    fn test_loose_cmp() {
        assert_eq!(loose_cmp(&json!(1), &json!(2)), Ordering::Less);
        assert_eq!(loose_cmp(&json!(2), &json!(2.0)), Ordering::Equal);
        assert_eq!(loose_cmp(&json!("b"), &json!("a")), Ordering::Greater);
        assert_eq!(loose_cmp(&json!(null), &json!(-1)), Ordering::Greater);
        assert_eq!(loose_cmp(&json!("x"), &json!(1)), Ordering::Equal);
    }

    #[test]
    fn test_containers_against_strings_compare_as_text() {
        assert_eq!(loose_cmp(&json!({}), &json!("a")), Ordering::Less);
        assert_eq!(loose_cmp(&json!("a"), &json!({})), Ordering::Greater);
        assert_eq!(loose_cmp(&json!(["4"]), &json!("10")), Ordering::Greater);
        assert_eq!(loose_cmp(&json!([1, 2]), &json!("1,2")), Ordering::Equal);
        assert_eq!(loose_cmp(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
    }

    #[test]
    fn test_containers_against_numbers_compare_numerically() {
        assert_eq!(loose_cmp(&json!(["4"]), &json!(10)), Ordering::Less);
        assert_eq!(loose_cmp(&json!([]), &json!(1)), Ordering::Less);
        assert_eq!(loose_cmp(&json!([true]), &json!(1)), Ordering::Equal);
    }

    #[test]
    fn test_array_join_text() {
        assert_eq!(
            primitive_text(&json!([1.5, null, "x", [2, 3], {"a": 1}, false])).unwrap(),
            "1.5,,x,2,3,[object Object],false"
        );
        assert_eq!(primitive_text(&json!(1)), None);
    }
}
