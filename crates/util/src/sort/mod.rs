//! Sorting of dynamically typed lists.
//!
//! [`sort_by`] orders JSON values by an optional object key, with a
//! direction and a key transform, using the loose `<`/`>` comparison the
//! applet's data relies on (numeric strings compare against numbers).
//!
//! The sort is stable: elements whose keys compare equal keep their input
//! order in both directions.

mod insertion;
mod loose;

pub use insertion::insertion_sort_by;
pub use loose::{loose_cmp, to_number};

use loose::is_string_like;

use crate::error::{Result, UtilError};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Lists up to this length are sorted with [`insertion_sort_by`].
const INSERTION_SORT_MAX: usize = 16;

/// Key transform applied before comparing.
pub type Transform = fn(&Value) -> Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// How to order a list: which key, which way, and an optional key transform.
///
/// # Examples
///
/// ```
/// use applet_util::sort::SortSpec;
///
/// let spec = SortSpec::new().key("amount").descending();
/// assert_eq!(spec.key.as_deref(), Some("amount"));
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    /// Property to sort objects by. Elements without it sort by themselves.
    pub key: Option<String>,
    pub direction: Direction,
    #[serde(skip)]
    pub transform: Option<Transform>,
}

impl fmt::Debug for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortSpec")
            .field("key", &self.key)
            .field("direction", &self.direction)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn ascending(mut self) -> Self {
        self.direction = Direction::Ascending;
        self
    }

    pub fn descending(mut self) -> Self {
        self.direction = Direction::Descending;
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    fn extract<'a>(&self, item: &'a Value) -> Cow<'a, Value> {
        let key = match (item, &self.key) {
            (Value::Object(map), Some(key)) => match map.get(key) {
                Some(v) if !v.is_null() => v,
                _ => item,
            },
            _ => item,
        };
        match self.transform {
            Some(transform) => Cow::Owned(transform(key)),
            None => Cow::Borrowed(key),
        }
    }

    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        let ord = loose_cmp(a, b);
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// Loose comparison is only a total order when every key compares as text
/// (strings, arrays, objects), or when none does and every key coerces to a
/// real number. Anything
/// else goes through insertion sort, which tolerates inconsistent orderings.
fn has_total_order<'a>(mut keys: impl Iterator<Item = &'a Value> + Clone) -> bool {
    keys.clone().all(is_string_like) || keys.all(|k| !is_string_like(k) && !to_number(k).is_nan())
}

/// Return a newly ordered copy of `items`.
///
/// # Examples
///
/// ```
/// use applet_util::sort::{sort_by, SortSpec};
/// use serde_json::json;
///
/// let sorted = sort_by(&[json!(3), json!(1), json!(2)], &SortSpec::new());
/// assert_eq!(sorted, vec![json!(1), json!(2), json!(3)]);
///
/// let rows = [json!({"a": 1}), json!({"a": 3})];
/// let sorted = sort_by(&rows, &SortSpec::new().key("a").descending());
/// assert_eq!(sorted, vec![json!({"a": 3}), json!({"a": 1})]);
/// ```
pub fn sort_by(items: &[Value], spec: &SortSpec) -> Vec<Value> {
    let mut keyed: Vec<(Cow<'_, Value>, &Value)> =
        items.iter().map(|item| (spec.extract(item), item)).collect();

    if keyed.len() > INSERTION_SORT_MAX && has_total_order(keyed.iter().map(|(key, _)| &**key)) {
        keyed.sort_by(|a, b| spec.compare(&a.0, &b.0));
    } else {
        insertion_sort_by(&mut keyed, |a, b| spec.compare(&a.0, &b.0));
    }

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Sort a dynamically typed value, which must be an array.
pub fn sort_values(value: &Value, spec: &SortSpec) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(sort_by(items, spec)),
        other => {
            tracing::debug!(kind = %crate::types::classify(other), "sort input is not an array");
            Err(UtilError::NotArray)
        }
    }
}

/// Like [`sort_values`], but a non-array yields an empty list.
pub fn sort_values_or_empty(value: &Value, spec: &SortSpec) -> Vec<Value> {
    sort_values(value, spec).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn negate(v: &Value) -> Value {
        json!(-to_number(v))
    }

    #[test]
    fn test_numbers_ascending() {
        let out = sort_by(&[json!(3), json!(1), json!(2)], &SortSpec::new().ascending());
        assert_eq!(out, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_objects_by_key_descending() {
        let out = sort_by(&[json!({"a": 3}), json!({"a": 1})], &SortSpec::new().key("a").descending());
        assert_eq!(out, vec![json!({"a": 3}), json!({"a": 1})]);
    }

    #[test]
    fn test_strings() {
        let out = sort_by(&[json!("pear"), json!("apple"), json!("fig")], &SortSpec::new());
        assert_eq!(out, vec![json!("apple"), json!("fig"), json!("pear")]);
    }

    #[test]
    fn test_numeric_strings_against_numbers() {
        let out = sort_by(&[json!("10"), json!(9), json!("2")], &SortSpec::new());
        assert_eq!(out, vec![json!("2"), json!(9), json!("10")]);
    }

    #[test]
    fn test_transform() {
        let out = sort_by(&[json!(1), json!(3), json!(2)], &SortSpec::new().transform(negate));
        assert_eq!(out, vec![json!(3), json!(2), json!(1)]);
    }

    #[test]
    fn test_missing_key_falls_back_to_element() {
        let rows = [json!({"a": 2}), json!(1), json!({"a": null, "b": 0})];
        let out = sort_by(&rows, &SortSpec::new().key("a"));
        // The object without a usable key compares as NaN, so it is equal to
        // everything and stays where it started relative to its neighbours.
        assert_eq!(out[0], json!(1));
        assert_eq!(out[1], json!({"a": 2}));
    }

    #[test]
    fn test_stable_in_both_directions() {
        let rows = [
            json!({"a": 1, "id": "x"}),
            json!({"a": 2, "id": "y"}),
            json!({"a": 1, "id": "z"}),
        ];
        let asc = sort_by(&rows, &SortSpec::new().key("a"));
        assert_eq!(asc, vec![rows[0].clone(), rows[2].clone(), rows[1].clone()]);
        let desc = sort_by(&rows, &SortSpec::new().key("a").descending());
        assert_eq!(desc, vec![rows[1].clone(), rows[0].clone(), rows[2].clone()]);
    }

    #[test]
    fn test_long_list_uses_same_order() {
        let items: Vec<Value> = (0..40).rev().map(|n| json!(n)).collect();
        let out = sort_by(&items, &SortSpec::new());
        let expected: Vec<Value> = (0..40).map(|n| json!(n)).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_long_mixed_list_does_not_panic() {
        let mut items: Vec<Value> = (0..30).map(|n| json!(n)).collect();
        items.push(json!({"x": 1}));
        items.push(json!("7"));
        let out = sort_by(&items, &SortSpec::new());
        assert_eq!(out.len(), 32);
        assert_eq!(out[0], json!(0));
    }

    #[test]
    fn test_long_list_of_containers_and_strings() {
        let mut items: Vec<Value> = (0..20).map(|n| json!(format!("k{:02}", n))).collect();
        items.push(json!({"x": 1}));
        items.push(json!(["a"]));
        let out = sort_by(&items, &SortSpec::new());
        assert_eq!(out[0], json!({"x": 1}));
        assert_eq!(out[1], json!(["a"]));
        assert_eq!(out[2], json!("k00"));
        assert_eq!(out[21], json!("k19"));
    }

    #[test]
    fn test_sort_values_rejects_non_array() {
        assert_eq!(sort_values(&json!({"a": 1}), &SortSpec::new()), Err(UtilError::NotArray));
        assert!(sort_values_or_empty(&json!("abc"), &SortSpec::new()).is_empty());
        assert_eq!(
            sort_values(&json!([2, 1]), &SortSpec::new()).unwrap(),
            vec![json!(1), json!(2)]
        );
    }

    #[test]
    fn test_spec_deserialize() {
        let spec: SortSpec = serde_json::from_str(r#"{"key": "price", "direction": "descending"}"#).unwrap();
        assert_eq!(spec.key.as_deref(), Some("price"));
        assert_eq!(spec.direction, Direction::Descending);
        assert!(spec.transform.is_none());
    }
}
