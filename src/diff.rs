//! Recursive structural diffing of two JSON values.
//!
//! [`diff`] compares two [`Value`]s and returns a nested [`Diff`] describing
//! only what differs; deeply-equal inputs produce `None`. Leaves are marked
//! [`Diff::Added`], [`Diff::Removed`], or [`Diff::Changed`]; unchanged
//! keys and indices are omitted at every depth, so the result is proportional
//! to the actual difference.
//!
//! ## Positional array semantics
//!
//! Arrays compare strictly by index, not by content alignment. Inserting an
//! element in the middle of an array therefore reports a `Changed` entry for
//! every later index plus one `Added` at the end. This is the simplest
//! well-defined policy and is kept deliberately; there is no edit-distance
//! matching.
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{diff, json, Diff};
//!
//! assert!(diff(&json!({"a": 1}), &json!({"a": 1})).is_none());
//!
//! let result = diff(&json!({"a": 1}), &json!({"a": 2})).unwrap();
//! let Diff::Object(entries) = result else { panic!() };
//! assert_eq!(
//!     entries.get("a"),
//!     Some(&Diff::Changed { from: json!(1), to: json!(2) })
//! );
//! ```

use crate::{JsonMap, Value};
use indexmap::IndexMap;

/// One node of a difference tree.
///
/// `Object` and `Array` nodes hold only the keys/indices that differ;
/// the leaf variants carry the values involved.
#[derive(Debug, Clone, PartialEq)]
pub enum Diff {
    /// Present only in `after`
    Added(Value),
    /// Present only in `before`
    Removed(Value),
    /// Present in both but not deeply equal
    Changed { from: Value, to: Value },
    /// Differences nested inside an object, keyed by property name
    Object(IndexMap<String, Diff>),
    /// Differences nested inside an array, keyed by index
    Array(Vec<(usize, Diff)>),
}

/// Compares two values structurally. Returns `None` when deeply equal.
///
/// Deep equality is tag plus value for scalars, pairwise by index for arrays,
/// and key-set plus per-key value for objects (order-independent). Scalars of
/// different tags are a `Changed` leaf, never an error.
#[must_use]
pub fn diff(before: &Value, after: &Value) -> Option<Diff> {
    match (before, after) {
        (Value::Object(a), Value::Object(b)) => diff_objects(a, b),
        (Value::Array(a), Value::Array(b)) => diff_arrays(a, b),
        _ => {
            if before == after {
                None
            } else {
                Some(Diff::Changed {
                    from: before.clone(),
                    to: after.clone(),
                })
            }
        }
    }
}

// Before-key order first, additions appended in after-key order.
fn diff_objects(before: &JsonMap, after: &JsonMap) -> Option<Diff> {
    let mut entries = IndexMap::new();
    for (key, before_value) in before.iter() {
        match after.get(key) {
            Some(after_value) => {
                if let Some(child) = diff(before_value, after_value) {
                    entries.insert(key.clone(), child);
                }
            }
            None => {
                entries.insert(key.clone(), Diff::Removed(before_value.clone()));
            }
        }
    }
    for (key, after_value) in after.iter() {
        if !before.contains_key(key) {
            entries.insert(key.clone(), Diff::Added(after_value.clone()));
        }
    }
    if entries.is_empty() {
        None
    } else {
        Some(Diff::Object(entries))
    }
}

fn diff_arrays(before: &[Value], after: &[Value]) -> Option<Diff> {
    let mut entries = Vec::new();
    for (index, (before_value, after_value)) in before.iter().zip(after).enumerate() {
        if let Some(child) = diff(before_value, after_value) {
            entries.push((index, child));
        }
    }
    if after.len() > before.len() {
        for (index, after_value) in after.iter().enumerate().skip(before.len()) {
            entries.push((index, Diff::Added(after_value.clone())));
        }
    } else {
        for (index, before_value) in before.iter().enumerate().skip(after.len()) {
            entries.push((index, Diff::Removed(before_value.clone())));
        }
    }
    if entries.is_empty() {
        None
    } else {
        Some(Diff::Array(entries))
    }
}

impl Diff {
    /// Renders the difference tree as a plain [`Value`] for display or
    /// transport.
    ///
    /// Leaves become `{"added": v}`, `{"removed": v}`, or
    /// `{"changed": {"from": a, "to": b}}`; array indices become string keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_recast::{diff, json};
    ///
    /// let result = diff(&json!({"a": 1}), &json!({"a": 2})).unwrap();
    /// assert_eq!(
    ///     result.to_value().to_string(),
    ///     r#"{"a":{"changed":{"from":1,"to":2}}}"#
    /// );
    /// ```
    #[must_use]
    pub fn to_value(&self) -> Value {
        fn leaf(tag: &str, value: Value) -> Value {
            let mut map = JsonMap::new();
            map.insert(tag.to_string(), value);
            Value::Object(map)
        }

        match self {
            Diff::Added(v) => leaf("added", v.clone()),
            Diff::Removed(v) => leaf("removed", v.clone()),
            Diff::Changed { from, to } => {
                let mut change = JsonMap::new();
                change.insert("from".to_string(), from.clone());
                change.insert("to".to_string(), to.clone());
                leaf("changed", Value::Object(change))
            }
            Diff::Object(entries) => {
                let mut map = JsonMap::new();
                for (key, child) in entries {
                    map.insert(key.clone(), child.to_value());
                }
                Value::Object(map)
            }
            Diff::Array(entries) => {
                let mut map = JsonMap::new();
                for (index, child) in entries {
                    map.insert(index.to_string(), child.to_value());
                }
                Value::Object(map)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    fn object_entries(d: Diff) -> IndexMap<String, Diff> {
        match d {
            Diff::Object(entries) => entries,
            other => panic!("expected object diff, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_values_produce_no_diff() {
        for value in [
            json!(null),
            json!(42),
            json!("x"),
            json!([1, [2, {"a": true}]]),
            json!({"a": {"b": []}}),
        ] {
            assert_eq!(diff(&value, &value.clone()), None);
        }
    }

    #[test]
    fn test_object_key_order_does_not_matter() {
        let a = json!({"x": 1, "y": 2});
        let b = json!({"y": 2, "x": 1});
        assert_eq!(diff(&a, &b), None);
    }

    #[test]
    fn test_changed_leaf() {
        let entries = object_entries(diff(&json!({"a": 1}), &json!({"a": 2})).unwrap());
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries.get("a"),
            Some(&Diff::Changed {
                from: json!(1),
                to: json!(2)
            })
        );
    }

    #[test]
    fn test_added_and_removed_leaves() {
        let entries = object_entries(diff(&json!({"a": 1}), &json!({"a": 1, "b": 2})).unwrap());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("b"), Some(&Diff::Added(json!(2))));

        let entries = object_entries(diff(&json!({"a": 1, "b": 2}), &json!({"a": 1})).unwrap());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("b"), Some(&Diff::Removed(json!(2))));
    }

    #[test]
    fn test_cross_tag_change_is_a_leaf_not_an_error() {
        let result = diff(&json!(1), &json!("1")).unwrap();
        assert_eq!(
            result,
            Diff::Changed {
                from: json!(1),
                to: json!("1")
            }
        );
        // Container vs scalar also collapses to a single leaf
        let result = diff(&json!({"a": 1}), &json!([1])).unwrap();
        assert!(matches!(result, Diff::Changed { .. }));
    }

    #[test]
    fn test_nested_diff_omits_unchanged_branches() {
        let before = json!({"keep": {"x": 1}, "edit": {"y": 1}});
        let after = json!({"keep": {"x": 1}, "edit": {"y": 2}});
        let entries = object_entries(diff(&before, &after).unwrap());
        assert!(!entries.contains_key("keep"));
        let nested = entries.get("edit").cloned().unwrap();
        let nested = object_entries(nested);
        assert_eq!(
            nested.get("y"),
            Some(&Diff::Changed {
                from: json!(1),
                to: json!(2)
            })
        );
    }

    #[test]
    fn test_array_positional_cascade_on_middle_insert() {
        let before = json!([1, 2, 3]);
        let after = json!([1, 9, 2, 3]);
        let Some(Diff::Array(entries)) = diff(&before, &after) else {
            panic!("expected array diff");
        };
        assert_eq!(
            entries,
            vec![
                (
                    1,
                    Diff::Changed {
                        from: json!(2),
                        to: json!(9)
                    }
                ),
                (
                    2,
                    Diff::Changed {
                        from: json!(3),
                        to: json!(2)
                    }
                ),
                (3, Diff::Added(json!(3))),
            ]
        );
    }

    #[test]
    fn test_array_shrink_reports_removed_tail() {
        let Some(Diff::Array(entries)) = diff(&json!([1, 2, 3]), &json!([1])) else {
            panic!("expected array diff");
        };
        assert_eq!(
            entries,
            vec![(1, Diff::Removed(json!(2))), (2, Diff::Removed(json!(3)))]
        );
    }

    #[test]
    fn test_to_value_rendering() {
        let result = diff(&json!({"a": [1, 2]}), &json!({"a": [1], "b": true})).unwrap();
        assert_eq!(
            result.to_value().to_string(),
            r#"{"a":{"1":{"removed":2}},"b":{"added":true}}"#
        );
    }
}
