//! Structural type inference: JSON value to TypeScript-interface text.
//!
//! [`infer_type`] walks a [`Value`] and describes its shape as a TypeScript
//! interface declaration. Inference is purely structural:
//!
//! - scalars map to the literal type names `null` / `boolean` / `number` /
//!   `string`
//! - an empty array is the unconstrained `any[]`
//! - a non-empty array is `Array<T1 | T2 | ...>`, the union of the distinct
//!   inferred element types in first-seen order
//! - an object lists every key with its inferred type in source order, nested
//!   objects rendering as anonymous record shapes inline
//!
//! Two objects with different key sets inside one array stay two distinct
//! union members; sibling shapes are never merged into an optional-field
//! record. Inference is total and stable: equal values always produce
//! byte-identical output.
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{infer_type, json};
//!
//! let value = json!({"id": 1, "tags": ["a", "b"]});
//! assert_eq!(
//!     infer_type(&value, "Root"),
//!     "interface Root {\n  id: number;\n  tags: Array<string>\n}"
//! );
//! ```

use crate::Value;
use indexmap::IndexSet;

/// Root type name used when a caller does not supply one.
pub const DEFAULT_ROOT_NAME: &str = "Root";

/// Derives a TypeScript-interface-style description of a value's shape.
///
/// Total over the `Value` domain; `root_name` is used verbatim.
#[must_use]
pub fn infer_type(value: &Value, root_name: &str) -> String {
    format!("interface {} {}", root_name, shape(value))
}

fn shape(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                return "any[]".to_string();
            }
            // First-seen order, deduplicated by rendered type text
            let union: IndexSet<String> = items.iter().map(shape).collect();
            format!(
                "Array<{}>",
                union.into_iter().collect::<Vec<_>>().join(" | ")
            )
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let props: Vec<String> = map
                .iter()
                .map(|(key, entry)| format!("{}: {}", key, shape(entry)))
                .collect();
            format!("{{\n  {}\n}}", props.join(";\n  "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn test_scalar_types() {
        assert_eq!(infer_type(&json!(null), "Root"), "interface Root null");
        assert_eq!(infer_type(&json!(true), "Root"), "interface Root boolean");
        assert_eq!(infer_type(&json!(1.5), "Root"), "interface Root number");
        assert_eq!(infer_type(&json!("x"), "Root"), "interface Root string");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(infer_type(&json!([]), "Root"), "interface Root any[]");
        assert_eq!(infer_type(&json!({}), "Root"), "interface Root {}");
    }

    #[test]
    fn test_root_name_used_verbatim() {
        assert_eq!(infer_type(&json!(1), "ApiResponse"), "interface ApiResponse number");
        assert_eq!(DEFAULT_ROOT_NAME, "Root");
    }

    #[test]
    fn test_homogeneous_array_collapses_union() {
        assert_eq!(
            infer_type(&json!([1, 2, 3]), "Root"),
            "interface Root Array<number>"
        );
    }

    #[test]
    fn test_union_first_seen_order_deduplicated() {
        let value = json!([1, "a", 2, null, "b", 3]);
        assert_eq!(
            infer_type(&value, "Root"),
            "interface Root Array<number | string | null>"
        );
    }

    #[test]
    fn test_union_completeness() {
        let value = json!([null, true, 1, "s"]);
        let out = infer_type(&value, "Root");
        assert_eq!(out, "interface Root Array<null | boolean | number | string>");
    }

    #[test]
    fn test_object_properties_in_source_order() {
        let value = json!({"zebra": 1, "apple": "a"});
        assert_eq!(
            infer_type(&value, "Root"),
            "interface Root {\n  zebra: number;\n  apple: string\n}"
        );
    }

    #[test]
    fn test_nested_object_shapes_inline() {
        let value = json!({"user": {"name": "Ada", "active": true}});
        assert_eq!(
            infer_type(&value, "Root"),
            "interface Root {\n  user: {\n  name: string;\n  active: boolean\n}\n}"
        );
    }

    #[test]
    fn test_distinct_object_shapes_stay_distinct_in_union() {
        let value = json!([{"a": 1}, {"b": "x"}, {"a": 2}]);
        assert_eq!(
            infer_type(&value, "Root"),
            "interface Root Array<{\n  a: number\n} | {\n  b: string\n}>"
        );
    }

    #[test]
    fn test_stability_on_equal_values() {
        let value = json!({"a": [1, "x", {"n": null}], "b": {}});
        assert_eq!(infer_type(&value, "Root"), infer_type(&value.clone(), "Root"));
    }
}
