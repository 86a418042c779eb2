//! Tabular CSV export for object-shaped values.
//!
//! [`to_csv`] renders an array of objects as a comma-separated table: the
//! header row comes from the first element's keys in source order, and each
//! element contributes one row. A single object renders as a header row plus
//! one value row. Cell values are JSON-encoded (strings stay quoted), and a
//! key missing from a later element renders as an empty cell.
//!
//! This is an export convenience, not a CSV dialect implementation; cells are
//! not additionally CSV-quoted beyond their JSON encoding.
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{json, to_csv};
//!
//! let value = json!([
//!     {"id": 1, "name": "Widget"},
//!     {"id": 2, "name": "Gadget"}
//! ]);
//! assert_eq!(to_csv(&value).unwrap(), "id,name\n1,\"Widget\"\n2,\"Gadget\"");
//! ```

use crate::{Error, Result, Value};

/// Renders an array of objects (or a single object) as CSV text.
///
/// # Errors
///
/// Returns [`Error::Unsupported`] when the value is a scalar, or an array
/// containing a non-object element. An empty array yields an empty string.
pub fn to_csv(value: &Value) -> Result<String> {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return Ok(String::new());
            }
            let Value::Object(first) = &items[0] else {
                return Err(Error::unsupported("array elements must be objects"));
            };
            let headers: Vec<&String> = first.keys().collect();
            let mut lines = Vec::with_capacity(items.len() + 1);
            lines.push(
                headers
                    .iter()
                    .map(|h| h.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            );
            for item in items {
                let Value::Object(map) = item else {
                    return Err(Error::unsupported("array elements must be objects"));
                };
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(Value::to_string).unwrap_or_default())
                    .collect();
                lines.push(row.join(","));
            }
            Ok(lines.join("\n"))
        }
        Value::Object(map) => {
            let headers: Vec<String> = map.keys().cloned().collect();
            let row: Vec<String> = map.values().map(Value::to_string).collect();
            Ok(format!("{}\n{}", headers.join(","), row.join(",")))
        }
        _ => Err(Error::unsupported("value must be an array or object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json;

    #[test]
    fn test_array_of_objects() {
        let value = json!([
            {"id": 1, "active": true},
            {"id": 2, "active": false}
        ]);
        assert_eq!(to_csv(&value).unwrap(), "id,active\n1,true\n2,false");
    }

    #[test]
    fn test_headers_come_from_first_element() {
        let value = json!([
            {"id": 1, "name": "Widget"},
            {"id": 2, "price": 9.99}
        ]);
        // "price" is not a header; missing "name" renders empty
        assert_eq!(to_csv(&value).unwrap(), "id,name\n1,\"Widget\"\n2,");
    }

    #[test]
    fn test_single_object() {
        let value = json!({"id": 1, "name": "Widget"});
        assert_eq!(to_csv(&value).unwrap(), "id,name\n1,\"Widget\"");
    }

    #[test]
    fn test_empty_array_is_empty_text() {
        assert_eq!(to_csv(&json!([])).unwrap(), "");
    }

    #[test]
    fn test_container_cells_render_minified() {
        let value = json!([{"id": 1, "tags": ["a", "b"]}]);
        assert_eq!(to_csv(&value).unwrap(), "id,tags\n1,[\"a\",\"b\"]");
    }

    #[test]
    fn test_unsupported_shapes() {
        assert!(matches!(to_csv(&json!(42)), Err(Error::Unsupported(_))));
        assert!(matches!(to_csv(&json!("x")), Err(Error::Unsupported(_))));
        assert!(matches!(
            to_csv(&json!([1, 2])),
            Err(Error::Unsupported(_))
        ));
        assert!(matches!(
            to_csv(&json!([{"a": 1}, 2])),
            Err(Error::Unsupported(_))
        ));
    }
}
