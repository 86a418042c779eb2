//! One-directional JSON-to-YAML emission.
//!
//! [`to_yaml`] renders a [`Value`] as a YAML-like block document: objects
//! become block mappings, arrays become block sequences, and scalars keep
//! their JSON literal syntax.
//!
//! ## Compatibility note
//!
//! Scalars are emitted as JSON literals rather than going through YAML's
//! scalar-folding rules — strings stay double-quoted with JSON escaping. This
//! is a deliberate simplification: the output only needs to be read by humans
//! or re-parsed by a permissive YAML reader, and JSON scalar syntax is a valid
//! YAML flow scalar. This emitter is one-directional; there is no YAML parser
//! in this crate.
//!
//! ## Output rules
//!
//! - Indentation is two spaces per level
//! - Empty containers render as the inline literals `[]` / `{}`, never block
//!   form
//! - A non-empty container rendered in a nested position begins with a
//!   newline so its block lines compose after `key: ` or `- `; top-level
//!   scalars render bare with no leading newline
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{json, to_yaml};
//!
//! assert_eq!(to_yaml(&json!({})), "{}");
//! assert_eq!(to_yaml(&json!("hi")), "\"hi\"");
//! assert_eq!(to_yaml(&json!({"a": [1, 2]})), "\na: \n  - 1\n  - 2");
//! ```

use crate::Value;

/// Renders a value as a YAML-like text block. Total over the `Value` domain.
#[must_use]
pub fn to_yaml(value: &Value) -> String {
    to_yaml_indented(value, 0)
}

/// Renders a value as YAML starting at the given indentation level.
///
/// Level `n` prefixes each emitted line with `2 * n` spaces. Non-empty
/// containers return a block that begins with a newline (see module docs);
/// scalars and empty containers return inline text.
#[must_use]
pub fn to_yaml_indented(value: &Value, indent_level: usize) -> String {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let pad = "  ".repeat(indent_level);
            let mut yaml = String::from("\n");
            for item in items {
                yaml.push_str(&pad);
                yaml.push_str("- ");
                yaml.push_str(&render_entry(item, indent_level));
                yaml.push('\n');
            }
            yaml.pop();
            yaml
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let pad = "  ".repeat(indent_level);
            let mut yaml = String::from("\n");
            for (key, entry) in map.iter() {
                yaml.push_str(&pad);
                yaml.push_str(key);
                yaml.push_str(": ");
                yaml.push_str(&render_entry(entry, indent_level));
                yaml.push('\n');
            }
            yaml.pop();
            yaml
        }
        scalar => scalar.to_string(),
    }
}

// Containers recurse one level deeper; scalars inline as JSON literals.
fn render_entry(value: &Value, indent_level: usize) -> String {
    if value.is_container() {
        to_yaml_indented(value, indent_level + 1)
    } else {
        value.to_string()
    }
}
