//! Dotted/bracketed path lookup into a value.
//!
//! [`resolve_path`] navigates a [`Value`] with an expression like
//! `data.users[0].name` and returns a reference to the addressed sub-value,
//! or a [`PathError`] naming exactly what failed.
//!
//! ## Path grammar
//!
//! A path is a sequence of dot-separated segments. Each segment is an
//! optional property name followed by zero or more `[<non-negative integer>]`
//! index accessors:
//!
//! - `users` — property lookup
//! - `users[0]` — property lookup then index
//! - `matrix[1][2]` — chained indices
//! - `[0]` — index into the current value directly (useful when the root is
//!   an array)
//!
//! The empty path resolves to the root value itself. Resolution is read-only
//! and never allocates a new `Value`.
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{json, resolve_path, PathError};
//!
//! let value = json!({"data": {"users": [{"name": "Ada"}]}});
//!
//! let name = resolve_path(&value, "data.users[0].name").unwrap();
//! assert_eq!(name.as_str(), Some("Ada"));
//!
//! let err = resolve_path(&value, "data.missing").unwrap_err();
//! assert_eq!(err, PathError::PropertyNotFound("missing".to_string()));
//! ```

use crate::{PathError, Value};

/// Resolves a dotted/bracketed path against a value.
///
/// Walks left to right; the first segment that cannot be resolved aborts with
/// the matching [`PathError`]. The empty path returns `value` itself.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, PathError> {
    if path.is_empty() {
        return Ok(value);
    }

    let mut current = value;
    for segment in path.split('.') {
        let (name, indices) = parse_segment(segment)?;

        if !name.is_empty() {
            current = match current {
                Value::Object(map) => map
                    .get(name)
                    .ok_or_else(|| PathError::PropertyNotFound(name.to_string()))?,
                _ => return Err(PathError::NotIndexable(segment.to_string())),
            };
        }

        for index in indices {
            current = match current {
                Value::Array(items) => items.get(index).ok_or(PathError::IndexOutOfRange {
                    segment: segment.to_string(),
                    index,
                })?,
                _ => {
                    return Err(PathError::IndexOutOfRange {
                        segment: segment.to_string(),
                        index,
                    })
                }
            };
        }
    }
    Ok(current)
}

// Splits one segment into its property name (possibly empty) and its index
// accessors. `users[0][1]` -> ("users", [0, 1]).
fn parse_segment(segment: &str) -> Result<(&str, Vec<usize>), PathError> {
    if segment.is_empty() {
        return Err(PathError::InvalidSegment(String::new()));
    }

    let (name, mut rest) = match segment.find('[') {
        Some(pos) => segment.split_at(pos),
        None => (segment, ""),
    };
    if name.contains(']') {
        return Err(PathError::InvalidSegment(segment.to_string()));
    }

    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner = rest
            .strip_prefix('[')
            .ok_or_else(|| PathError::InvalidSegment(segment.to_string()))?;
        let close = inner
            .find(']')
            .ok_or_else(|| PathError::InvalidSegment(segment.to_string()))?;
        let digits = &inner[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::InvalidSegment(segment.to_string()));
        }
        let index: usize = digits
            .parse()
            .map_err(|_| PathError::InvalidSegment(segment.to_string()))?;
        indices.push(index);
        rest = &inner[close + 1..];
    }
    Ok((name, indices))
}
