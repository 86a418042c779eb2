//! # json_recast
//!
//! A pure, deterministic JSON transformation toolkit.
//!
//! ## What is json_recast?
//!
//! The structured-data engine behind a suite of browser developer utilities:
//! the single shared implementation of the JSON re-rendering logic that the
//! formatter, converter, comparison, and inspection features all call into.
//! Every transformation is a pure function of an in-memory [`Value`] — no
//! shared state, no I/O, no surprises.
//!
//! ## Key Features
//!
//! - **Canonical formatting**: deterministic JSON text with configurable
//!   indentation, optional minification, and recursive key sorting
//! - **YAML export**: one-directional block-style YAML emission
//! - **Type inference**: TypeScript-interface-style structural type
//!   descriptions, with union inference across heterogeneous arrays
//! - **Structural diffing**: nested added/removed/changed records between two
//!   documents, positional for arrays
//! - **Path lookup**: `data.users[0].name`-style addressing with precise
//!   failure reasons
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! json_recast = "0.1"
//! ```
//!
//! ### Formatting
//!
//! ```rust
//! use json_recast::{format_str, FormatOptions};
//!
//! let options = FormatOptions::new().with_sort_keys(true);
//! let out = format_str(r#"{"b":2,"a":1}"#, &options).unwrap();
//! assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": 2\n}");
//! ```
//!
//! ### Converting and inspecting
//!
//! ```rust
//! use json_recast::{diff, from_str, infer_type, json, resolve_path, to_yaml};
//!
//! let value = from_str(r#"{"users":[{"name":"Ada"}]}"#).unwrap();
//!
//! let yaml = to_yaml(&value);
//! let types = infer_type(&value, "Root");
//! let name = resolve_path(&value, "users[0].name").unwrap();
//! assert_eq!(name.as_str(), Some("Ada"));
//!
//! let changes = diff(&value, &json!({"users": []}));
//! assert!(changes.is_some());
//! ```
//!
//! ## Purity Guarantees
//!
//! All transformations are total over the `Value` domain except
//! [`resolve_path`], which returns a typed [`PathError`]. Parsing malformed
//! text is the only other failure mode, confined to the `*_str` helpers.
//! Calls are independent, synchronous computations; a host serving many
//! concurrent requests can invoke them per-request without coordination.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`format.rs`** - canonical formatting with options
//! - **`convert.rs`** - YAML, TypeScript, and CSV output
//! - **`inspect.rs`** - structural diffing and path lookup
//!
//! Run any demo with: `cargo run --example <name>`

pub mod csv;
pub mod diff;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod typescript;
pub mod value;
pub mod yaml;

pub use csv::to_csv;
pub use diff::{diff, Diff};
pub use error::{Error, PathError, Result};
pub use format::format;
pub use map::JsonMap;
pub use options::FormatOptions;
pub use path::resolve_path;
pub use typescript::{infer_type, DEFAULT_ROOT_NAME};
pub use value::{Number, Value};
pub use yaml::{to_yaml, to_yaml_indented};

/// Parses JSON text into a [`Value`].
///
/// This is the boundary between raw text and the transformation functions;
/// everything downstream of it is total.
///
/// # Examples
///
/// ```rust
/// use json_recast::from_str;
///
/// let value = from_str(r#"{"x": 1}"#).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] with line and column information when the input
/// is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Value> {
    serde_json::from_str(s).map_err(Error::from)
}

/// Parses JSON text and re-renders it according to `options`.
///
/// # Examples
///
/// ```rust
/// use json_recast::{format_str, FormatOptions};
///
/// let out = format_str(r#"{ "a" : 1 }"#, &FormatOptions::minified()).unwrap();
/// assert_eq!(out, r#"{"a":1}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_str(json: &str, options: &FormatOptions) -> Result<String> {
    Ok(format(&from_str(json)?, options))
}

/// Parses JSON text and emits it as YAML.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_yaml_str(json: &str) -> Result<String> {
    Ok(to_yaml(&from_str(json)?))
}

/// Parses JSON text and infers its TypeScript interface description.
///
/// # Examples
///
/// ```rust
/// use json_recast::infer_type_str;
///
/// let out = infer_type_str(r#"{"id": 1}"#, "Root").unwrap();
/// assert_eq!(out, "interface Root {\n  id: number\n}");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn infer_type_str(json: &str, root_name: &str) -> Result<String> {
    Ok(infer_type(&from_str(json)?, root_name))
}

/// Parses two JSON texts and diffs them structurally.
///
/// Returns `Ok(None)` when the two documents are deeply equal.
///
/// # Errors
///
/// Returns [`Error::Parse`] when either input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn diff_str(before: &str, after: &str) -> Result<Option<Diff>> {
    Ok(diff(&from_str(before)?, &from_str(after)?))
}
