//! Configuration options for the canonical formatter.
//!
//! [`FormatOptions`] controls indentation width, recursive key sorting, and
//! minification. It (de)serializes as the camelCase request-body shape callers
//! send over the wire:
//!
//! ```json
//! { "indentSize": 2, "sortKeys": false, "minified": false }
//! ```
//!
//! All fields are optional on the wire and fall back to the defaults above.
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{format, json, FormatOptions};
//!
//! let value = json!({"b": 2, "a": 1});
//!
//! // Defaults: 2-space indent, source key order, pretty
//! let pretty = format(&value, &FormatOptions::new());
//!
//! // Sorted and minified
//! let options = FormatOptions::minified().with_sort_keys(true);
//! assert_eq!(format(&value, &options), r#"{"a":1,"b":2}"#);
//! ```

use serde::{Deserialize, Serialize};

/// Options for rendering a value back to JSON text.
///
/// # Examples
///
/// ```rust
/// use json_recast::FormatOptions;
///
/// // Default: pretty output, 2-space indent, source key order
/// let options = FormatOptions::new();
///
/// // Minified output
/// let options = FormatOptions::minified();
///
/// // Custom configuration
/// let options = FormatOptions::new()
///     .with_indent_size(4)
///     .with_sort_keys(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Spaces of additional indentation per nesting level
    pub indent_size: usize,
    /// Re-order object keys lexicographically at every depth
    pub sort_keys: bool,
    /// Drop all insignificant whitespace
    pub minified: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent_size: 2,
            sort_keys: false,
            minified: false,
        }
    }
}

impl FormatOptions {
    /// Creates default options (pretty output, 2-space indent, source key order).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_recast::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.indent_size, 2);
    /// assert!(!options.minified);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for minified output with no insignificant whitespace.
    ///
    /// Key sorting can still be layered on top; indentation is irrelevant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_recast::FormatOptions;
    ///
    /// let options = FormatOptions::minified();
    /// assert!(options.minified);
    /// ```
    #[must_use]
    pub fn minified() -> Self {
        FormatOptions {
            minified: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects non-minified output.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Enables or disables recursive lexicographic key sorting.
    ///
    /// Sorting applies at every nesting level and never touches array order.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Enables or disables minification.
    #[must_use]
    pub fn with_minified(mut self, minified: bool) -> Self {
        self.minified = minified;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_round_trip() {
        let options = FormatOptions::new().with_indent_size(4).with_sort_keys(true);
        let encoded = serde_json::to_string(&options).unwrap();
        assert_eq!(
            encoded,
            r#"{"indentSize":4,"sortKeys":true,"minified":false}"#
        );

        let decoded: FormatOptions = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, options);
    }

    #[test]
    fn test_missing_wire_fields_use_defaults() {
        let decoded: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded, FormatOptions::default());

        let decoded: FormatOptions = serde_json::from_str(r#"{"sortKeys":true}"#).unwrap();
        assert_eq!(decoded.indent_size, 2);
        assert!(decoded.sort_keys);
        assert!(!decoded.minified);
    }
}
