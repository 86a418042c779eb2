//! Error types for JSON transformation.
//!
//! The error surface is deliberately narrow: every transformation over an
//! already-parsed [`Value`](crate::Value) is total except path resolution.
//! Failures therefore come from exactly three places:
//!
//! - **Parse errors**: the text-boundary helpers (`from_str`, `format_str`,
//!   ...) reject malformed JSON with line/column information
//! - **Path errors**: [`resolve_path`](crate::resolve_path) reports the
//!   offending segment, key, or index verbatim
//! - **Unsupported input**: CSV export only accepts arrays of objects or a
//!   single object
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{from_str, Error};
//!
//! let result = from_str("{\"name\": ");
//! assert!(matches!(result, Err(Error::Parse { .. })));
//!
//! if let Err(err) = from_str("{\"name\": ") {
//!     eprintln!("Parse error: {}", err);
//!     // Error messages include line and column numbers
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Malformed JSON text at the parse boundary
    #[error("invalid JSON at line {line}, column {col}: {msg}")]
    Parse { line: usize, col: usize, msg: String },

    /// Path resolution failure, passed through verbatim
    #[error(transparent)]
    Path(#[from] PathError),

    /// Input shape a transformation cannot represent
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

/// A failure while walking a dotted/bracketed path through a value.
///
/// Each variant names the path segment that could not be resolved, so the
/// caller can surface it as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// A named segment addressed a key absent from the object
    #[error("property \"{0}\" not found")]
    PropertyNotFound(String),

    /// An index accessor addressed a non-array or ran past the end
    #[error("index {index} out of range at `{segment}`")]
    IndexOutOfRange { segment: String, index: usize },

    /// A named segment was applied to a scalar or an array
    #[error("cannot descend into `{0}`: not an object")]
    NotIndexable(String),

    /// A segment that does not match the path grammar
    #[error("invalid path segment `{0}`")]
    InvalidSegment(String),
}

impl Error {
    /// Creates a parse error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_recast::Error;
    ///
    /// let err = Error::parse(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn parse(line: usize, col: usize, msg: &str) -> Self {
        Error::Parse {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unsupported-input error.
    pub fn unsupported(msg: &str) -> Self {
        Error::Unsupported(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse {
            line: err.line(),
            col: err.column(),
            msg: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_error_messages_name_the_segment() {
        let err = PathError::PropertyNotFound("missing".to_string());
        assert_eq!(err.to_string(), "property \"missing\" not found");

        let err = PathError::IndexOutOfRange {
            segment: "users[9]".to_string(),
            index: 9,
        };
        assert_eq!(err.to_string(), "index 9 out of range at `users[9]`");

        let err = PathError::NotIndexable("name".to_string());
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_parse_error_carries_position() {
        let err = Error::parse(3, 14, "expected `,` or `}`");
        let text = err.to_string();
        assert!(text.contains("line 3"));
        assert!(text.contains("column 14"));
    }

    #[test]
    fn test_path_error_converts_to_crate_error() {
        let err: Error = PathError::PropertyNotFound("x".to_string()).into();
        assert!(matches!(err, Error::Path(_)));
    }
}
