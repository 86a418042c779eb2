//! Canonical JSON formatting.
//!
//! [`format`] renders a [`Value`] back to JSON text deterministically. It is
//! total: no well-formed value can make it fail, including empty containers,
//! deep nesting, large numbers, and strings full of control characters.
//!
//! ## Output rules
//!
//! - Pretty output puts every array element and object entry on its own line,
//!   indented [`FormatOptions::indent_size`] spaces per nesting level; the
//!   closing bracket lines up with the opening container's indentation
//! - Minified output contains no insignificant whitespace at all
//! - `sort_keys` re-orders object entries byte-wise at every depth and never
//!   touches array order; it composes with either output mode
//! - Numbers print their shortest decimal form that parses back equal;
//!   strings use standard JSON escaping
//!
//! ## Examples
//!
//! ```rust
//! use json_recast::{format, json, FormatOptions};
//!
//! let value = json!({"b": 2, "a": 1});
//!
//! let sorted = format(&value, &FormatOptions::new().with_sort_keys(true));
//! assert_eq!(sorted, "{\n  \"a\": 1,\n  \"b\": 2\n}");
//!
//! let minified = format(&value, &FormatOptions::minified());
//! assert_eq!(minified, r#"{"b":2,"a":1}"#);
//! ```

use crate::{FormatOptions, Value};

/// Renders a value to JSON text according to `options`.
///
/// This function is total over the `Value` domain; parse failures are the
/// caller's concern and happen before a `Value` exists.
#[must_use]
pub fn format(value: &Value, options: &FormatOptions) -> String {
    let mut formatter = Formatter::new(options);
    formatter.write_value(value, 0);
    formatter.into_inner()
}

struct Formatter<'a> {
    output: String,
    options: &'a FormatOptions,
}

impl<'a> Formatter<'a> {
    fn new(options: &'a FormatOptions) -> Self {
        Formatter {
            output: String::with_capacity(256),
            options,
        }
    }

    fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self, depth: usize) {
        if !self.options.minified {
            for _ in 0..depth * self.options.indent_size {
                self.output.push(' ');
            }
        }
    }

    fn write_newline(&mut self) {
        if !self.options.minified {
            self.output.push('\n');
        }
    }

    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => write_json_string(&mut self.output, s),
            Value::Array(items) => {
                if items.is_empty() {
                    self.output.push_str("[]");
                    return;
                }
                self.output.push('[');
                self.write_newline();
                for (i, item) in items.iter().enumerate() {
                    self.write_indent(depth + 1);
                    self.write_value(item, depth + 1);
                    if i + 1 < items.len() {
                        self.output.push(',');
                    }
                    self.write_newline();
                }
                self.write_indent(depth);
                self.output.push(']');
            }
            Value::Object(map) => {
                if map.is_empty() {
                    self.output.push_str("{}");
                    return;
                }
                let mut entries: Vec<(&String, &Value)> = map.iter().collect();
                if self.options.sort_keys {
                    entries.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
                }
                self.output.push('{');
                self.write_newline();
                for (i, (key, entry)) in entries.iter().enumerate() {
                    self.write_indent(depth + 1);
                    write_json_string(&mut self.output, key);
                    self.output.push(':');
                    if !self.options.minified {
                        self.output.push(' ');
                    }
                    self.write_value(entry, depth + 1);
                    if i + 1 < entries.len() {
                        self.output.push(',');
                    }
                    self.write_newline();
                }
                self.write_indent(depth);
                self.output.push('}');
            }
        }
    }
}

/// Appends `s` as a quoted JSON string literal with standard escaping.
///
/// Quote and backslash escape to `\"` and `\\`, the named control characters
/// to their short forms, and any other character below U+0020 to `\u00XX`.
pub(crate) fn write_json_string(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}
