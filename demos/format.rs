//! Canonical formatting with options.
//!
//! Run with: cargo run --example format

use json_recast::{format_str, FormatOptions};

fn main() {
    let input = r#"{"zeta": [3, 1], "alpha": {"b": true, "a": null}}"#;

    let pretty = format_str(input, &FormatOptions::new()).unwrap();
    println!("pretty:\n{}\n", pretty);

    let sorted = format_str(input, &FormatOptions::new().with_sort_keys(true)).unwrap();
    println!("sorted:\n{}\n", sorted);

    let minified = format_str(input, &FormatOptions::minified()).unwrap();
    println!("minified:\n{}", minified);
}
