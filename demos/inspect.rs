//! Structural diffing and path lookup.
//!
//! Run with: cargo run --example inspect

use json_recast::{diff_str, from_str, resolve_path};

fn main() {
    let before = r#"{"name": "devtools", "deps": ["serde", "indexmap"]}"#;
    let after = r#"{"name": "devtools", "deps": ["serde", "thiserror", "indexmap"]}"#;

    match diff_str(before, after).unwrap() {
        Some(changes) => println!("diff:\n{}\n", changes.to_value()),
        None => println!("documents are identical\n"),
    }

    let value = from_str(after).unwrap();
    match resolve_path(&value, "deps[1]") {
        Ok(found) => println!("deps[1] = {}", found),
        Err(err) => println!("lookup failed: {}", err),
    }
}
