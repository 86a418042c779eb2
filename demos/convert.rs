//! YAML, TypeScript, and CSV output from one document.
//!
//! Run with: cargo run --example convert

use json_recast::{from_str, infer_type, to_csv, to_yaml};

fn main() {
    let input = r#"[
        {"id": 1, "name": "Widget", "price": 9.99},
        {"id": 2, "name": "Gadget", "price": 14.5}
    ]"#;
    let value = from_str(input).unwrap();

    println!("yaml:{}\n", to_yaml(&value));
    println!("typescript:\n{}\n", infer_type(&value, "Products"));
    println!("csv:\n{}", to_csv(&value).unwrap());
}
