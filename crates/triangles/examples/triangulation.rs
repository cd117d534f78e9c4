//! Run a fixed list of candidate sides through construction and classification.
//!
//! Usage:
//!   cargo run -p triangles --example triangulation
//!
//! Includes malformed rows (wrong arity, non-numeric sides, non-sequences)
//! to show the rejection messages.

use serde_json::{json, Value};
use triangles::Triangle;

fn obtain_sides() -> Vec<Value> {
    let e = std::f64::consts::E;
    let pi = std::f64::consts::PI;
    vec![
        json!([1.0, 1.0, 1.0]),
        json!([1.0, 1.5, 1.5]),
        json!([1.0, 1.5, 2.0]),
        json!([1.5, 1.5, 1.0]),
        json!([1.5, 2.0, 1.0]),
        json!([1.0, 0.7, 0.5]),
        json!([e, pi, e]),
        json!([e, pi, e.sqrt() * e.sqrt()]),
        json!([e, pi, e * 1.5]),
        json!([1, 0.7, 0.5]),
        json!([1.0, 0.7, 0.5, 0.6]),
        json!([1.0, 0.7]),
        json!([1.0, 1.0, 2.0]),
        json!([1.0, 2.0, 1.0]),
        json!([0.0, 0.0, 0.0]),
        json!([1.0, 0.0, 0.5]),
        json!([-1.0, 0.0, 0.0]),
        json!([-1.0, 0.0, 0.5]),
        json!([-1.0, -1.5, -2.0]),
        json!([-1.0, null, -2.0]),
        json!([1.0, 2.0, "unicorn"]),
        Value::Null,
        json!(1.0),
        json!("unicorn"),
    ]
}

fn main() {
    for sides in obtain_sides() {
        match Triangle::from_value(&sides) {
            Ok(triangle) => println!("The triangle {triangle} is {}", triangle.triangle_type()),
            Err(err) => println!("{err}"),
        }
    }
}
