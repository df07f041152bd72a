//! Expression templates: dot product, integration, vector sums.
//!
//! Run with: cargo run -p lazyx --example expression_templates

use lazyx::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let array1 = [1.0f32, 1.0, 1.0];
    let array2 = [1.5f32, 1.0, 1.0];
    println!("{}", reduce_multiply_add(&array1, &array2));

    match integrate(X / (1.0 + X), 1.0, 5.0, 10) {
        Ok(sum) => println!("{sum}"),
        Err(err) => eprintln!("integration failed: {err}"),
    }

    let v1 = VectorValue::new(0.0f32, 1.0, 2.0);
    let v2 = VectorValue::new(2.0f32, 1.0, 0.0);
    let result: VectorValue = (v1 + v2 + v2 + v1).into();
    println!("{result}");
}
