//! Working with PsValue for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_psdata::{psdata, to_string_pretty, to_value, Error as PsError, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = psdata!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "debug": true
    });

    println!("Config:\n{}\n", to_string_pretty(&config)?);

    if let Value::Object(obj) = &config {
        if let Some(Value::String(host)) = obj.get("host") {
            println!("host: {}", host);
        }
        if let Some(port) = obj.get("port").and_then(Value::as_i64) {
            println!("port: {}", port);
        }
        if let Some(Value::Array(features)) = obj.get("features") {
            println!("features: {} items\n", features.len());
        }
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    println!("User:\n{}\n", to_string_pretty(&user_value)?);

    // Data the notation cannot spell is refused rather than altered.
    match to_string_pretty(&psdata!({ "offset": (-5) })) {
        Err(PsError::UnrepresentableNumber(n)) => println!("refused to write {}", n),
        other => println!("unexpected: {:?}", other),
    }

    Ok(())
}
