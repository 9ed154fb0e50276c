//! Reading a module manifest and writing it back out.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_psdata::{from_str, parse, to_string_pretty};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Manifest {
    name: String,
    version: String,
    exports: Vec<String>,
    private: bool,
    license: Option<String>,
}

const SOURCE: &str = r#"@{
    name = "Tools"
    version = "1.4.0"
    exports = @("Get-Thing" "Set-Thing")
    private = $false
    license = $null
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let manifest: Manifest = from_str(SOURCE)?;
    println!("Parsed manifest:\n{:#?}\n", manifest);

    // The same text as JSON
    let value = parse(SOURCE)?;
    println!("JSON:\n{}\n", serde_json::to_string_pretty(&value)?);

    let text = to_string_pretty(&manifest)?;
    println!("Written back:\n{}\n", text);

    let manifest_back: Manifest = from_str(&text)?;
    assert_eq!(manifest, manifest_back);
    println!("Round-trip successful");

    Ok(())
}
