//! # serde_psdata
//!
//! Reads and writes the data-literal subset of PowerShell: scalars, `@{ }`
//! hashtables and `@( )` arrays. Text becomes a [`PsValue`] tree with JSON's
//! data model, which can be handed to any serde format or deserialized
//! straight into Rust types.
//!
//! ## The Notation
//!
//! ```text
//! @{
//!     name   = "hello world"
//!     tags   = @("a" "b")
//!     count  = 3
//!     active = $true
//!     meta   = $null
//! }
//! ```
//!
//! - Strings are double-quoted and taken verbatim (no escapes)
//! - Numbers are non-negative decimals (`42`, `2.5`, `7.`)
//! - `$true`, `$false` and `$null` are the only keywords
//! - Object keys are bare identifiers; a repeated key overwrites the earlier value
//! - Elements are separated by whitespace; `;` is accepted and ignored
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_psdata::{parse, PsValue};
//!
//! let value = parse("@{ name = \"hello world\" tags = @(\"a\" \"b\") count = 3 }").unwrap();
//! assert_eq!(value.get("count"), Some(&PsValue::Number(3.0)));
//!
//! let json = serde_json::to_string(&value).unwrap();
//! assert_eq!(json, r#"{"name":"hello world","tags":["a","b"],"count":3}"#);
//! ```
//!
//! ### Typed Deserialization
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Manifest { version: String, exports: Vec<String> }
//!
//! let manifest: Manifest = serde_psdata::from_str(
//!     "@{ version = \"1.0\" exports = @(\"Get-Thing\") }",
//! ).unwrap();
//! assert_eq!(manifest.exports, vec!["Get-Thing"]);
//! ```
//!
//! ### Writing
//!
//! ```rust
//! use serde_psdata::to_string;
//!
//! assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "@(1 2 3)");
//! ```
//!
//! ## Pipeline
//!
//! [`tokenize`] turns text into a flat [`Token`] sequence, and
//! [`parse_value`] turns that sequence into one [`PsValue`]. Both are pure,
//! single-threaded and fail fast: the first error aborts the call.
//! [`parse`] runs both steps.

#[macro_use]
pub mod macros;

pub mod de;
pub mod error;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use de::from_value;
pub use error::{Error, Result, SyntaxError};
pub use map::PsMap;
pub use options::{ParseOptions, WriteOptions, DEFAULT_MAX_DEPTH};
pub use parser::{parse_value, parse_value_with_options, Parser};
pub use ser::{Serializer, ValueSerializer};
pub use token::{Lexeme, Token, TokenKind};
pub use tokenizer::tokenize;
pub use value::PsValue;

/// Alias for [`PsValue`].
pub type Value = PsValue;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Tokenizes and parses text into a value tree.
///
/// ```rust
/// use serde_psdata::{parse, PsValue};
///
/// assert_eq!(parse("@()").unwrap(), PsValue::Array(vec![]));
/// assert!(parse("@{").is_err());
/// ```
///
/// # Errors
///
/// Any tokenizer or syntax error, with the line it occurred on.
pub fn parse(source: &str) -> Result<PsValue> {
    parse_with_options(source, ParseOptions::default())
}

/// Like [`parse`] with explicit [`ParseOptions`].
///
/// # Errors
///
/// Any tokenizer or syntax error, with the line it occurred on.
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<PsValue> {
    let tokens = tokenize(source)?;
    parse_value_with_options(&tokens, options)
}

/// Deserialize an instance of type `T` from notation text.
///
/// # Errors
///
/// Returns an error if the text does not parse or its shape does not match `T`.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(parse(s)?)
}

/// Deserialize an instance of type `T` from UTF-8 bytes of notation text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, do not parse, or do not
/// match `T`.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(s)
}

/// Deserialize an instance of type `T` from an I/O stream of notation text.
///
/// # Errors
///
/// Returns an error if reading fails, or as for [`from_str`].
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Convert any `T: Serialize` to a [`PsValue`].
///
/// # Errors
///
/// Returns an error for maps whose keys are not strings.
pub fn to_value<T>(value: &T) -> Result<PsValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to compact, single-line notation text.
///
/// # Errors
///
/// Returns an error if the data has no spelling in the notation: strings
/// containing `"`, negative or non-finite numbers, or keys that are not
/// identifiers.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WriteOptions::default())
}

/// Serialize any `T: Serialize` to multi-line, indented notation text.
///
/// # Errors
///
/// As for [`to_string`].
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WriteOptions::pretty())
}

/// Serialize any `T: Serialize` to notation text with custom options.
///
/// # Errors
///
/// As for [`to_string`].
pub fn to_string_with_options<T>(value: &T, options: WriteOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    ser::write_text(&to_value(value)?, &options)
}

/// Serialize any `T: Serialize` to a writer as compact notation text.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, WriteOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: WriteOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
