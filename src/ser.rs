//! Serialization into [`PsValue`] trees and PowerShell data text.
//!
//! Two serializers live here:
//!
//! - [`ValueSerializer`]: a serde `Serializer` that builds a [`PsValue`]
//!   from any `T: Serialize` (used by [`crate::to_value`])
//! - [`Serializer`]: renders a [`PsValue`] as `@{ }` / `@( )` text that the
//!   tokenizer and parser read back unchanged
//!
//! The notation has no escapes, no negative numbers and only identifier keys,
//! so the writer refuses data it cannot spell instead of altering it.
//!
//! ```rust
//! use serde_psdata::{to_string, to_string_pretty};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { name: String, tags: Vec<&'static str> }
//!
//! let data = Data { name: "x".to_string(), tags: vec!["a", "b"] };
//! assert_eq!(to_string(&data).unwrap(), r#"@{name = "x" tags = @("a" "b")}"#);
//!
//! let pretty = to_string_pretty(&data).unwrap();
//! assert_eq!(pretty, "@{\n    name = \"x\"\n    tags = @(\n        \"a\"\n        \"b\"\n    )\n}");
//! ```

use crate::token::keyword;
use crate::{Error, PsMap, PsValue, Result, WriteOptions};
use serde::{ser, Serialize};

/// Text writer for [`PsValue`] trees.
pub struct Serializer {
    output: String,
    options: WriteOptions,
}

impl Serializer {
    #[must_use]
    pub fn new(options: WriteOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the text form of `value`.
    ///
    /// # Errors
    ///
    /// [`Error::UnrepresentableString`], [`Error::UnrepresentableNumber`] or
    /// [`Error::InvalidKey`] when part of the tree has no spelling.
    pub fn write_value(&mut self, value: &PsValue) -> Result<()> {
        self.write(value, 0)
    }

    fn write(&mut self, value: &PsValue, level: usize) -> Result<()> {
        match value {
            PsValue::Null => self.output.push_str("$null"),
            PsValue::Bool(true) => self.output.push_str("$true"),
            PsValue::Bool(false) => self.output.push_str("$false"),
            PsValue::Number(n) => self.write_number(*n)?,
            PsValue::String(s) => self.write_string(s)?,
            PsValue::Array(items) => self.write_array(items, level)?,
            PsValue::Object(map) => self.write_object(map, level)?,
        }
        Ok(())
    }

    fn write_number(&mut self, n: f64) -> Result<()> {
        if !n.is_finite() || n < 0.0 {
            return Err(Error::UnrepresentableNumber(n));
        }
        // -0.0 compares equal to 0.0 but would print a sign.
        let n = if n == 0.0 { 0.0 } else { n };
        self.output.push_str(&n.to_string());
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        if s.contains('"') {
            return Err(Error::UnrepresentableString(s.to_string()));
        }
        self.output.push('"');
        self.output.push_str(s);
        self.output.push('"');
        Ok(())
    }

    fn write_indent(&mut self, level: usize) {
        let width = level * self.options.indent;
        self.output.push_str(&" ".repeat(width));
    }

    /// Writes the separator that precedes entry `index` of a body.
    fn write_entry_break(&mut self, index: usize, level: usize) {
        if self.options.pretty {
            self.output.push('\n');
            self.write_indent(level + 1);
        } else if index > 0 {
            self.output.push(' ');
        }
    }

    fn write_close(&mut self, close: char, level: usize) {
        if self.options.pretty {
            self.output.push('\n');
            self.write_indent(level);
        }
        self.output.push(close);
    }

    fn write_array(&mut self, items: &[PsValue], level: usize) -> Result<()> {
        if items.is_empty() {
            self.output.push_str("@()");
            return Ok(());
        }
        self.output.push_str("@(");
        for (i, item) in items.iter().enumerate() {
            self.write_entry_break(i, level);
            self.write(item, level + 1)?;
        }
        self.write_close(')', level);
        Ok(())
    }

    fn write_object(&mut self, map: &PsMap, level: usize) -> Result<()> {
        if map.is_empty() {
            self.output.push_str("@{}");
            return Ok(());
        }
        self.output.push_str("@{");
        for (i, (key, value)) in map.iter().enumerate() {
            if !is_valid_key(key) {
                return Err(Error::InvalidKey(key.clone()));
            }
            self.write_entry_break(i, level);
            self.output.push_str(key);
            self.output.push_str(" = ");
            self.write(value, level + 1)?;
        }
        self.write_close('}', level);
        Ok(())
    }
}

/// A key must lex back as a single identifier token.
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    let starts_word = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
    starts_word
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && keyword(key).is_none()
}

pub(crate) fn write_text(value: &PsValue, options: &WriteOptions) -> Result<String> {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_value(value)?;
    Ok(serializer.into_inner())
}

/// Builds a [`PsValue`] from any `T: Serialize`.
///
/// Enums are externally tagged: unit variants become strings, other variants
/// become a single-key object named after the variant.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<PsValue>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: PsMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

fn tagged(variant: Option<&'static str>, value: PsValue) -> PsValue {
    match variant {
        Some(name) => {
            let mut map = PsMap::with_capacity(1);
            map.insert(name.to_string(), value);
            PsValue::Object(map)
        }
        None => value,
    }
}

impl ser::Serializer for ValueSerializer {
    type Ok = PsValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<PsValue> {
        Ok(PsValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_i16(self, v: i16) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_i32(self, v: i32) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_i64(self, v: i64) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_u8(self, v: u8) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_u16(self, v: u16) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_u32(self, v: u32) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_u64(self, v: u64) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f32(self, v: f32) -> Result<PsValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<PsValue> {
        Ok(PsValue::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<PsValue> {
        Ok(PsValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<PsValue> {
        Ok(PsValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<PsValue> {
        Ok(PsValue::Array(
            v.iter().map(|&b| PsValue::Number(b as f64)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<PsValue> {
        Ok(PsValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<PsValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<PsValue> {
        Ok(PsValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<PsValue> {
        Ok(PsValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<PsValue> {
        Ok(PsValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<PsValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<PsValue>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(Some(variant), to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> PsValue {
        tagged(self.variant, PsValue::Array(self.vec))
    }
}

impl SerializeMap {
    fn new(variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: PsMap::new(),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> PsValue {
        tagged(self.variant, PsValue::Object(self.map))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            PsValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = PsValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<PsValue> {
        Ok(self.finish())
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<PsValue> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn compact(value: &PsValue) -> Result<String> {
        write_text(value, &WriteOptions::default())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&PsValue::Null).unwrap(), "$null");
        assert_eq!(compact(&PsValue::Bool(false)).unwrap(), "$false");
        assert_eq!(compact(&PsValue::Number(42.0)).unwrap(), "42");
        assert_eq!(compact(&PsValue::Number(0.25)).unwrap(), "0.25");
        assert_eq!(compact(&PsValue::Number(-0.0)).unwrap(), "0");
        assert_eq!(compact(&PsValue::from("a b")).unwrap(), "\"a b\"");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(compact(&PsValue::Array(vec![])).unwrap(), "@()");
        assert_eq!(compact(&PsValue::Object(PsMap::new())).unwrap(), "@{}");
        let pretty = write_text(&PsValue::Array(vec![]), &WriteOptions::pretty()).unwrap();
        assert_eq!(pretty, "@()");
    }

    #[test]
    fn test_unrepresentable_data_is_rejected() {
        assert_eq!(
            compact(&PsValue::from("say \"hi\"")),
            Err(Error::UnrepresentableString("say \"hi\"".to_string()))
        );
        assert_eq!(
            compact(&PsValue::Number(-1.0)),
            Err(Error::UnrepresentableNumber(-1.0))
        );
        assert!(compact(&PsValue::Number(f64::NAN)).is_err());
        assert!(compact(&PsValue::Number(f64::INFINITY)).is_err());

        for key in ["", "1st", "has space", "dash-key", "$true", "$null"] {
            let mut map = PsMap::new();
            map.insert(key.to_string(), PsValue::Null);
            assert_eq!(
                compact(&PsValue::Object(map)),
                Err(Error::InvalidKey(key.to_string())),
                "key {:?}",
                key
            );
        }
    }

    #[test]
    fn test_written_text_parses_back() {
        let source = "@{\n    name = \"hello world\"\n    tags = @(\n        \"a\"\n        \"b\"\n    )\n    count = 3\n    active = $true\n    meta = $null\n    $private = @{}\n}";
        let value = parse(source).unwrap();
        let pretty = write_text(&value, &WriteOptions::pretty()).unwrap();
        assert_eq!(pretty, source);
        assert_eq!(parse(&compact(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_value_serializer_enums() {
        #[derive(Serialize)]
        enum Shape {
            Unit,
            Circle(f64),
            Pair(u8, u8),
            Rect { w: u32, h: u32 },
        }

        assert_eq!(to_value(&Shape::Unit).unwrap(), PsValue::from("Unit"));

        let circle = to_value(&Shape::Circle(1.5)).unwrap();
        assert_eq!(circle.get("Circle"), Some(&PsValue::Number(1.5)));

        let pair = to_value(&Shape::Pair(1, 2)).unwrap();
        assert_eq!(
            pair.get("Pair"),
            Some(&PsValue::Array(vec![PsValue::from(1), PsValue::from(2)]))
        );

        let rect = to_value(&Shape::Rect { w: 3, h: 4 }).unwrap();
        assert_eq!(rect.get("Rect").and_then(|r| r.get("h")), Some(&PsValue::from(4)));
    }

    #[test]
    fn test_non_string_map_keys_rejected() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(1, "one");
        assert!(to_value(&map).is_err());
    }
}
