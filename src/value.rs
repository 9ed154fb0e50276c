//! Dynamic value representation for parsed data.
//!
//! [`PsValue`] is the tree the parser builds. It has the same shape as JSON's
//! data model: null, booleans, floating-point numbers, strings, arrays and
//! ordered objects.
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_psdata::{psdata, PsValue};
//!
//! let null = PsValue::Null;
//! let number = PsValue::from(42);
//! let text = PsValue::from("hello");
//!
//! let obj = psdata!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ## Converting to JSON
//!
//! `PsValue` implements `Serialize`, so any serde format can render it:
//!
//! ```rust
//! let value = serde_psdata::parse("@{ count = 3 tags = @(\"a\") }").unwrap();
//! let json = serde_json::to_string(&value).unwrap();
//! assert_eq!(json, r#"{"count":3,"tags":["a"]}"#);
//! ```

use crate::PsMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A parsed value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PsValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PsValue>),
    Object(PsMap),
}

/// Returns the number as an `i64` when it is whole and in range.
#[inline]
pub(crate) fn whole_i64(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

impl PsValue {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, PsValue::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, PsValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, PsValue::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, PsValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, PsValue::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, PsValue::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PsValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is a whole number that fits in `i64`, returns it.
    ///
    /// ```rust
    /// use serde_psdata::PsValue;
    ///
    /// assert_eq!(PsValue::Number(42.0).as_i64(), Some(42));
    /// assert_eq!(PsValue::Number(42.5).as_i64(), None);
    /// assert_eq!(PsValue::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().and_then(whole_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PsValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<PsValue>> {
        match self {
            PsValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&PsMap> {
        match self {
            PsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a key when the value is an object.
    ///
    /// ```rust
    /// let value = serde_psdata::parse("@{ a = $true }").unwrap();
    /// assert_eq!(value.get("a").and_then(|v| v.as_bool()), Some(true));
    /// assert!(value.get("b").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PsValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}

/// Renders compact notation text. Values that have no spelling in the
/// notation (see [`crate::to_string`]) fall back to their `Debug` form.
impl fmt::Display for PsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::ser::write_text(self, &crate::WriteOptions::default()) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

impl Serialize for PsValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PsValue::Null => serializer.serialize_unit(),
            PsValue::Bool(b) => serializer.serialize_bool(*b),
            PsValue::Number(n) => match whole_i64(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            PsValue::String(s) => serializer.serialize_str(s),
            PsValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            PsValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PsValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PsValueVisitor;

        impl<'de> Visitor<'de> for PsValueVisitor {
            type Value = PsValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON-compatible value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(PsValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(PsValue::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(PsValue::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(PsValue::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(PsValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(PsValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(PsValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(PsValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(PsValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = PsMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(PsValue::Object(values))
            }
        }

        deserializer.deserialize_any(PsValueVisitor)
    }
}

impl TryFrom<PsValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: PsValue) -> crate::Result<Self> {
        match value {
            PsValue::Number(n) => whole_i64(n).ok_or_else(|| {
                crate::Error::custom(format!("cannot convert number {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<PsValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: PsValue) -> crate::Result<Self> {
        match value {
            PsValue::Number(n) => Ok(n),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<PsValue> for bool {
    type Error = crate::Error;

    fn try_from(value: PsValue) -> crate::Result<Self> {
        match value {
            PsValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<PsValue> for String {
    type Error = crate::Error;

    fn try_from(value: PsValue) -> crate::Result<Self> {
        match value {
            PsValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for PsValue {
    fn from(value: bool) -> Self {
        PsValue::Bool(value)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PsValue {
                fn from(value: $ty) -> Self {
                    PsValue::Number(value as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<String> for PsValue {
    fn from(value: String) -> Self {
        PsValue::String(value)
    }
}

impl From<&str> for PsValue {
    fn from(value: &str) -> Self {
        PsValue::String(value.to_string())
    }
}

impl From<Vec<PsValue>> for PsValue {
    fn from(value: Vec<PsValue>) -> Self {
        PsValue::Array(value)
    }
}

impl From<PsMap> for PsValue {
    fn from(value: PsMap) -> Self {
        PsValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_i64() {
        assert_eq!(i64::try_from(PsValue::Number(42.0)).unwrap(), 42);
        assert!(i64::try_from(PsValue::Number(42.5)).is_err());
        assert!(i64::try_from(PsValue::Number(1e300)).is_err());
        assert!(i64::try_from(PsValue::from("42")).is_err());
    }

    #[test]
    fn test_tryfrom_scalars() {
        assert_eq!(f64::try_from(PsValue::Number(2.5)).unwrap(), 2.5);
        assert!(bool::try_from(PsValue::Bool(true)).unwrap());
        assert!(bool::try_from(PsValue::Number(1.0)).is_err());
        assert_eq!(String::try_from(PsValue::from("hi")).unwrap(), "hi");
        assert!(String::try_from(PsValue::Null).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(PsValue::from(true), PsValue::Bool(true));
        assert_eq!(PsValue::from(42i32), PsValue::Number(42.0));
        assert_eq!(PsValue::from(7u64), PsValue::Number(7.0));
        assert_eq!(PsValue::from(2.5f64), PsValue::Number(2.5));
        assert_eq!(PsValue::from("test"), PsValue::String("test".to_string()));
    }

    #[test]
    fn test_serialize_whole_numbers_as_integers() {
        let json = serde_json::to_string(&PsValue::Array(vec![
            PsValue::Number(3.0),
            PsValue::Number(0.5),
        ]))
        .unwrap();
        assert_eq!(json, "[3,0.5]");
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: PsValue = serde_json::from_str(r#"{"b":[1,null],"a":"x"}"#).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            obj.get("b"),
            Some(&PsValue::Array(vec![PsValue::Number(1.0), PsValue::Null]))
        );
    }

    #[test]
    fn test_display_is_compact_notation() {
        let mut map = PsMap::new();
        map.insert("a".to_string(), PsValue::Bool(true));
        assert_eq!(PsValue::Object(map).to_string(), "@{a = $true}");
        assert_eq!(PsValue::Null.to_string(), "$null");
    }
}
