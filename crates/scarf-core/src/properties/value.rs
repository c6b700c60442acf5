//! Dynamic property values.

use std::fmt;

use crate::json;

/// A single property value. Closed over the shapes the encoder understands.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<PropertyValue>),
    /// Nested mapping. Keys are values so that non-text keys can be
    /// represented; the encoder drops every entry whose key is not `Text`.
    Map(Vec<(PropertyValue, PropertyValue)>),
    /// Raw byte sequence, encoded as an array of numbers.
    Bytes(Vec<u8>),
}

impl PropertyValue {
    /// Wrap raw bytes.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Coerce any displayable value to text.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Build a nested map from text-keyed pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (Self::Text(k.into()), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Textual form used when a value is stringified onto the wire.
///
/// Scalars print their canonical form; containers print their JSON encoding.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) if x.is_nan() => f.write_str("NaN"),
            Self::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Self::Float(x) => f.write_str(&json::format_float(*x)),
            Self::Text(s) => f.write_str(s),
            Self::List(_) | Self::Map(_) | Self::Bytes(_) => f.write_str(&json::to_json(self)),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for PropertyValue {
            fn from(v: $t) -> Self {
                Self::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for PropertyValue {
            fn from(v: $t) -> Self {
                Self::UInt(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Keeps the `f32`'s own shortest decimal form, so `0.1f32` stays `0.1`
/// instead of widening to `0.10000000149011612`.
impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        let shortest = format!("{v:?}").parse::<f64>().unwrap_or(f64::from(v));
        Self::Float(shortest)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for PropertyValue {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<char> for PropertyValue {
    fn from(v: char) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<super::Properties> for PropertyValue {
    fn from(p: super::Properties) -> Self {
        Self::Map(
            p.into_iter()
                .map(|(k, v)| (Self::Text(k), v))
                .collect(),
        )
    }
}
