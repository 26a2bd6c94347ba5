//! Stored value model
//!
//! Defines the payloads the cache accepts and how they map to raw bytes.

use std::fmt;

use crate::error::{Error, Result};

// == Value ==
/// A payload accepted by [`Cache::store`](crate::cache::Cache::store).
///
/// The key-value store only holds bytes, so every variant is encoded with
/// [`Value::to_bytes`] before it is written.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text, stored as-is
    Text(String),
    /// Opaque binary payload, stored unchanged
    Bytes(Vec<u8>),
    /// Integer, stored as decimal text
    Int(i64),
    /// Floating-point number, stored as decimal text
    Float(f64),
}

impl Value {
    // == Encoding ==
    /// Returns the raw bytes written to the store for this value.
    ///
    /// Floats keep their fractional part (`3.0`, not `3`) so they never read
    /// back as an integer by accident.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.as_bytes().to_vec(),
            Value::Bytes(bytes) => bytes.clone(),
            Value::Int(n) => n.to_string().into_bytes(),
            Value::Float(x) => format!("{:?}", x).into_bytes(),
        }
    }
}

/// Renders the value as plain text, as it appears in a call trace.
///
/// Text and numbers read exactly as they are stored; bytes are decoded as
/// UTF-8 with invalid sequences replaced.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

// == Conversions ==
impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(i64::from(n))
    }
}

/// `u64` values above `i64::MAX` cannot be counted or parsed back by
/// `get_int`, so they convert fallibly.
impl TryFrom<u64> for Value {
    type Error = Error;

    fn try_from(n: u64) -> Result<Self> {
        i64::try_from(n)
            .map(Value::Int)
            .map_err(|_| Error::Conversion(format!("{} does not fit in an i64", n)))
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(f64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}
