//! Log entries and their field values.
//!
//! An [`Entry`] is built by whatever produces log events, handed to the
//! [`Handler`](crate::Handler) by reference, and dropped afterwards. Field
//! values keep their natural string form through [`Value`]'s `Display`.

use std::collections::HashMap;
use std::fmt;

use crate::level::Level;

/// Message used for the final entry reported when the host gives up.
pub const UNCAUGHT_MESSAGE: &str = "Uncaught error";

/// A single logging event: severity, message and named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entry {
    pub level: Level,
    pub message: String,
    /// Unordered field mapping; names are unique by construction.
    pub fields: HashMap<String, Value>,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add (or replace) a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attach an error under the `error` field.
    #[must_use]
    pub fn with_error(self, err: &dyn std::error::Error) -> Self {
        self.field("error", Value::display(err))
    }

    /// The last entry a host emits before terminating on an unrecoverable error.
    pub fn uncaught(err: &dyn std::error::Error) -> Self {
        Self::new(Level::Fatal, UNCAUGHT_MESSAGE).with_error(err)
    }
}

/// A field value with a natural string representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// Structured value; top-level strings print unquoted, everything else
    /// as compact JSON.
    Json(serde_json::Value),
}

impl Value {
    /// Capture any `Display` value by its rendered text.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Json(serde_json::Value::String(s)) => f.write_str(s),
            Self::Json(other) => write!(f, "{other}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Self::Int(i64::from(n))
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Self::Uint(u64::from(n))
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        u64::try_from(n).map_or_else(|_| Self::display(n), Self::Uint)
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::display(n), Self::Int)
    }
}
