//! Primitive value kinds carried at the leaves of the IR (see [`crate::ir`]).

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of primitive kinds a schema leaf can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    String,
    Integer,
    Float,
    Date,
    DateTime,
}

/// A decoded leaf value. `Null` is the HL7 null marker (`""`), distinct from
/// `String(String::new())`, which is an ordinary empty string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Null,
}

impl Value {
    pub fn kind(&self) -> Option<PrimitiveKind> {
        match self {
            Value::String(_) => Some(PrimitiveKind::String),
            Value::Integer(_) => Some(PrimitiveKind::Integer),
            Value::Float(_) => Some(PrimitiveKind::Float),
            Value::Date(_) => Some(PrimitiveKind::Date),
            Value::DateTime(_) => Some(PrimitiveKind::DateTime),
            Value::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y%m%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y%m%d%H%M%S")),
            Value::Null => write!(f, "\"\""),
        }
    }
}
