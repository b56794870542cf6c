//! Typed field values and conversions.
//!
//! Raw fields are text; every typed interpretation lives here. Conversions
//! are fallible and always carry the field name, so accessor errors read as
//! "invalid value for field `count`" rather than a bare parse error.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::error::{RecordError, Result};

/// The rendered result of a dynamic field read.
///
/// Distinguishes an accessor's typed result from the raw-text fallback:
/// a declared `count: u32` accessor renders `Integer(162)`, while the same
/// field read through the fallback renders `Text("162")`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Widened to `i128` so every supported integer width fits losslessly.
    Integer(i128),
    Float(f64),
    Bool(bool),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Uuid(u) => write!(f, "{}", u),
            FieldValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

macro_rules! field_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value.into())
            }
        }
    )*};
}

field_value_from! {
    String => Text,
    &str => Text,
    i64 => Integer,
    u64 => Integer,
    i32 => Integer,
    u32 => Integer,
    f64 => Float,
    bool => Bool,
    Uuid => Uuid,
    DateTime<Utc> => Timestamp,
}

/// Fallible conversion from one raw field value.
///
/// The core performs no coercion of its own; this trait is where accessors
/// get their typing from.
pub trait FromField: Sized {
    fn from_field(name: &str, raw: &str) -> Result<Self>;
}

impl FromField for String {
    fn from_field(_name: &str, raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

macro_rules! from_field_via_parse {
    ($($ty:ty => $expected:literal),* $(,)?) => {$(
        impl FromField for $ty {
            fn from_field(name: &str, raw: &str) -> Result<Self> {
                raw.trim().parse::<$ty>().map_err(|e| RecordError::InvalidField {
                    name: name.to_string(),
                    expected: $expected,
                    reason: e.to_string(),
                })
            }
        }
    )*};
}

from_field_via_parse! {
    bool => "bool",
    i32 => "i32",
    u32 => "u32",
    i64 => "i64",
    u64 => "u64",
    f64 => "f64",
}

impl FromField for Uuid {
    fn from_field(name: &str, raw: &str) -> Result<Self> {
        Uuid::parse_str(raw.trim()).map_err(|e| RecordError::InvalidField {
            name: name.to_string(),
            expected: "UUID",
            reason: e.to_string(),
        })
    }
}

/// Millisecond unix timestamps, the convention backup manifests use.
impl FromField for DateTime<Utc> {
    fn from_field(name: &str, raw: &str) -> Result<Self> {
        let millis: i64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
            RecordError::InvalidField {
                name: name.to_string(),
                expected: "millisecond timestamp",
                reason: e.to_string(),
            }
        })?;
        DateTime::from_timestamp_millis(millis).ok_or_else(|| RecordError::InvalidField {
            name: name.to_string(),
            expected: "millisecond timestamp",
            reason: format!("{} is out of range", millis),
        })
    }
}
