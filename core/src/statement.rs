//! Native values and the prepared-statement abstraction
//!
//! [`NativeValue`] is the post-coercion form handed to the driver. Exactly
//! one driver call happens per parameter slot: [`Statement::bind`] for a
//! value or [`Statement::bind_null`] for a typed NULL.

use core::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use sqlbind_types::{KeySupport, LogicalType};

use crate::error::Result;
use crate::slot::ParamAddress;

/// A fully coerced parameter value in its native representation
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    /// 8-bit signed integer
    Tinyint(i8),
    /// 16-bit signed integer
    Smallint(i16),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Bigint(i64),
    /// Single-precision float
    Real(f32),
    /// Double-precision float
    Double(f64),
    /// Fixed-point decimal, scale preserved
    Decimal(Decimal),
    /// Boolean
    Boolean(bool),
    /// Character data
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time without zone
    Timestamp(NaiveDateTime),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Text elements of a SQL ARRAY
    Array(Vec<String>),
}

impl NativeValue {
    /// The catalog type this value binds as
    #[must_use]
    pub const fn logical_type(&self) -> LogicalType {
        match self {
            NativeValue::Tinyint(_) => LogicalType::TinyInt,
            NativeValue::Smallint(_) => LogicalType::SmallInt,
            NativeValue::Integer(_) => LogicalType::Integer,
            NativeValue::Bigint(_) => LogicalType::BigInt,
            NativeValue::Real(_) => LogicalType::Real,
            NativeValue::Double(_) => LogicalType::Double,
            NativeValue::Decimal(_) => LogicalType::Decimal,
            NativeValue::Boolean(_) => LogicalType::Boolean,
            NativeValue::Text(_) => LogicalType::Text,
            NativeValue::Date(_) => LogicalType::Date,
            NativeValue::Time(_) => LogicalType::Time,
            NativeValue::Timestamp(_) => LogicalType::Timestamp,
            NativeValue::Bytes(_) => LogicalType::Blob,
            NativeValue::Array(_) => LogicalType::Array,
        }
    }
}

impl fmt::Display for NativeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeValue::Tinyint(v) => write!(f, "{}", v),
            NativeValue::Smallint(v) => write!(f, "{}", v),
            NativeValue::Integer(v) => write!(f, "{}", v),
            NativeValue::Bigint(v) => write!(f, "{}", v),
            NativeValue::Real(v) => write!(f, "{}", v),
            NativeValue::Double(v) => write!(f, "{}", v),
            NativeValue::Decimal(v) => write!(f, "{}", v),
            NativeValue::Boolean(v) => write!(f, "{}", v),
            NativeValue::Text(v) => write!(f, "'{}'", v),
            NativeValue::Date(v) => write!(f, "'{}'", v),
            NativeValue::Time(v) => write!(f, "'{}'", v),
            NativeValue::Timestamp(v) => write!(f, "'{}'", v),
            NativeValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            NativeValue::Array(v) => write!(f, "<array of {}>", v.len()),
        }
    }
}

// --- Integer Types ---

impl From<i8> for NativeValue {
    fn from(value: i8) -> Self {
        NativeValue::Tinyint(value)
    }
}

impl From<i16> for NativeValue {
    fn from(value: i16) -> Self {
        NativeValue::Smallint(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Integer(value)
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        NativeValue::Bigint(value)
    }
}

// --- Floating-Point and Decimal Types ---

impl From<f32> for NativeValue {
    fn from(value: f32) -> Self {
        NativeValue::Real(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Double(value)
    }
}

impl From<Decimal> for NativeValue {
    fn from(value: Decimal) -> Self {
        NativeValue::Decimal(value)
    }
}

// --- Boolean and Text Types ---

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Boolean(value)
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::Text(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::Text(value.to_owned())
    }
}

// --- Temporal Types ---

impl From<NaiveDate> for NativeValue {
    fn from(value: NaiveDate) -> Self {
        NativeValue::Date(value)
    }
}

impl From<NaiveTime> for NativeValue {
    fn from(value: NaiveTime) -> Self {
        NativeValue::Time(value)
    }
}

impl From<NaiveDateTime> for NativeValue {
    fn from(value: NaiveDateTime) -> Self {
        NativeValue::Timestamp(value)
    }
}

// --- Binary and Collection Types ---

impl From<Vec<u8>> for NativeValue {
    fn from(value: Vec<u8>) -> Self {
        NativeValue::Bytes(value)
    }
}

impl From<Vec<String>> for NativeValue {
    fn from(value: Vec<String>) -> Self {
        NativeValue::Array(value)
    }
}

/// A prepared statement accepting native parameter bindings
///
/// Driver adapters implement this; the binding layer drives it as a trait
/// object so driver crates never appear here. Addresses are 1-based
/// positions or placeholder names, see [`ParamAddress`].
pub trait Statement {
    /// Bind one native value at the given address
    fn bind(&mut self, address: &ParamAddress, value: NativeValue) -> Result<()>;

    /// Bind a typed SQL NULL at the given address
    ///
    /// `native_code` is the driver-level type code of the NULL, see
    /// [`sqlbind_types::native`].
    fn bind_null(&mut self, address: &ParamAddress, native_code: i32) -> Result<()>;

    /// Seal the currently bound row into the pending batch
    fn append_batch(&mut self) -> Result<()>;

    /// Number of parameter placeholders in the statement
    fn parameter_count(&self) -> usize;

    /// Driver-reported native type code for a 1-based position, if known
    fn parameter_native_code(&self, position: usize) -> Option<i32>;

    /// Whether this statement can report database-generated keys
    fn generated_keys(&self) -> KeySupport {
        KeySupport::Supported
    }
}
