//! Numeric setters
//!
//! Integer widths, floats and fixed-point decimals. String payloads are
//! accepted wherever they parse as the target's literal form.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::{Number, Value};
use sqlbind_types::LogicalType;

use crate::error::Result;
use crate::setter::{TypeSetter, mismatch};
use crate::slot::{ParamAddress, json_kind};
use crate::statement::{NativeValue, Statement};

// Largest f64 whose whole-number neighborhood is still exact (2^53)
const MAX_SAFE_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Extract an integral i64 from a JSON number
///
/// Accepts exact integers and whole-valued floats inside the 2^53 mantissa
/// range. `None` for fractional values and magnitudes i64 cannot hold.
pub(crate) fn integral_i64(number: &Number) -> Option<i64> {
    if let Some(v) = number.as_i64() {
        return Some(v);
    }
    let v = number.as_f64()?;
    if v.fract() == 0.0 && v.abs() <= MAX_SAFE_FLOAT_INTEGER {
        Some(v as i64)
    } else {
        None
    }
}

/// Parse a decimal literal, falling back to scientific notation
pub(crate) fn parse_decimal_literal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}

/// Setter for the sub-64-bit integer widths
///
/// Claims `TINYINT`, `SMALLINT` and `INTEGER`; the resolved type picks the
/// width and its range check.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntSetter;

impl TypeSetter for IntSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(
            ty,
            LogicalType::TinyInt | LogicalType::SmallInt | LogicalType::Integer
        )
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_integer(ty, address, value)?)
    }
}

fn coerce_integer(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    let wide = match value {
        Value::Number(n) => integral_i64(n)
            .ok_or_else(|| mismatch(ty, address, format!("{} is not an integral value", n)))?,
        Value::String(s) => i64::from_str(s)
            .map_err(|_| mismatch(ty, address, format!("\"{}\" is not an integer literal", s)))?,
        other => {
            return Err(mismatch(
                ty,
                address,
                format!("expected a number or numeric string, got {}", json_kind(other)),
            ));
        }
    };

    let out_of_range = || mismatch(ty, address, format!("{} is out of range", wide));
    match ty {
        LogicalType::TinyInt => i8::try_from(wide)
            .map(NativeValue::Tinyint)
            .map_err(|_| out_of_range()),
        LogicalType::SmallInt => i16::try_from(wide)
            .map(NativeValue::Smallint)
            .map_err(|_| out_of_range()),
        // claims() admits only the three widths
        _ => i32::try_from(wide)
            .map(NativeValue::Integer)
            .map_err(|_| out_of_range()),
    }
}

/// Setter for `BIGINT`
///
/// Magnitudes beyond i64 widen to a decimal instead of truncating.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigIntSetter;

impl TypeSetter for BigIntSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::BigInt)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_bigint(ty, address, value)?)
    }
}

fn coerce_bigint(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(NativeValue::Bigint(v))
            } else if let Some(v) = n.as_u64() {
                Ok(NativeValue::Decimal(Decimal::from(v)))
            } else if let Some(v) = n.as_f64().filter(|v| v.fract() == 0.0) {
                // The default JSON parse backs literals past u64 with f64;
                // parsing the rendered digits keeps whatever precision the
                // Number representation still carries
                parse_decimal_literal(&n.to_string())
                    .or_else(|| Decimal::from_f64(v))
                    .map(NativeValue::Decimal)
                    .ok_or_else(|| {
                        mismatch(ty, address, format!("{} exceeds the supported range", v))
                    })
            } else {
                Err(mismatch(ty, address, format!("{} is not an integral value", n)))
            }
        }
        Value::String(s) => match i64::from_str(s) {
            Ok(v) => Ok(NativeValue::Bigint(v)),
            // Arbitrary-precision literals ride the decimal lane
            Err(_) => Decimal::from_str_exact(s).map(NativeValue::Decimal).map_err(|_| {
                mismatch(
                    ty,
                    address,
                    format!("\"{}\" is not an integer or decimal literal", s),
                )
            }),
        },
        other => Err(mismatch(
            ty,
            address,
            format!("expected a number or numeric string, got {}", json_kind(other)),
        )),
    }
}

/// Setter for `REAL`
#[derive(Debug, Default, Clone, Copy)]
pub struct RealSetter;

impl TypeSetter for RealSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Real)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        let native = match value {
            Value::Number(n) => n
                .as_f64()
                .map(|v| NativeValue::Real(v as f32))
                .ok_or_else(|| mismatch(ty, address, format!("{} has no float form", n)))?,
            Value::String(s) => f32::from_str(s)
                .map(NativeValue::Real)
                .map_err(|_| mismatch(ty, address, format!("\"{}\" is not a float literal", s)))?,
            other => {
                return Err(mismatch(
                    ty,
                    address,
                    format!("expected a number or numeric string, got {}", json_kind(other)),
                ));
            }
        };
        stmt.bind(address, native)
    }
}

/// Setter for `DOUBLE`
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleSetter;

impl TypeSetter for DoubleSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Double)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        let native = match value {
            Value::Number(n) => n
                .as_f64()
                .map(NativeValue::Double)
                .ok_or_else(|| mismatch(ty, address, format!("{} has no float form", n)))?,
            Value::String(s) => f64::from_str(s)
                .map(NativeValue::Double)
                .map_err(|_| mismatch(ty, address, format!("\"{}\" is not a float literal", s)))?,
            other => {
                return Err(mismatch(
                    ty,
                    address,
                    format!("expected a number or numeric string, got {}", json_kind(other)),
                ));
            }
        };
        stmt.bind(address, native)
    }
}

/// Setter for `DECIMAL`
///
/// String literals keep their written scale; `"1.10"` binds with scale 2.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalSetter;

impl TypeSetter for DecimalSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Decimal)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_decimal(ty, address, value)?)
    }
}

fn coerce_decimal(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(NativeValue::Decimal(Decimal::from(v)))
            } else if let Some(v) = n.as_u64() {
                Ok(NativeValue::Decimal(Decimal::from(v)))
            } else {
                // Parse the serialized form so the written digits survive
                parse_decimal_literal(&n.to_string())
                    .map(NativeValue::Decimal)
                    .ok_or_else(|| {
                        mismatch(ty, address, format!("{} exceeds the supported range", n))
                    })
            }
        }
        Value::String(s) => parse_decimal_literal(s)
            .map(NativeValue::Decimal)
            .ok_or_else(|| mismatch(ty, address, format!("\"{}\" is not a decimal literal", s))),
        other => Err(mismatch(
            ty,
            address,
            format!("expected a number or numeric string, got {}", json_kind(other)),
        )),
    }
}
