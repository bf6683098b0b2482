//! Boolean and character setters

use serde_json::Value;
use sqlbind_types::LogicalType;

use crate::error::Result;
use crate::setter::{TypeSetter, integral_i64, mismatch};
use crate::slot::{ParamAddress, json_kind};
use crate::statement::{NativeValue, Statement};

/// Setter for `BOOLEAN`
///
/// Numbers convert only from 0 and 1; other magnitudes are ambiguous and
/// rejected. Strings convert from `"true"` / `"false"` (case-insensitive).
#[derive(Debug, Default, Clone, Copy)]
pub struct BoolSetter;

impl TypeSetter for BoolSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Boolean)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_boolean(ty, address, value)?)
    }
}

fn coerce_boolean(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    let flag = match value {
        Value::Bool(b) => *b,
        Value::Number(n) => match integral_i64(n) {
            Some(0) => false,
            Some(1) => true,
            _ => {
                return Err(mismatch(
                    ty,
                    address,
                    format!("{} is not a boolean value; only 0 and 1 convert", n),
                ));
            }
        },
        Value::String(s) => {
            if s.eq_ignore_ascii_case("true") {
                true
            } else if s.eq_ignore_ascii_case("false") {
                false
            } else {
                return Err(mismatch(
                    ty,
                    address,
                    format!("\"{}\" is not a boolean literal", s),
                ));
            }
        }
        other => {
            return Err(mismatch(
                ty,
                address,
                format!("expected a boolean, got {}", json_kind(other)),
            ));
        }
    };
    Ok(NativeValue::Boolean(flag))
}

/// Setter for the `VARCHAR` family
///
/// Only JSON strings bind as text; there is no implicit to-string for other
/// payloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSetter;

impl TypeSetter for TextSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Text)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        match value {
            Value::String(s) => stmt.bind(address, NativeValue::Text(s.clone())),
            other => Err(mismatch(
                ty,
                address,
                format!("expected a string, got {}", json_kind(other)),
            )),
        }
    }
}
