//! Binary and array setters

use serde_json::Value;
use sqlbind_types::LogicalType;

use crate::error::Result;
use crate::setter::{TypeSetter, mismatch};
use crate::slot::{ParamAddress, json_kind};
use crate::statement::{NativeValue, Statement};

/// Setter for `BLOB`
///
/// The wire form is a JSON array of byte values, each an integer in 0..=255.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlobSetter;

impl TypeSetter for BlobSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Blob)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_blob(ty, address, value)?)
    }
}

fn coerce_blob(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(mismatch(
                ty,
                address,
                format!("expected an array of byte values, got {}", json_kind(other)),
            ));
        }
    };

    let mut bytes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let byte = item
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| {
                mismatch(
                    ty,
                    address,
                    format!("element {} is not a byte value in 0..=255", index + 1),
                )
            })?;
        bytes.push(byte);
    }
    Ok(NativeValue::Bytes(bytes))
}

/// Setter for `ARRAY`
///
/// Elements are bound as text; the wire form is a JSON array of strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArraySetter;

impl TypeSetter for ArraySetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Array)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_array(ty, address, value)?)
    }
}

fn coerce_array(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(mismatch(
                ty,
                address,
                format!("expected an array of strings, got {}", json_kind(other)),
            ));
        }
    };

    let mut elements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => elements.push(s.clone()),
            other => {
                return Err(mismatch(
                    ty,
                    address,
                    format!("element {} must be a string, got {}", index + 1, json_kind(other)),
                ));
            }
        }
    }
    Ok(NativeValue::Array(elements))
}
