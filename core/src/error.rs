use sqlbind_types::{LogicalType, UnknownTypeError, UnsupportedNativeCodeError};
use thiserror::Error;

use crate::slot::ParamAddress;

#[derive(Debug, Error)]
pub enum BindError {
    /// Top-level parameter payload is not the expected JSON shape
    #[error("Malformed parameter list: {0}")]
    MalformedParameterList(String),

    /// Object parameter carries no "type" tag and no metadata fallback applies
    #[error("Missing \"type\" tag for {address}")]
    MissingTypeTag { address: ParamAddress },

    /// Name-addressed binding was requested but the parameter has no "name" tag
    #[error("Missing \"name\" tag for parameter {position}")]
    MissingNameTag { position: usize },

    /// Declared type spelling is not in the catalog
    #[error("Unknown SQL type \"{spelling}\"")]
    UnknownType { spelling: String },

    /// Driver-reported type code has no catalog entry
    #[error("Unsupported native SQL type code {code}")]
    UnsupportedNativeType { code: i32 },

    /// Value cannot be coerced to the resolved type
    #[error("Cannot bind {address} as {expected}: {detail}")]
    TypeMismatch {
        expected: LogicalType,
        address: ParamAddress,
        detail: String,
    },

    /// Text did not parse under any accepted temporal format
    #[error("Cannot parse \"{text}\" as {expected} for {address}")]
    DateParse {
        expected: LogicalType,
        address: ParamAddress,
        text: String,
    },

    /// Parameter is neither a bare primitive nor a parameter object
    #[error("Parameter {position} has an unsupported shape")]
    UnsupportedParameterShape { position: usize },

    /// Batch row length does not match the statement's parameter count
    #[error("Parameter row has {actual} values but the statement expects {expected}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    /// Registry holds no setter claiming the resolved type
    #[error("No registered setter claims type {ty}")]
    NoSetterForType { ty: LogicalType },

    /// Column metadata lookup failed
    #[error("Unknown column \"{column}\" in table \"{table}\"")]
    UnknownColumn { table: String, column: String },

    /// Error surfaced by the statement handle
    #[error("Statement error: {0}")]
    Statement(String),
}

impl From<UnknownTypeError> for BindError {
    fn from(err: UnknownTypeError) -> Self {
        BindError::UnknownType {
            spelling: err.spelling,
        }
    }
}

impl From<UnsupportedNativeCodeError> for BindError {
    fn from(err: UnsupportedNativeCodeError) -> Self {
        BindError::UnsupportedNativeType { code: err.code }
    }
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindError>;
