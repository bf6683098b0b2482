//! Shared type definitions for sqlbind
//!
//! This crate provides the vocabulary the binding layer is written against:
//!
//! - [`LogicalType`] - the closed catalog of SQL types, their declared
//!   spellings and their driver-level codes
//! - [`Dialect`] - database dialect enum with placeholder rendering and
//!   capability checks
//! - [`KeySupport`] - whether generated keys can be fetched for a statement
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization of the catalog

mod dialect;
mod logical;

pub use dialect::{Dialect, DialectParseError, KeySupport};
pub use logical::{LogicalType, UnknownTypeError, UnsupportedNativeCodeError, native};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Dialect, KeySupport, LogicalType};
}
