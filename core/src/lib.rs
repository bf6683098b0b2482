//! Binding engine for sqlbind
//!
//! Decodes JSON parameter lists, resolves each slot's logical type and
//! drives a [`Statement`] through the setter claiming that type. Driver
//! integration stays behind the [`Statement`] trait; this crate never
//! opens a connection.

pub mod batch;
pub mod binder;
pub mod error;
pub mod metadata;
pub mod setter;
pub mod slot;
pub mod statement;

// Re-export the dependency types embedded in `NativeValue`
pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use rust_decimal::Decimal;

// Re-export key types and traits
pub use batch::BatchBinder;
pub use binder::ParameterBinder;
pub use error::{BindError, Result};
pub use metadata::{ColumnTypeDescriptor, ColumnTypeSource};
pub use setter::{SetterRegistry, TypeSetter};
pub use slot::{ParamAddress, ParamSlot};
pub use statement::{NativeValue, Statement};
