//! # sqlbind
//!
//! Dialect-agnostic binding of JSON-described parameters onto prepared SQL
//! statements.
//!
//! Parameters arrive as a JSON array, each element either a bare primitive
//! (index-addressed statements only) or a `{"name", "type", "value"}`
//! wrapper. The binder resolves each slot's logical type from its tag,
//! from column metadata in batch mode, or from the statement's parameter
//! metadata, then dispatches to the setter claiming that type. Driver
//! integration happens through the [`Statement`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlbind::prelude::*;
//! use serde_json::json;
//!
//! struct Recorder(Vec<String>);
//!
//! impl Statement for Recorder {
//!     fn bind(&mut self, address: &ParamAddress, value: NativeValue) -> sqlbind::Result<()> {
//!         self.0.push(format!("{address} = {value}"));
//!         Ok(())
//!     }
//!
//!     fn bind_null(&mut self, address: &ParamAddress, _native_code: i32) -> sqlbind::Result<()> {
//!         self.0.push(format!("{address} = NULL"));
//!         Ok(())
//!     }
//!
//!     fn append_batch(&mut self) -> sqlbind::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn parameter_count(&self) -> usize {
//!         3
//!     }
//!
//!     fn parameter_native_code(&self, _position: usize) -> Option<i32> {
//!         None
//!     }
//! }
//!
//! # fn main() -> sqlbind::Result<()> {
//! let registry = SetterRegistry::new();
//! let binder = ParameterBinder::new(&registry);
//!
//! let mut stmt = Recorder(Vec::new());
//! binder.bind_indexed(
//!     &json!([1, "abc", {"type": "DATE", "value": "2018-05-22"}]),
//!     &mut stmt,
//! )?;
//!
//! assert_eq!(
//!     stmt.0,
//!     ["parameter 1 = 1", "parameter 2 = 'abc'", "parameter 3 = '2018-05-22'"]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialect Support
//!
//! | Dialect    | Placeholders | Batch generated keys |
//! |------------|--------------|----------------------|
//! | H2         | `?`          | ✅                   |
//! | PostgreSQL | `$1, $2, …`  | ✅                   |
//! | MySQL      | `?`          | ✅                   |
//! | MSSQL      | `?`          | ✅                   |
//! | Snowflake  | `?`          | ❌                   |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for binding operations
pub use sqlbind_core::error::Result;

/// Database dialect enum
pub use sqlbind_types::Dialect;

/// Error types
pub mod error {
    pub use sqlbind_core::error::BindError;
    pub use sqlbind_types::{DialectParseError, UnknownTypeError, UnsupportedNativeCodeError};
}

// =============================================================================
// Core module - the binding engine
// =============================================================================

/// Binding engine types re-exported from `sqlbind-core`.
pub mod core {
    // ==========================================================================
    // Binders - list and batch orchestration
    // ==========================================================================

    /// Binds one parameter list onto a statement
    pub use sqlbind_core::ParameterBinder;

    /// Binds rows of parameters, appending each to the statement batch
    pub use sqlbind_core::BatchBinder;

    // ==========================================================================
    // Setters - per-type coercion strategies
    // ==========================================================================

    /// Registry resolving catalog types to their setters
    pub use sqlbind_core::{SetterRegistry, TypeSetter};

    /// The built-in setter implementations
    pub use sqlbind_core::setter::{
        ArraySetter, BigIntSetter, BlobSetter, BoolSetter, DateSetter, DecimalSetter,
        DoubleSetter, IntSetter, RealSetter, TextSetter, TimeSetter, TimestampSetter,
    };

    // ==========================================================================
    // Statement surface
    // ==========================================================================

    /// The driver-facing statement abstraction and its native value enum
    pub use sqlbind_core::{NativeValue, Statement};

    /// Parameter addressing and the decoded wire form
    pub use sqlbind_core::{ParamAddress, ParamSlot};

    /// Column metadata collaborators for batch-insert typing
    pub use sqlbind_core::{ColumnTypeDescriptor, ColumnTypeSource};
}

// =============================================================================
// Type catalog
// =============================================================================

/// The logical type catalog and driver-level codes
pub use sqlbind_types::{KeySupport, LogicalType, native};

pub use sqlbind_core::{
    BatchBinder, ColumnTypeDescriptor, ColumnTypeSource, NativeValue, ParamAddress,
    ParamSlot, ParameterBinder, SetterRegistry, Statement, TypeSetter,
};

/// Dependency types embedded in [`NativeValue`]
pub use sqlbind_core::{Decimal, NaiveDate, NaiveDateTime, NaiveTime};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        BatchBinder, ColumnTypeDescriptor, ColumnTypeSource, Dialect, KeySupport, LogicalType,
        NativeValue, ParamAddress, ParamSlot, ParameterBinder, Result, SetterRegistry, Statement,
        TypeSetter,
    };
}
