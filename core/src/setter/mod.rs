//! Type setters and their registry
//!
//! A setter owns the coercion rules for one slice of the type catalog. The
//! registry maps a resolved [`LogicalType`] to the setter claiming it; the
//! binder never coerces on its own.

mod collection;
mod numeric;
mod scalar;
mod temporal;

pub use collection::{ArraySetter, BlobSetter};
pub use numeric::{BigIntSetter, DecimalSetter, DoubleSetter, IntSetter, RealSetter};
pub use scalar::{BoolSetter, TextSetter};
pub use temporal::{DateSetter, TimeSetter, TimestampSetter};

pub(crate) use numeric::{integral_i64, parse_decimal_literal};

use core::fmt;

use serde_json::Value;
use smallvec::{SmallVec, smallvec};
use sqlbind_types::LogicalType;

use crate::error::{BindError, Result};
use crate::slot::ParamAddress;
use crate::statement::Statement;

/// Coerces JSON payloads into native bindings for the types it claims
///
/// Implementations issue exactly one call on the statement per invocation,
/// [`Statement::bind`] on success. A payload the claimed type cannot absorb
/// is a [`BindError::TypeMismatch`] (temporal text that fails every format
/// is a [`BindError::DateParse`]); the statement is not touched in that
/// case.
pub trait TypeSetter: Send + Sync {
    /// Whether this setter handles the given catalog type
    fn claims(&self, ty: LogicalType) -> bool;

    /// Coerce `value` for `ty` and bind it at `address`
    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()>;
}

/// Registry resolving catalog types to their setters
///
/// Resolution scans in registration order and picks the first claiming
/// setter. [`SetterRegistry::new`] installs the twelve built-ins, which
/// together cover the whole catalog.
pub struct SetterRegistry {
    setters: SmallVec<[Box<dyn TypeSetter>; 12]>,
}

impl SetterRegistry {
    /// Registry with the built-in setters
    #[must_use]
    pub fn new() -> Self {
        Self {
            setters: smallvec![
                Box::new(IntSetter) as Box<dyn TypeSetter>,
                Box::new(BigIntSetter) as Box<dyn TypeSetter>,
                Box::new(RealSetter) as Box<dyn TypeSetter>,
                Box::new(DoubleSetter) as Box<dyn TypeSetter>,
                Box::new(DecimalSetter) as Box<dyn TypeSetter>,
                Box::new(BoolSetter) as Box<dyn TypeSetter>,
                Box::new(TextSetter) as Box<dyn TypeSetter>,
                Box::new(DateSetter) as Box<dyn TypeSetter>,
                Box::new(TimeSetter) as Box<dyn TypeSetter>,
                Box::new(TimestampSetter) as Box<dyn TypeSetter>,
                Box::new(BlobSetter) as Box<dyn TypeSetter>,
                Box::new(ArraySetter) as Box<dyn TypeSetter>,
            ],
        }
    }

    /// Registry with a caller-supplied setter list
    pub fn with_setters(setters: impl IntoIterator<Item = Box<dyn TypeSetter>>) -> Self {
        Self {
            setters: setters.into_iter().collect(),
        }
    }

    /// The setter claiming `ty`
    ///
    /// Scans in registration order; the first claimant wins, so a
    /// caller-supplied setter ahead of a built-in shadows it.
    pub fn resolve(&self, ty: LogicalType) -> Result<&dyn TypeSetter> {
        self.setters
            .iter()
            .find(|setter| setter.claims(ty))
            .map(Box::as_ref)
            .ok_or(BindError::NoSetterForType { ty })
    }

    /// Confirm every catalog type resolves to a setter
    ///
    /// Fails with [`BindError::NoSetterForType`] naming the first
    /// unclaimed type.
    pub fn verify_exhaustive(&self) -> Result<()> {
        for ty in LogicalType::ALL {
            self.resolve(ty)?;
        }
        Ok(())
    }

    /// Number of registered setters
    #[must_use]
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }
}

impl Default for SetterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SetterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetterRegistry")
            .field("setters", &self.setters.len())
            .finish()
    }
}

/// Shorthand for the coercion failure variant
pub(crate) fn mismatch(
    expected: LogicalType,
    address: &ParamAddress,
    detail: impl Into<String>,
) -> BindError {
    BindError::TypeMismatch {
        expected,
        address: address.clone(),
        detail: detail.into(),
    }
}
