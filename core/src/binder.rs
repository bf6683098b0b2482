//! Parameter binding orchestration
//!
//! [`ParameterBinder`] walks a JSON parameter list, resolves each slot's
//! logical type and hands the payload to the claiming setter. Binding is
//! fail-fast: the first bad slot aborts the call and the statement is left
//! exactly as the preceding slots set it.

use serde_json::{Number, Value};
use sqlbind_types::{LogicalType, native};
use tracing::trace;

use crate::error::{BindError, Result};
use crate::setter::{SetterRegistry, parse_decimal_literal};
use crate::slot::{ParamAddress, ParamSlot, json_kind};
use crate::statement::{NativeValue, Statement};

/// How parameter elements address the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindMode {
    Indexed,
    Named,
}

/// Binds one parameter list onto a statement
///
/// Type resolution per slot, first hit wins: the wrapper's own "type" tag,
/// the column-derived type in batch mode, then (index-addressed slots
/// only) the statement's parameter metadata. Index-addressed slots that
/// resolve nothing fall back to dispatch by JSON shape; name-addressed
/// slots fail instead.
#[derive(Debug, Clone, Copy)]
pub struct ParameterBinder<'r> {
    registry: &'r SetterRegistry,
}

impl<'r> ParameterBinder<'r> {
    pub fn new(registry: &'r SetterRegistry) -> Self {
        Self { registry }
    }

    /// Bind an index-addressed parameter list
    ///
    /// Elements are bare JSON primitives or `{type, value}` wrappers, bound
    /// at their 1-based list position.
    pub fn bind_indexed(&self, params: &Value, stmt: &mut dyn Statement) -> Result<()> {
        self.bind_list(BindMode::Indexed, params, stmt)
    }

    /// Bind a name-addressed parameter list
    ///
    /// Every element must be a `{name, type, value}` wrapper; bare
    /// primitives are rejected.
    pub fn bind_named(&self, params: &Value, stmt: &mut dyn Statement) -> Result<()> {
        self.bind_list(BindMode::Named, params, stmt)
    }

    fn bind_list(&self, mode: BindMode, params: &Value, stmt: &mut dyn Statement) -> Result<()> {
        let elements = params.as_array().ok_or_else(|| {
            BindError::MalformedParameterList(format!(
                "expected a JSON array of parameters, got {}",
                json_kind(params)
            ))
        })?;

        trace!(count = elements.len(), ?mode, "binding parameter list");
        for (index, element) in elements.iter().enumerate() {
            self.bind_element(mode, index + 1, element, None, stmt)?;
        }
        Ok(())
    }

    /// Bind one list element at a 1-based position
    ///
    /// `implicit` is the column-derived type for this position in batch
    /// mode; it loses to an explicit tag and wins over statement metadata.
    /// A column-derived type also claims bare values, which is how
    /// column-driven insert rows carry plain primitives and arrays without
    /// wrapper objects.
    pub(crate) fn bind_element(
        &self,
        mode: BindMode,
        position: usize,
        element: &Value,
        implicit: Option<LogicalType>,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        match element {
            Value::Object(object) => {
                let slot = ParamSlot::from_object(position, mode == BindMode::Named, object)?;
                self.bind_slot(position, &slot, implicit, stmt)
            }
            Value::Array(_) if implicit.is_none() => {
                Err(BindError::UnsupportedParameterShape { position })
            }
            _ if mode == BindMode::Named => Err(BindError::MissingTypeTag {
                address: ParamAddress::Position(position),
            }),
            value => match implicit {
                Some(ty) => {
                    self.bind_typed_value(ty, &ParamAddress::Position(position), value, stmt)
                }
                None => self.bind_untyped(position, value, stmt),
            },
        }
    }

    fn bind_slot(
        &self,
        position: usize,
        slot: &ParamSlot<'_>,
        implicit: Option<LogicalType>,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        // Statement metadata is probed by list position, so only
        // position-addressed slots may use it; a named slot's list order
        // says nothing about its placeholder.
        let resolved = match slot.declared.or(implicit) {
            Some(ty) => Some(ty),
            None => match slot.address {
                ParamAddress::Position(_) => infer_from_statement(stmt, position)?,
                ParamAddress::Name(_) => None,
            },
        };

        let Some(ty) = resolved else {
            // Nothing declared and nothing inferable. Positional slots fall
            // back to shape dispatch; named slots carry no such license.
            return match slot.address {
                ParamAddress::Position(_) => self.bind_untyped(position, slot.value, stmt),
                ParamAddress::Name(_) => Err(BindError::MissingTypeTag {
                    address: slot.address.clone(),
                }),
            };
        };

        self.bind_typed_value(ty, &slot.address, slot.value, stmt)
    }

    fn bind_typed_value(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        if value.is_null() {
            trace!(%ty, address = %address, "binding typed NULL");
            return stmt.bind_null(address, ty.native_code());
        }

        let setter = self.registry.resolve(ty)?;
        trace!(%ty, address = %address, "dispatching to setter");
        setter.bind(ty, address, value, stmt)
    }

    /// Bind a slot with no resolved type by its JSON shape
    fn bind_untyped(
        &self,
        position: usize,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        let address = ParamAddress::Position(position);
        match value {
            // The one NULL code every supported driver accepts
            Value::Null => stmt.bind_null(&address, native::VARCHAR),
            Value::Bool(b) => stmt.bind(&address, NativeValue::Boolean(*b)),
            Value::String(s) => stmt.bind(&address, NativeValue::Text(s.clone())),
            Value::Number(n) => {
                let native = coerce_untyped_number(n);
                trace!(address = %address, value = %native, "untyped number coerced");
                stmt.bind(&address, native)
            }
            Value::Array(_) | Value::Object(_) => {
                Err(BindError::UnsupportedParameterShape { position })
            }
        }
    }
}

fn infer_from_statement(stmt: &dyn Statement, position: usize) -> Result<Option<LogicalType>> {
    match stmt.parameter_native_code(position) {
        Some(code) => {
            let ty = LogicalType::from_native_code(code)?;
            trace!(position, code, %ty, "inferred type from statement metadata");
            Ok(Some(ty))
        }
        None => Ok(None),
    }
}

/// Ordered coercion cascade for untyped numbers
///
/// The target column's width is unknown here, so attempts run over the
/// numeric literal in a fixed order: INTEGER, SMALLINT, BIGINT, DECIMAL,
/// then the re-rendered literal as text. SMALLINT is shadowed by INTEGER
/// but stays in the attempt list as written policy.
pub(crate) fn coerce_untyped_number(number: &Number) -> NativeValue {
    let literal = number.to_string();
    if let Ok(v) = literal.parse::<i32>() {
        return NativeValue::Integer(v);
    }
    if let Ok(v) = literal.parse::<i16>() {
        return NativeValue::Smallint(v);
    }
    if let Ok(v) = literal.parse::<i64>() {
        return NativeValue::Bigint(v);
    }
    if let Some(v) = parse_decimal_literal(&literal) {
        return NativeValue::Decimal(v);
    }
    NativeValue::Text(literal)
}
