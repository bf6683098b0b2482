//! Batch binding over parameter rows
//!
//! Rows bind strictly in order. Row N+1 is never touched before row N's
//! append succeeds, and the first failure aborts the whole call; rows
//! already appended stay in the caller's batch buffer.

use serde_json::Value;
use tracing::trace;

use crate::binder::{BindMode, ParameterBinder};
use crate::error::{BindError, Result};
use crate::metadata::ColumnTypeDescriptor;
use crate::setter::SetterRegistry;
use crate::slot::json_kind;
use crate::statement::Statement;

/// Binds row after row of parameters, appending each to the statement batch
///
/// Row length is validated before any slot binds: against the column
/// descriptor list when one is supplied (the insert-by-column case),
/// otherwise against the statement's own parameter count.
#[derive(Debug, Clone, Copy)]
pub struct BatchBinder<'r> {
    binder: ParameterBinder<'r>,
}

impl<'r> BatchBinder<'r> {
    pub fn new(registry: &'r SetterRegistry) -> Self {
        Self {
            binder: ParameterBinder::new(registry),
        }
    }

    /// Bind every row in `rows` and append each to the batch
    ///
    /// `columns` switches on column-driven typing: each position takes its
    /// type from the descriptor at that position unless the element carries
    /// its own tag.
    pub fn bind_batch(
        &self,
        rows: &Value,
        columns: Option<&[ColumnTypeDescriptor]>,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        let rows = rows.as_array().ok_or_else(|| {
            BindError::MalformedParameterList(format!(
                "expected a JSON array of parameter rows, got {}",
                json_kind(rows)
            ))
        })?;

        trace!(rows = rows.len(), column_driven = columns.is_some(), "binding batch");
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_array().ok_or_else(|| {
                BindError::MalformedParameterList(format!(
                    "row {} is not a JSON array, got {}",
                    row_index + 1,
                    json_kind(row)
                ))
            })?;

            let expected = match columns {
                Some(columns) => columns.len(),
                None => stmt.parameter_count(),
            };
            if row.len() != expected {
                return Err(BindError::ParameterCountMismatch {
                    expected,
                    actual: row.len(),
                });
            }

            for (index, element) in row.iter().enumerate() {
                let implicit = columns.and_then(|c| c.get(index)).map(|d| d.ty);
                self.binder
                    .bind_element(BindMode::Indexed, index + 1, element, implicit, stmt)?;
            }

            stmt.append_batch()?;
            trace!(row = row_index + 1, "row appended to batch");
        }
        Ok(())
    }
}
