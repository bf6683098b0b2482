//! Column metadata collaborators
//!
//! Batch inserts against engines without per-parameter metadata take their
//! types from the target table's columns. The schema layer owns that
//! knowledge and exposes it through [`ColumnTypeSource`]; this module only
//! snapshots it into per-position descriptors.

use sqlbind_types::LogicalType;

use crate::error::{BindError, Result};

/// External lookup from table and column names to declared types
pub trait ColumnTypeSource {
    /// The declared type of `column` in `table`, if the column exists
    fn column_type(&self, table: &str, column: &str) -> Option<LogicalType>;
}

/// A column name paired with its declared type
///
/// A batch row's position N takes its implicit type from descriptor N, in
/// insert-column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTypeDescriptor {
    /// Column name as it appears in the insert column list
    pub column: String,
    /// Declared type from the table definition
    pub ty: LogicalType,
}

impl ColumnTypeDescriptor {
    pub fn new(column: impl Into<String>, ty: LogicalType) -> Self {
        Self {
            column: column.into(),
            ty,
        }
    }

    /// Resolve descriptors for `columns` of `table`, preserving order
    ///
    /// Fails on the first column the source does not know.
    pub fn resolve_all(
        source: &dyn ColumnTypeSource,
        table: &str,
        columns: &[&str],
    ) -> Result<Vec<ColumnTypeDescriptor>> {
        columns
            .iter()
            .map(|column| {
                source
                    .column_type(table, column)
                    .map(|ty| ColumnTypeDescriptor::new(*column, ty))
                    .ok_or_else(|| BindError::UnknownColumn {
                        table: table.to_owned(),
                        column: (*column).to_owned(),
                    })
            })
            .collect()
    }
}
