//! Unified database dialect enum
//!
//! This module provides a single source of truth for dialect identification so
//! that placeholder rendering and capability checks do not get re-declared by
//! every consumer of the binding layer.

use std::borrow::Cow;

/// SQL dialect for database-specific behavior
///
/// Each dialect has different placeholder syntax and different support for
/// retrieving generated keys from batched inserts.
///
/// # Examples
///
/// ```
/// use sqlbind_types::Dialect;
///
/// let dialect = Dialect::PostgreSQL;
/// assert!(dialect.uses_numbered_placeholders());
///
/// let h2 = Dialect::H2;
/// assert!(!h2.uses_numbered_placeholders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// H2 - uses `?` positional placeholders
    ///
    /// The embedded default target, also a stand-in for other JDBC-style
    /// engines with `?` placeholders.
    #[default]
    H2,

    /// PostgreSQL - uses `$1, $2, ...` numbered placeholders
    PostgreSQL,

    /// MySQL - uses `?` positional placeholders
    ///
    /// Compatible with: mysql, mariadb
    MySQL,

    /// Microsoft SQL Server - uses `?` positional placeholders
    Mssql,

    /// Snowflake - uses `?` positional placeholders
    ///
    /// Cannot return generated keys from batched statements.
    Snowflake,
}

impl Dialect {
    /// Returns `true` if this dialect uses numbered placeholders (`$1, $2, ...`)
    ///
    /// Currently only PostgreSQL uses numbered placeholders. The others use
    /// positional `?` placeholders.
    #[inline]
    #[must_use]
    pub const fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Dialect::PostgreSQL)
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - H2: `"h2"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    /// - SQL Server: `"mssql"`, `"sqlserver"`
    /// - Snowflake: `"snowflake"`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlbind_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("h2"), Some(Dialect::H2));
    /// assert_eq!(Dialect::parse("postgres"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("sqlserver"), Some(Dialect::Mssql));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("h2") {
            Some(Dialect::H2)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else if s.eq_ignore_ascii_case("mssql") || s.eq_ignore_ascii_case("sqlserver") {
            Some(Dialect::Mssql)
        } else if s.eq_ignore_ascii_case("snowflake") {
            Some(Dialect::Snowflake)
        } else {
            None
        }
    }

    /// Render the placeholder for a 1-based parameter position
    ///
    /// PostgreSQL renders `$N` and allocates; every other dialect returns the
    /// borrowed `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlbind_types::Dialect;
    ///
    /// assert_eq!(Dialect::PostgreSQL.render_placeholder(2), "$2");
    /// assert_eq!(Dialect::MySQL.render_placeholder(2), "?");
    /// ```
    #[must_use]
    pub fn render_placeholder(&self, position: usize) -> Cow<'static, str> {
        if self.uses_numbered_placeholders() {
            Cow::Owned(format!("${}", position))
        } else {
            Cow::Borrowed("?")
        }
    }

    /// Whether batched statements can report generated keys on this dialect
    ///
    /// Snowflake is the only supported engine that refuses the combination of
    /// batching and key retrieval.
    #[inline]
    #[must_use]
    pub const fn batch_generated_keys(&self) -> KeySupport {
        match self {
            Dialect::Snowflake => KeySupport::Unsupported,
            _ => KeySupport::Supported,
        }
    }

    /// Convenience predicate over [`Dialect::batch_generated_keys`]
    #[inline]
    #[must_use]
    pub const fn supports_batch_generated_keys(&self) -> bool {
        matches!(self.batch_generated_keys(), KeySupport::Supported)
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::H2 => "h2",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
            Dialect::Mssql => "mssql",
            Dialect::Snowflake => "snowflake",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

impl std::error::Error for DialectParseError {}

/// Whether a statement can hand back database-generated keys
///
/// Callers negotiate this up front so they can re-plan (for example, fall back
/// to row-at-a-time inserts) instead of failing mid-batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KeySupport {
    /// Generated keys can be fetched after execution
    Supported,
    /// The driver or dialect cannot return generated keys for this shape
    Unsupported,
}
