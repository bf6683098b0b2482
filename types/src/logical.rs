//! Logical SQL type domain
//!
//! A closed catalog of the SQL types the binding layer understands. Each
//! logical type owns its accepted DDL spellings and its driver-level type
//! code, so classification and implicit typing stay in one place.

/// Driver-level SQL type codes (ODBC/JDBC numbering)
///
/// These are the codes statement handles report through parameter metadata
/// and the codes used when binding typed NULLs.
pub mod native {
    pub const TINYINT: i32 = -6;
    pub const SMALLINT: i32 = 5;
    pub const INTEGER: i32 = 4;
    pub const BIGINT: i32 = -5;
    pub const REAL: i32 = 7;
    pub const DOUBLE: i32 = 8;
    pub const DECIMAL: i32 = 3;
    pub const BOOLEAN: i32 = 16;
    pub const VARCHAR: i32 = 12;
    pub const DATE: i32 = 91;
    pub const TIME: i32 = 92;
    pub const TIMESTAMP: i32 = 93;
    pub const ARRAY: i32 = 2003;
    pub const BLOB: i32 = 2004;
}

/// Logical SQL type resolved from a declared spelling or a native code
///
/// # Examples
///
/// ```
/// use sqlbind_types::LogicalType;
///
/// assert_eq!(LogicalType::classify("NUMERIC"), Ok(LogicalType::Decimal));
/// assert_eq!(LogicalType::Decimal.native_code(), 3);
/// assert_eq!(LogicalType::from_native_code(93), Ok(LogicalType::Timestamp));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LogicalType {
    /// `TINYINT` - 8-bit signed integer
    TinyInt,
    /// `SMALLINT` - 16-bit signed integer
    SmallInt,
    /// `INTEGER` / `INT` - 32-bit signed integer
    Integer,
    /// `BIGINT` - 64-bit signed integer, widened to decimal on overflow
    BigInt,
    /// `REAL` / `FLOAT` - single-precision float
    Real,
    /// `DOUBLE` / `DOUBLE PRECISION` - double-precision float
    Double,
    /// `DECIMAL` / `NUMERIC` - fixed-point decimal, scale preserved
    Decimal,
    /// `BOOLEAN` / `BOOL`
    Boolean,
    /// `VARCHAR` and the rest of the character family
    Text,
    /// `DATE` - calendar date without time of day
    Date,
    /// `TIME` - time of day without date
    Time,
    /// `TIMESTAMP` / `DATETIME` - date and time without zone
    Timestamp,
    /// `BLOB` / `BINARY` / `VARBINARY` - raw bytes
    Blob,
    /// `ARRAY` - list of text elements
    Array,
}

impl LogicalType {
    /// Every member of the catalog, in declaration order
    pub const ALL: [LogicalType; 14] = [
        LogicalType::TinyInt,
        LogicalType::SmallInt,
        LogicalType::Integer,
        LogicalType::BigInt,
        LogicalType::Real,
        LogicalType::Double,
        LogicalType::Decimal,
        LogicalType::Boolean,
        LogicalType::Text,
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::Timestamp,
        LogicalType::Blob,
        LogicalType::Array,
    ];

    /// Resolve a declared type spelling into the catalog
    ///
    /// Spellings are the uppercase DDL names listed by [`LogicalType::spellings`]
    /// and are matched exactly. Anything else is an [`UnknownTypeError`].
    pub fn classify(spelling: &str) -> Result<Self, UnknownTypeError> {
        for ty in Self::ALL {
            if ty.spellings().iter().any(|s| *s == spelling) {
                return Ok(ty);
            }
        }
        Err(UnknownTypeError {
            spelling: spelling.to_owned(),
        })
    }

    /// The canonical uppercase spelling
    #[must_use]
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            LogicalType::TinyInt => "TINYINT",
            LogicalType::SmallInt => "SMALLINT",
            LogicalType::Integer => "INTEGER",
            LogicalType::BigInt => "BIGINT",
            LogicalType::Real => "REAL",
            LogicalType::Double => "DOUBLE",
            LogicalType::Decimal => "DECIMAL",
            LogicalType::Boolean => "BOOLEAN",
            LogicalType::Text => "VARCHAR",
            LogicalType::Date => "DATE",
            LogicalType::Time => "TIME",
            LogicalType::Timestamp => "TIMESTAMP",
            LogicalType::Blob => "BLOB",
            LogicalType::Array => "ARRAY",
        }
    }

    /// All accepted spellings for this type, canonical first
    #[must_use]
    pub const fn spellings(&self) -> &'static [&'static str] {
        match self {
            LogicalType::TinyInt => &["TINYINT"],
            LogicalType::SmallInt => &["SMALLINT"],
            LogicalType::Integer => &["INTEGER", "INT"],
            LogicalType::BigInt => &["BIGINT"],
            LogicalType::Real => &["REAL", "FLOAT"],
            LogicalType::Double => &["DOUBLE", "DOUBLE PRECISION"],
            LogicalType::Decimal => &["DECIMAL", "NUMERIC"],
            LogicalType::Boolean => &["BOOLEAN", "BOOL"],
            LogicalType::Text => &[
                "VARCHAR",
                "NVARCHAR",
                "TEXT",
                "CHAR",
                "CHARACTER VARYING",
                "CLOB",
            ],
            LogicalType::Date => &["DATE"],
            LogicalType::Time => &["TIME"],
            LogicalType::Timestamp => &["TIMESTAMP", "DATETIME"],
            LogicalType::Blob => &["BLOB", "BINARY", "VARBINARY"],
            LogicalType::Array => &["ARRAY"],
        }
    }

    /// The driver-level type code for this logical type
    #[inline]
    #[must_use]
    pub const fn native_code(&self) -> i32 {
        match self {
            LogicalType::TinyInt => native::TINYINT,
            LogicalType::SmallInt => native::SMALLINT,
            LogicalType::Integer => native::INTEGER,
            LogicalType::BigInt => native::BIGINT,
            LogicalType::Real => native::REAL,
            LogicalType::Double => native::DOUBLE,
            LogicalType::Decimal => native::DECIMAL,
            LogicalType::Boolean => native::BOOLEAN,
            LogicalType::Text => native::VARCHAR,
            LogicalType::Date => native::DATE,
            LogicalType::Time => native::TIME,
            LogicalType::Timestamp => native::TIMESTAMP,
            LogicalType::Blob => native::BLOB,
            LogicalType::Array => native::ARRAY,
        }
    }

    /// Map a driver-reported type code back into the catalog
    ///
    /// Inverse of [`LogicalType::native_code`]. Codes outside the catalog are
    /// an [`UnsupportedNativeCodeError`].
    pub const fn from_native_code(code: i32) -> Result<Self, UnsupportedNativeCodeError> {
        match code {
            native::TINYINT => Ok(LogicalType::TinyInt),
            native::SMALLINT => Ok(LogicalType::SmallInt),
            native::INTEGER => Ok(LogicalType::Integer),
            native::BIGINT => Ok(LogicalType::BigInt),
            native::REAL => Ok(LogicalType::Real),
            native::DOUBLE => Ok(LogicalType::Double),
            native::DECIMAL => Ok(LogicalType::Decimal),
            native::BOOLEAN => Ok(LogicalType::Boolean),
            native::VARCHAR => Ok(LogicalType::Text),
            native::DATE => Ok(LogicalType::Date),
            native::TIME => Ok(LogicalType::Time),
            native::TIMESTAMP => Ok(LogicalType::Timestamp),
            native::BLOB => Ok(LogicalType::Blob),
            native::ARRAY => Ok(LogicalType::Array),
            _ => Err(UnsupportedNativeCodeError { code }),
        }
    }

    /// Exact-width integer family (`TINYINT` through `BIGINT`)
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            LogicalType::TinyInt
                | LogicalType::SmallInt
                | LogicalType::Integer
                | LogicalType::BigInt
        )
    }

    /// Integer, floating-point or decimal
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(
                self,
                LogicalType::Real | LogicalType::Double | LogicalType::Decimal
            )
    }

    /// Date, time or timestamp
    #[inline]
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(
            self,
            LogicalType::Date | LogicalType::Time | LogicalType::Timestamp
        )
    }
}

impl core::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl core::str::FromStr for LogicalType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalType::classify(s)
    }
}

/// Error returned when a declared type spelling is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeError {
    /// The spelling as it appeared in the parameter object
    pub spelling: String,
}

impl core::fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown SQL type \"{}\"", self.spelling)
    }
}

impl std::error::Error for UnknownTypeError {}

/// Error returned when a driver-reported type code has no catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedNativeCodeError {
    /// The code as reported by the driver
    pub code: i32,
}

impl core::fmt::Display for UnsupportedNativeCodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unsupported native SQL type code {}", self.code)
    }
}

impl std::error::Error for UnsupportedNativeCodeError {}
