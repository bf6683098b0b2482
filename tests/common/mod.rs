#![allow(dead_code)]

use sqlbind::error::BindError;
use sqlbind::{KeySupport, NativeValue, ParamAddress, Statement};

/// One recorded driver call, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Bind {
        address: ParamAddress,
        value: NativeValue,
    },
    BindNull {
        address: ParamAddress,
        native_code: i32,
    },
    Append,
}

/// Statement double that records every driver call.
#[derive(Debug)]
pub struct MockStatement {
    pub calls: Vec<Call>,
    parameter_count: usize,
    parameter_codes: Vec<Option<i32>>,
    keys: KeySupport,
    fail_append: bool,
}

impl MockStatement {
    /// A statement with `parameter_count` slots and no type metadata.
    pub fn with_count(parameter_count: usize) -> Self {
        MockStatement {
            calls: Vec::new(),
            parameter_count,
            parameter_codes: Vec::new(),
            keys: KeySupport::Supported,
            fail_append: false,
        }
    }

    /// A statement reporting one native type code per slot.
    pub fn with_codes(codes: &[i32]) -> Self {
        let mut stmt = MockStatement::with_count(codes.len());
        stmt.parameter_codes = codes.iter().copied().map(Some).collect();
        stmt
    }

    pub fn without_generated_keys(mut self) -> Self {
        self.keys = KeySupport::Unsupported;
        self
    }

    /// Makes every `append_batch` call fail with a statement error.
    pub fn rejecting_appends(mut self) -> Self {
        self.fail_append = true;
        self
    }

    /// Number of completed `append_batch` calls.
    pub fn appended_rows(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Append)).count()
    }
}

impl Statement for MockStatement {
    fn bind(&mut self, address: &ParamAddress, value: NativeValue) -> sqlbind::Result<()> {
        self.calls.push(Call::Bind {
            address: address.clone(),
            value,
        });
        Ok(())
    }

    fn bind_null(&mut self, address: &ParamAddress, native_code: i32) -> sqlbind::Result<()> {
        self.calls.push(Call::BindNull {
            address: address.clone(),
            native_code,
        });
        Ok(())
    }

    fn append_batch(&mut self) -> sqlbind::Result<()> {
        if self.fail_append {
            return Err(BindError::Statement("append rejected".into()));
        }
        self.calls.push(Call::Append);
        Ok(())
    }

    fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    fn parameter_native_code(&self, position: usize) -> Option<i32> {
        self.parameter_codes.get(position - 1).copied().flatten()
    }

    fn generated_keys(&self) -> KeySupport {
        self.keys
    }
}

/// Expected bind at a 1-based position.
pub fn bound(position: usize, value: NativeValue) -> Call {
    Call::Bind {
        address: ParamAddress::Position(position),
        value,
    }
}

/// Expected bind at a named parameter.
pub fn bound_named(name: &str, value: NativeValue) -> Call {
    Call::Bind {
        address: ParamAddress::Name(name.into()),
        value,
    }
}

/// Expected NULL bind at a 1-based position.
pub fn null_at(position: usize, native_code: i32) -> Call {
    Call::BindNull {
        address: ParamAddress::Position(position),
        native_code,
    }
}

/// Expected NULL bind at a named parameter.
pub fn null_named(name: &str, native_code: i32) -> Call {
    Call::BindNull {
        address: ParamAddress::Name(name.into()),
        native_code,
    }
}
