mod common;

use common::*;
use serde_json::json;
use sqlbind::error::BindError;
use sqlbind::{NativeValue, ParamAddress, ParameterBinder, SetterRegistry, native};

// Test named wrappers bind by name in list order
#[test]
fn test_named_wrappers_bind_by_name() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(2);

    binder
        .bind_named(
            &json!([
                {"name": "id", "type": "BIGINT", "value": 1},
                {"name": "title", "type": "VARCHAR", "value": "first"},
            ]),
            &mut stmt,
        )
        .unwrap();

    assert_eq!(
        stmt.calls,
        vec![
            bound_named("id", NativeValue::Bigint(1)),
            bound_named("title", NativeValue::Text("first".into())),
        ]
    );
}

// Test a bare primitive is rejected in named mode
#[test]
fn test_bare_primitive_rejected_in_named_mode() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(1);

    let err = binder.bind_named(&json!([5]), &mut stmt).unwrap_err();

    assert!(matches!(
        err,
        BindError::MissingTypeTag {
            address: ParamAddress::Position(1)
        }
    ));
    assert!(stmt.calls.is_empty());
}

// Test a wrapper without a name tag is rejected in named mode
#[test]
fn test_missing_name_tag_is_rejected() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(1);

    let err = binder
        .bind_named(&json!([{"type": "INT", "value": 1}]), &mut stmt)
        .unwrap_err();

    assert!(matches!(err, BindError::MissingNameTag { position: 1 }));
}

// Test a named slot with no type and no metadata reports the missing tag by name
#[test]
fn test_named_slot_without_type_reports_missing_tag() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(1);

    let err = binder
        .bind_named(&json!([{"name": "id", "value": 1}]), &mut stmt)
        .unwrap_err();

    match err {
        BindError::MissingTypeTag { address } => {
            assert_eq!(address, ParamAddress::Name("id".into()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// Test a named slot never takes a type from positional statement metadata
#[test]
fn test_named_slot_ignores_statement_metadata() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_codes(&[native::BIGINT]);

    let err = binder
        .bind_named(&json!([{"name": "id", "value": 9}]), &mut stmt)
        .unwrap_err();

    assert!(matches!(
        err,
        BindError::MissingTypeTag {
            address: ParamAddress::Name(_)
        }
    ));
    assert!(stmt.calls.is_empty());
}

// Test named typed nulls carry the declared native code
#[test]
fn test_named_null_binds_with_declared_code() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(1);

    binder
        .bind_named(
            &json!([{"name": "due", "type": "DATE", "value": null}]),
            &mut stmt,
        )
        .unwrap();

    assert_eq!(stmt.calls, vec![null_named("due", native::DATE)]);
}

// Test a non-string name tag is reported as a malformed list
#[test]
fn test_non_string_name_tag_is_malformed() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(1);

    let err = binder
        .bind_named(&json!([{"name": 3, "type": "INT", "value": 1}]), &mut stmt)
        .unwrap_err();

    assert!(matches!(err, BindError::MalformedParameterList(_)));
}

// Test a nested array is rejected in named mode too
#[test]
fn test_nested_array_rejected_in_named_mode() {
    let registry = SetterRegistry::new();
    let binder = ParameterBinder::new(&registry);
    let mut stmt = MockStatement::with_count(1);

    let err = binder.bind_named(&json!([[1, 2]]), &mut stmt).unwrap_err();

    assert!(matches!(
        err,
        BindError::UnsupportedParameterShape { position: 1 }
    ));
}
