//! Parameter addressing and the decoded wire form
//!
//! Parameters arrive as JSON: either a bare primitive or a
//! `{"name": .., "type": .., "value": ..}` wrapper object. Decoding stops
//! here; coercion to a native value is the setters' job.

use serde_json::{Map, Value};
use sqlbind_types::LogicalType;

use crate::error::{BindError, Result};

/// Stand-in payload when a wrapper object omits its "value" key
pub(crate) static JSON_NULL: Value = Value::Null;

/// Where a decoded parameter lands on the statement
///
/// Collapses index-addressed (`?` / `$N`) and name-addressed (`:name`)
/// statements into one address space so the rest of the pipeline never
/// branches on the statement flavor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamAddress {
    /// 1-based position in an index-addressed statement
    Position(usize),
    /// Placeholder name in a name-addressed statement
    Name(String),
}

impl core::fmt::Display for ParamAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParamAddress::Position(position) => write!(f, "parameter {}", position),
            ParamAddress::Name(name) => write!(f, "parameter \"{}\"", name),
        }
    }
}

/// One decoded parameter slot, not yet coerced
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSlot<'a> {
    /// Statement address this slot binds to
    pub address: ParamAddress,
    /// Type carried by the wrapper's "type" tag, if any
    pub declared: Option<LogicalType>,
    /// Borrowed payload; JSON null when the wrapper omitted "value"
    pub value: &'a Value,
}

impl<'a> ParamSlot<'a> {
    /// Decode the `{name, type, value}` wrapper form
    ///
    /// `position` is the element's 1-based position in the parameter list. It
    /// becomes the address when no "name" tag is present and shows up in
    /// error reports either way. Keys beyond the three known tags are
    /// ignored. With `require_name` set, a wrapper without a "name" tag is
    /// rejected instead of falling back to positional addressing.
    pub fn from_object(
        position: usize,
        require_name: bool,
        object: &'a Map<String, Value>,
    ) -> Result<Self> {
        let address = match object.get("name") {
            Some(Value::String(name)) => ParamAddress::Name(name.clone()),
            Some(other) => {
                return Err(BindError::MalformedParameterList(format!(
                    "\"name\" tag of parameter {} must be a string, got {}",
                    position,
                    json_kind(other)
                )));
            }
            None if require_name => return Err(BindError::MissingNameTag { position }),
            None => ParamAddress::Position(position),
        };

        let declared = match object.get("type") {
            Some(Value::String(spelling)) => Some(LogicalType::classify(spelling)?),
            Some(other) => {
                return Err(BindError::MalformedParameterList(format!(
                    "\"type\" tag of parameter {} must be a string, got {}",
                    position,
                    json_kind(other)
                )));
            }
            None => None,
        };

        let value = object.get("value").unwrap_or(&JSON_NULL);

        Ok(ParamSlot {
            address,
            declared,
            value,
        })
    }
}

/// Human name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_object(value: &Value) -> &Map<String, Value> {
        value.as_object().unwrap()
    }

    #[test]
    fn test_wrapper_with_all_tags() {
        let raw = json!({"name": "user_id", "type": "BIGINT", "value": 42});
        let slot = ParamSlot::from_object(1, true, as_object(&raw)).unwrap();

        assert_eq!(slot.address, ParamAddress::Name("user_id".into()));
        assert_eq!(slot.declared, Some(LogicalType::BigInt));
        assert_eq!(slot.value, &json!(42));
    }

    #[test]
    fn test_wrapper_without_name_uses_position() {
        let raw = json!({"type": "VARCHAR", "value": "abc"});
        let slot = ParamSlot::from_object(3, false, as_object(&raw)).unwrap();

        assert_eq!(slot.address, ParamAddress::Position(3));
        assert_eq!(slot.declared, Some(LogicalType::Text));
    }

    #[test]
    fn test_wrapper_without_name_rejected_when_required() {
        let raw = json!({"type": "VARCHAR", "value": "abc"});
        let err = ParamSlot::from_object(2, true, as_object(&raw)).unwrap_err();

        assert!(matches!(err, BindError::MissingNameTag { position: 2 }));
    }

    #[test]
    fn test_absent_value_decodes_as_null() {
        let raw = json!({"name": "note", "type": "VARCHAR"});
        let slot = ParamSlot::from_object(1, true, as_object(&raw)).unwrap();

        assert!(slot.value.is_null());
    }

    #[test]
    fn test_unknown_wrapper_keys_are_ignored() {
        let raw = json!({"type": "INT", "value": 7, "comment": "x", "width": 4});
        let slot = ParamSlot::from_object(1, false, as_object(&raw)).unwrap();

        assert_eq!(slot.declared, Some(LogicalType::Integer));
        assert_eq!(slot.value, &json!(7));
    }

    #[test]
    fn test_non_string_tags_are_malformed() {
        let raw = json!({"name": 5, "value": 1});
        let err = ParamSlot::from_object(1, false, as_object(&raw)).unwrap_err();
        assert!(matches!(err, BindError::MalformedParameterList(_)));

        let raw = json!({"type": 12, "value": 1});
        let err = ParamSlot::from_object(1, false, as_object(&raw)).unwrap_err();
        assert!(matches!(err, BindError::MalformedParameterList(_)));
    }

    #[test]
    fn test_unknown_type_spelling_propagates() {
        let raw = json!({"type": "JSONB", "value": 1});
        let err = ParamSlot::from_object(1, false, as_object(&raw)).unwrap_err();

        assert!(matches!(err, BindError::UnknownType { spelling } if spelling == "JSONB"));
    }

    #[test]
    fn test_address_display() {
        assert_eq!(ParamAddress::Position(4).to_string(), "parameter 4");
        assert_eq!(
            ParamAddress::Name("order_id".into()).to_string(),
            "parameter \"order_id\""
        );
    }
}
