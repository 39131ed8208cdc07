//! Encoding and decoding of schema-typed dynamic values.
//!
//! Values cross the wire as [`proto::DynamicValue`], carrying either a
//! MessagePack or a JSON document. The client always produces MessagePack
//! (with map keys as names, so providers can decode against their schema) and
//! accepts either encoding from providers, preferring MessagePack when both
//! are present. Values are checked against the schema-implied type on both
//! sides of the wire so a misbehaving provider is caught at the boundary
//! instead of deep inside a plan.

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::proto;
use crate::schema::ValueType;

/// Errors from translating values to or from their wire encoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value does not conform to the schema-implied type.
    #[error("value does not conform to the expected type")]
    Mismatch,

    /// MessagePack serialization failed.
    #[error("MessagePack encoding failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// MessagePack deserialization failed.
    #[error("MessagePack decoding failed: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    /// JSON deserialization failed.
    #[error("JSON decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<CodecError> for Diagnostic {
    fn from(err: CodecError) -> Self {
        Diagnostic::error("Invalid dynamic value").with_detail(err.to_string())
    }
}

/// Encode a value against its schema-implied type.
pub fn encode(value: &serde_json::Value, ty: &ValueType) -> Result<proto::DynamicValue, CodecError> {
    if !ty.conforms(value) {
        return Err(CodecError::Mismatch);
    }
    // to_vec_named keeps map keys as strings rather than positional indexes.
    let msgpack = rmp_serde::to_vec_named(value)?;
    Ok(proto::DynamicValue {
        msgpack,
        json: Vec::new(),
    })
}

/// Decode a wire value against its schema-implied type.
///
/// An absent or empty wire value decodes to null; that is how providers
/// represent "no state" rather than an error.
pub fn decode(
    value: Option<&proto::DynamicValue>,
    ty: &ValueType,
) -> Result<serde_json::Value, CodecError> {
    let Some(value) = value else {
        return Ok(serde_json::Value::Null);
    };
    let decoded: serde_json::Value = if !value.msgpack.is_empty() {
        rmp_serde::from_slice(&value.msgpack)?
    } else if !value.json.is_empty() {
        serde_json::from_slice(&value.json)?
    } else {
        return Ok(serde_json::Value::Null);
    };
    if !ty.conforms(&decoded) {
        return Err(CodecError::Mismatch);
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use serde_json::json;
    use std::collections::HashMap;

    fn server_type() -> ValueType {
        ValueType::object(HashMap::from([
            ("name".to_string(), ValueType::String),
            ("port".to_string(), ValueType::Number),
        ]))
    }

    #[test]
    fn test_round_trip() {
        let ty = server_type();
        let value = json!({"name": "web", "port": 8080});
        let wire = encode(&value, &ty).unwrap();
        assert!(!wire.msgpack.is_empty());
        assert!(wire.json.is_empty());
        assert_eq!(decode(Some(&wire), &ty).unwrap(), value);
    }

    #[test]
    fn test_absent_decodes_to_null() {
        assert_eq!(decode(None, &server_type()).unwrap(), json!(null));
        let empty = proto::DynamicValue {
            msgpack: Vec::new(),
            json: Vec::new(),
        };
        assert_eq!(decode(Some(&empty), &server_type()).unwrap(), json!(null));
    }

    #[test]
    fn test_json_fallback() {
        let wire = proto::DynamicValue {
            msgpack: Vec::new(),
            json: br#"{"name":"db","port":5432}"#.to_vec(),
        };
        assert_eq!(
            decode(Some(&wire), &server_type()).unwrap(),
            json!({"name": "db", "port": 5432}),
        );
    }

    #[test]
    fn test_msgpack_preferred_over_json() {
        let msgpack = rmp_serde::to_vec_named(&json!({"name": "a", "port": 1})).unwrap();
        let wire = proto::DynamicValue {
            msgpack,
            json: br#"{"name":"b","port":2}"#.to_vec(),
        };
        assert_eq!(
            decode(Some(&wire), &server_type()).unwrap(),
            json!({"name": "a", "port": 1}),
        );
    }

    #[test]
    fn test_encode_rejects_mismatch() {
        let err = encode(&json!({"name": 42}), &server_type()).unwrap_err();
        assert!(matches!(err, CodecError::Mismatch));
    }

    #[test]
    fn test_decode_rejects_mismatch() {
        let wire = proto::DynamicValue {
            msgpack: Vec::new(),
            json: br#"{"name":"web","proto":"tcp"}"#.to_vec(),
        };
        let err = decode(Some(&wire), &server_type()).unwrap_err();
        assert!(matches!(err, CodecError::Mismatch));
    }

    #[test]
    fn test_codec_error_to_diagnostic() {
        let diag: Diagnostic = CodecError::Mismatch.into();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.summary, "Invalid dynamic value");
    }
}
