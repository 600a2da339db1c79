//! # JSON TRANSPORT
//!
//! Encode/decode helpers for shipping a [`ValidationError`] between processes.
//! Decoding is strict: a `null` document fails immediately instead of yielding
//! an empty error.

use crate::errors::{SerializationError, ValidationError};
use serde_json::Value as JsonValue;

/// Encodes `error` as a JSON string.
pub fn to_json(error: &ValidationError) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(error)?)
}

/// Encodes `error` as JSON bytes.
pub fn to_vec(error: &ValidationError) -> Result<Vec<u8>, SerializationError> {
    Ok(serde_json::to_vec(error)?)
}

fn present(decoded: Option<ValidationError>) -> Result<ValidationError, SerializationError> {
    decoded.ok_or(SerializationError::NullDocument)
}

/// Decodes an error from an already parsed JSON value.
///
/// Object key order survives only as far as the value kept it.
pub fn from_value(value: JsonValue) -> Result<ValidationError, SerializationError> {
    present(serde_json::from_value(value)?)
}

/// Decodes an error from a JSON string.
pub fn from_json(json: &str) -> Result<ValidationError, SerializationError> {
    present(serde_json::from_str(json)?)
}

/// Decodes an error from JSON bytes.
pub fn from_slice(bytes: &[u8]) -> Result<ValidationError, SerializationError> {
    present(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use std::io;

    #[test]
    fn test_round_trip_every_kind() {
        let kinds = [
            ErrorKind::BadRequest,
            ErrorKind::Property,
            ErrorKind::Unauthorized,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::Conflict,
        ];
        for kind in kinds {
            let original = ValidationError::for_property(kind, "field", "INVALID");
            let back = from_json(&to_json(&original).unwrap()).unwrap();
            assert_eq!(back, original);
            assert_eq!(back.status_code(), original.status_code());
            assert_eq!(back.help_link(), original.help_link());
            assert_eq!(back.message(), original.message());
            assert_eq!(back.errors(), original.errors());
        }
    }

    #[test]
    fn test_round_trip_keeps_error_order() {
        let original = ValidationError::new(ErrorKind::BadRequest)
            .with_error("b", "REQUIRED")
            .with_error("a", "MIN:1");
        let back = from_slice(&to_vec(&original).unwrap()).unwrap();
        let keys: Vec<&str> = back.errors().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_error_order_survives_every_decoder() {
        let original = ValidationError::new(ErrorKind::Conflict)
            .with_error("zeta", "DUPLICATED")
            .with_error("alpha", "INVALID")
            .with_error("mid", "REQUIRED");
        let json = to_json(&original).unwrap();
        let decoded = [
            from_json(&json).unwrap(),
            from_slice(json.as_bytes()).unwrap(),
            from_value(serde_json::from_str(&json).unwrap()).unwrap(),
        ];
        for back in decoded {
            let keys: Vec<&str> = back.errors().keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            assert_eq!(back, original);
        }
    }

    #[test]
    fn test_inner_error_is_not_transported() {
        let original =
            ValidationError::with_inner(ErrorKind::Conflict, "dup", io::Error::other("db"));
        let back = from_json(&to_json(&original).unwrap()).unwrap();
        assert!(back.inner().is_none());
        assert_eq!(back.message(), "dup");
    }

    #[test]
    fn test_null_document_fails_fast() {
        assert!(matches!(
            from_value(JsonValue::Null),
            Err(SerializationError::NullDocument)
        ));
        assert!(matches!(from_json("null"), Err(SerializationError::NullDocument)));
        assert!(matches!(from_slice(b" null "), Err(SerializationError::NullDocument)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json("{not json"), Err(SerializationError::Json(_))));
    }

    #[test]
    fn test_unknown_status_code() {
        let json = r#"{"kind":"BadRequest","statusCode":418,"message":"teapot","errors":{}}"#;
        assert!(from_json(json).is_err());
    }
}
