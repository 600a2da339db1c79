//! # WIRE TYPES
//!
//! Serializable shape of a [`ValidationError`] for cross-process transport.

use crate::errors::{ErrorKind, SerializationError, ValidationError};
use crate::status::StatusCode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// **ERROR PAYLOAD**
///
/// `help_link` is written for readers of the document but ignored when reading
/// it back; the receiving side re-derives it from `status_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Error kind by name (`"NotFound"`, ...).
    pub kind: ErrorKind,
    /// Numeric status; must match `kind`.
    pub status_code: StatusCode,
    /// Informational only.
    #[serde(default)]
    pub help_link: String,
    /// Human-readable message.
    pub message: String,
    /// Property → error code, in insertion order.
    #[serde(default)]
    pub errors: IndexMap<String, String>,
}

impl From<ValidationError> for ErrorPayload {
    fn from(error: ValidationError) -> Self {
        Self {
            kind: error.kind(),
            status_code: error.status_code(),
            help_link: error.help_link().to_string(),
            message: error.message().to_string(),
            errors: error.errors().clone(),
        }
    }
}

impl TryFrom<ErrorPayload> for ValidationError {
    type Error = SerializationError;

    fn try_from(payload: ErrorPayload) -> Result<Self, Self::Error> {
        let expected = payload.kind.status_code();
        if expected != payload.status_code {
            return Err(SerializationError::StatusMismatch {
                kind: payload.kind,
                expected: expected.as_u16(),
                found: payload.status_code.as_u16(),
            });
        }
        Ok(Self::from_parts(payload.kind, payload.message, payload.errors))
    }
}
