//! # STRUCTURED VALIDATION ERRORS
//!
//! One error type, [`ValidationError`], tagged with an [`ErrorKind`] that fixes
//! its HTTP status and help link. Every kind carries the same payload: a
//! message, an ordered property → error code map and an optional inner cause.

use crate::help_links;
use crate::status::StatusCode;
use crate::types::ErrorPayload;
use crate::validation::error_codes;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Wrapped causal error.
pub type InnerError = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// **ERROR KIND** - which HTTP failure family an error belongs to
///
/// `Property` is the bad-request specialization raised by guard clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Generic bad input (400).
    BadRequest,
    /// A single property failed a rule (400).
    Property,
    /// Missing or invalid credentials (401).
    Unauthorized,
    /// Authenticated but not permitted (403).
    Forbidden,
    /// Resource does not exist (404).
    NotFound,
    /// Resource already exists (409).
    Conflict,
}

impl ErrorKind {
    /// Status code fixed by this kind.
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::Property => StatusCode::BadRequest,
            Self::Unauthorized => StatusCode::Unauthorized,
            Self::Forbidden => StatusCode::Forbidden,
            Self::NotFound => StatusCode::NotFound,
            Self::Conflict => StatusCode::Conflict,
        }
    }

    /// Error code used by [`ErrorKind::throw_default`].
    pub const fn default_error_code(self) -> &'static str {
        match self {
            Self::BadRequest | Self::Property => error_codes::INVALID,
            Self::Unauthorized => error_codes::UNAUTHORIZED,
            Self::Forbidden => error_codes::FORBIDDEN,
            Self::NotFound => error_codes::NOT_FOUND,
            Self::Conflict => error_codes::DUPLICATED,
        }
    }

    /// Fails with `{property: code}` and the property message template.
    pub fn throw<T>(
        self,
        property: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<T, ValidationError> {
        Err(ValidationError::for_property(self, property, code))
    }

    /// Fails with `{property: REQUIRED}`.
    pub fn throw_required<T>(self, property: impl Into<String>) -> Result<T, ValidationError> {
        self.throw(property, error_codes::REQUIRED)
    }

    /// Fails with `{property: INVALID}`.
    pub fn throw_invalid<T>(self, property: impl Into<String>) -> Result<T, ValidationError> {
        self.throw(property, error_codes::INVALID)
    }

    /// Fails with the kind's own default code, e.g. `NOT_FOUND` for [`ErrorKind::NotFound`].
    pub fn throw_default<T>(self, property: impl Into<String>) -> Result<T, ValidationError> {
        self.throw(property, self.default_error_code())
    }
}

/// **STRUCTURED VALIDATION ERROR**
///
/// `status_code` and `help_link` are derived from `kind` at construction and
/// never change. `errors` keeps insertion order and unique keys.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(into = "ErrorPayload", try_from = "ErrorPayload")]
#[error("{message}")]
pub struct ValidationError {
    kind: ErrorKind,
    status_code: StatusCode,
    help_link: String,
    message: String,
    errors: IndexMap<String, String>,
    #[source]
    inner: Option<InnerError>,
}

impl ValidationError {
    /// Error of `kind` with the default status message and no property errors.
    pub fn new(kind: ErrorKind) -> Self {
        let status_code = kind.status_code();
        Self::with_message(kind, default_message(status_code))
    }

    /// Error of `kind` with an explicit message.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        let status_code = kind.status_code();
        Self {
            kind,
            status_code,
            help_link: help_links::lookup(status_code).to_string(),
            message: message.into(),
            errors: IndexMap::new(),
            inner: None,
        }
    }

    /// Error of `kind` wrapping a causal error.
    pub fn with_inner(
        kind: ErrorKind,
        message: impl Into<String>,
        inner: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let mut error = Self::with_message(kind, message);
        let inner: InnerError = Arc::new(inner);
        log::trace!("{:?} error wraps: {}", kind, inner);
        error.inner = Some(inner);
        error
    }

    /// Error of `kind` holding exactly `{property: code}`.
    pub fn for_property(
        kind: ErrorKind,
        property: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        let property = property.into();
        let code = code.into();
        let message = property_message(&property, &code);
        Self::with_message(kind, message).with_error(property, code)
    }

    /// Error of `kind` holding exactly `{property: code}` with an explicit message.
    pub fn for_property_with_message(
        kind: ErrorKind,
        property: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::with_message(kind, message).with_error(property, code)
    }

    /// Adds a property error while the value is still being built.
    ///
    /// A repeated property keeps its original position and takes the new code.
    #[must_use]
    pub fn with_error(mut self, property: impl Into<String>, code: impl Into<String>) -> Self {
        self.errors.insert(property.into(), code.into());
        self
    }

    /// [`ErrorKind::BadRequest`] holding `{property: code}`.
    pub fn bad_request(property: impl Into<String>, code: impl Into<String>) -> Self {
        Self::for_property(ErrorKind::BadRequest, property, code)
    }

    /// [`ErrorKind::Property`] holding `{property: code}`.
    pub fn property(property: impl Into<String>, code: impl Into<String>) -> Self {
        Self::for_property(ErrorKind::Property, property, code)
    }

    /// [`ErrorKind::Unauthorized`] holding `{property: code}`.
    pub fn unauthorized(property: impl Into<String>, code: impl Into<String>) -> Self {
        Self::for_property(ErrorKind::Unauthorized, property, code)
    }

    /// [`ErrorKind::Forbidden`] holding `{property: code}`.
    pub fn forbidden(property: impl Into<String>, code: impl Into<String>) -> Self {
        Self::for_property(ErrorKind::Forbidden, property, code)
    }

    /// [`ErrorKind::NotFound`] holding `{property: code}`.
    pub fn not_found(property: impl Into<String>, code: impl Into<String>) -> Self {
        Self::for_property(ErrorKind::NotFound, property, code)
    }

    /// [`ErrorKind::Conflict`] holding `{property: code}`.
    pub fn conflict(property: impl Into<String>, code: impl Into<String>) -> Self {
        Self::for_property(ErrorKind::Conflict, property, code)
    }

    /// Kind this error was raised as.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status fixed by [`Self::kind`].
    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Reference URI for the status.
    pub fn help_link(&self) -> &str {
        &self.help_link
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Property → error code pairs in insertion order.
    pub const fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    /// Error code recorded for `property`, if any.
    pub fn error_for(&self, property: &str) -> Option<&str> {
        self.errors.get(property).map(String::as_str)
    }

    /// Underlying cause, when one was attached.
    pub fn inner(&self) -> Option<&InnerError> {
        self.inner.as_ref()
    }

    /// Rebuilds an error from transported parts; the help link is re-derived.
    pub(crate) fn from_parts(
        kind: ErrorKind,
        message: String,
        errors: IndexMap<String, String>,
    ) -> Self {
        let mut error = Self::with_message(kind, message);
        error.errors = errors;
        error
    }
}

/// Equality over kind, status, help link, message and errors in order. The inner cause is not compared.
impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.status_code == other.status_code
            && self.help_link == other.help_link
            && self.message == other.message
            && self.errors.iter().eq(other.errors.iter())
    }
}

/// `An error occurred with the status code '<Status>'`
pub fn default_message(status: StatusCode) -> String {
    format!("An error occurred with the status code '{}'", status.name())
}

/// `The property '<property>' contains the error '<code>`
///
/// The closing quote after the code is absent; consumers match on this exact text.
pub fn property_message(property: &str, code: &str) -> String {
    format!("The property '{}' contains the error '{}", property, code)
}

/// **TRANSPORT ERRORS** - failures moving a [`ValidationError`] across a process boundary
#[derive(Debug, Error)]
pub enum SerializationError {
    /// The document was JSON `null`.
    #[error("SERIALIZATION ERROR: document is null")]
    NullDocument,

    /// The status code is not one this crate raises.
    #[error("SERIALIZATION ERROR: unknown status code {0}")]
    UnknownStatus(u16),

    /// The status code disagrees with the kind.
    #[error("SERIALIZATION ERROR: kind {kind:?} requires status {expected}, found {found}")]
    StatusMismatch {
        /// Kind read from the document.
        kind: ErrorKind,
        /// Status that kind always carries.
        expected: u16,
        /// Status read from the document.
        found: u16,
    },

    /// Malformed JSON or a shape mismatch.
    #[error("SERIALIZATION ERROR: {0}")]
    Json(#[from] serde_json::Error),
}
