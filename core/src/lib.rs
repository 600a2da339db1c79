//! # HTTPGUARD
//!
//! **HTTP-STATUS-MAPPED VALIDATION ERRORS AND GUARD CLAUSES**
//!
//! **ERRORS**: one [`ValidationError`] type tagged by [`ErrorKind`] (400/401/403/404/409),
//! carrying a help link, a message and an ordered property → error code map
//! **GUARDS**: [`Guard::VALIDATE`] checks a value and either returns it unchanged or
//! fails with a single `{property: code}` pair

pub mod api;
pub mod errors;
pub mod help_links;
pub mod status;
pub mod transport;
pub mod types;

pub mod validation;

pub use errors::{ErrorKind, SerializationError, ValidationError};
pub use status::StatusCode;
pub use validation::{error_codes, Guard, GuardResult, Validate, DEFAULT_PROPERTY};
