//! Flat re-exports of the public surface.

pub use crate::errors::{ErrorKind, SerializationError, ValidationError};
pub use crate::help_links::HelpLinkTable;
pub use crate::status::StatusCode;
pub use crate::transport::{from_json, from_slice, from_value, to_json, to_vec};
pub use crate::validation::{error_codes, Guard, GuardResult, Validate, Validator};
