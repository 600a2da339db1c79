//! # GUARD CLAUSES
//!
//! Precondition checks that either hand the checked value back unchanged or
//! fail with a [`ErrorKind::Property`] error holding exactly one
//! `{property: code}` pair.
//!
//! ## CHECK FAMILIES
//!
//! 1. **PRESENCE** - `if_null`, `if_empty`, `if_null_or_empty`
//! 2. **BOUNDS** - `if_greater_than`, `if_less_than`, `if_out_of_range` (strict comparisons)
//! 3. **EQUALITY** - `if_equals`, `if_different`
//! 4. **TEXT** - length, whitespace and e-mail checks
//! 5. **DATES** - comparisons against the current UTC time
//! 6. **COLLECTIONS** - element count checks
//! 7. **GEOLOCATION** - latitude/longitude ranges
//!
//! ## USAGE
//!
//! ```rust
//! use httpguard::{guard, Guard};
//!
//! # fn main() -> Result<(), httpguard::ValidationError> {
//! let quantity = 3;
//! let quantity = guard!(if_greater_than(quantity, 5))?;
//! let same = Guard::VALIDATE.if_less_than(quantity, 1, "quantity")?;
//! # assert_eq!(same, 3);
//! # Ok(())
//! # }
//! ```

use crate::errors::{ErrorKind, ValidationError};

mod collections;
mod comparisons;
mod dates;
mod geo;
mod strings;
pub mod validators;
pub mod values;

pub use dates::Temporal;
pub use geo::Coordinate;
pub use validators::{EmailValidator, LengthValidator, RangeValidator, Validator};
pub use values::{Boundary, Countable, Emptiness, GuardValue, TextValue};

/// Result of a guard check.
pub type GuardResult<T> = Result<T, ValidationError>;

/// Property name for callers that have none to report.
pub const DEFAULT_PROPERTY: &str = "value";

/// **GUARD** - namespace for the shared check entry point
#[derive(Debug, Clone, Copy)]
pub struct Guard;

impl Guard {
    /// The stateless entry point all checks hang off.
    pub const VALIDATE: Validate = Validate;
}

/// **VALIDATE** - stateless receiver of every guard check
///
/// Holds no data, so one value is shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validate;

/// Fails a guard check for `property` with `code`.
pub(crate) fn reject<T>(property: &str, code: impl Into<String>) -> GuardResult<T> {
    let code = code.into();
    log::debug!(target: "httpguard::guard", "rejected '{}': {}", property, code);
    ErrorKind::Property.throw(property, code)
}

/// Runs a check on [`Guard::VALIDATE`], naming the property after the value expression.
///
/// `guard!(if_greater_than(quantity, 5))` reports failures against `"quantity"`.
#[macro_export]
macro_rules! guard {
    ($check:ident ( $value:expr $(, $arg:expr)* $(,)? )) => {
        $crate::Guard::VALIDATE.$check($value $(, $arg)*, stringify!($value))
    };
}

/// **ERROR CODES**
///
/// Canonical reasons recorded against a property. Callers may use their own codes alongside these.
pub mod error_codes {
    use std::fmt::Display;

    /// Value missing, empty or blank.
    pub const REQUIRED: &str = "REQUIRED";
    /// Value present but malformed or not allowed.
    pub const INVALID: &str = "INVALID";
    /// Caller may not set this value.
    pub const FORBIDDEN: &str = "FORBIDDEN";
    /// Referenced entity does not exist.
    pub const NOT_FOUND: &str = "NOT_FOUND";
    /// Credentials missing or rejected.
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    /// Value already taken.
    pub const DUPLICATED: &str = "DUPLICATED";
    /// Latitude below -90°.
    pub const MIN_LATITUDE: &str = "MIN_LATITUDE";
    /// Latitude above 90°.
    pub const MAX_LATITUDE: &str = "MAX_LATITUDE";
    /// Longitude below -180°.
    pub const MIN_LONGITUDE: &str = "MIN_LONGITUDE";
    /// Longitude above 180°.
    pub const MAX_LONGITUDE: &str = "MAX_LONGITUDE";
    /// Bound label for checks against the current UTC time.
    pub const DATETIME_UTCNOW: &str = "DATETIME_UTCNOW";

    /// `MAX:<label>`
    pub fn max(label: impl Display) -> String {
        format!("MAX:{}", label)
    }

    /// `MIN:<label>`
    pub fn min(label: impl Display) -> String {
        format!("MIN:{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::StatusCode;

    #[test]
    fn test_bound_code_builders() {
        assert_eq!(error_codes::max(5), "MAX:5");
        assert_eq!(error_codes::min("2020-01-01"), "MIN:2020-01-01");
        assert_eq!(error_codes::max(error_codes::DATETIME_UTCNOW), "MAX:DATETIME_UTCNOW");
    }

    #[test]
    fn test_reject_builds_property_error() {
        let error = reject::<()>("name", error_codes::REQUIRED).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Property);
        assert_eq!(error.status_code(), StatusCode::BadRequest);
        assert_eq!(error.errors().len(), 1);
        assert_eq!(error.error_for("name"), Some("REQUIRED"));
    }

    #[test]
    fn test_macro_captures_expression_name() {
        let quantity = 241;
        let error = guard!(if_greater_than(quantity, 5)).unwrap_err();
        assert_eq!(error.error_for("quantity"), Some("MAX:5"));
    }

    #[test]
    fn test_macro_captures_field_access() {
        struct Order {
            total: f64,
        }
        let order = Order { total: -1.0 };
        let error = guard!(if_less_than(order.total, 0.0)).unwrap_err();
        assert_eq!(error.error_for("order.total"), Some("MIN:0"));
    }

    #[test]
    fn test_entry_point_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>(_: T) {}
        assert_send_sync(Guard::VALIDATE);
        assert_eq!(std::mem::size_of::<Validate>(), 0);
    }
}
