//! Checks against the current UTC time.
//!
//! Plain date bounds (`if_greater_than(date, max)`) go through the shared
//! comparisons; their labels are rendered as `yyyy-MM-dd`.

use super::values::{Boundary, GuardValue};
use super::{error_codes, reject, GuardResult, Validate};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// **TEMPORAL** - a date or time with a notion of "now" in UTC
pub trait Temporal: Boundary {
    /// The current instant expressed in this type.
    fn now_utc() -> Self;
}

impl Temporal for DateTime<Utc> {
    fn now_utc() -> Self {
        Utc::now()
    }
}

impl Temporal for NaiveDateTime {
    fn now_utc() -> Self {
        Utc::now().naive_utc()
    }
}

impl Temporal for NaiveDate {
    fn now_utc() -> Self {
        Utc::now().date_naive()
    }
}

impl Validate {
    /// Fails with `MAX:DATETIME_UTCNOW` when `value` lies after the current UTC time.
    pub fn if_greater_than_utc_now<V>(self, value: V, property: &str) -> GuardResult<V>
    where
        V: GuardValue,
        V::Inner: Temporal,
    {
        match value.present() {
            Some(current) if current > V::Inner::now_utc() => {
                reject(property, error_codes::max(error_codes::DATETIME_UTCNOW))
            }
            _ => Ok(value),
        }
    }

    /// Fails with `MIN:DATETIME_UTCNOW` when `value` lies before the current UTC time.
    pub fn if_less_than_utc_now<V>(self, value: V, property: &str) -> GuardResult<V>
    where
        V: GuardValue,
        V::Inner: Temporal,
    {
        match value.present() {
            Some(current) if current < V::Inner::now_utc() => {
                reject(property, error_codes::min(error_codes::DATETIME_UTCNOW))
            }
            _ => Ok(value),
        }
    }
}
