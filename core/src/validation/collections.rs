//! Emptiness and element-count checks for text, collections and identifiers.

use super::values::{Countable, Emptiness};
use super::{error_codes, reject, GuardResult, Validate};

impl Validate {
    /// Fails with `REQUIRED` when `value` is empty (`""`, no elements, nil UUID).
    /// Absent values pass.
    pub fn if_empty<E: Emptiness>(self, value: E, property: &str) -> GuardResult<E> {
        match value.is_blank() {
            Some(true) => reject(property, error_codes::REQUIRED),
            _ => Ok(value),
        }
    }

    /// Fails with `REQUIRED` when `value` is absent or empty.
    pub fn if_null_or_empty<E: Emptiness>(self, value: E, property: &str) -> GuardResult<E> {
        match value.is_blank() {
            Some(false) => Ok(value),
            _ => reject(property, error_codes::REQUIRED),
        }
    }

    /// Fails with `MAX:<max>` when holding more than `max` elements. Absent collections pass.
    pub fn if_count_greater_than<C: Countable>(
        self,
        value: C,
        max: usize,
        property: &str,
    ) -> GuardResult<C> {
        match value.count() {
            Some(count) if count > max => reject(property, error_codes::max(max)),
            _ => Ok(value),
        }
    }

    /// Fails with `MIN:<min>` when holding fewer than `min` elements. Absent collections fail.
    pub fn if_count_less_than<C: Countable>(
        self,
        value: C,
        min: usize,
        property: &str,
    ) -> GuardResult<C> {
        match value.count() {
            Some(count) if count >= min => Ok(value),
            _ => reject(property, error_codes::min(min)),
        }
    }
}
