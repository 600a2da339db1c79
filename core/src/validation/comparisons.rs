//! Bound, equality and presence checks shared by every value type.

use super::values::{Boundary, GuardValue};
use super::{error_codes, reject, GuardResult, Validate};

impl Validate {
    /// Fails with `REQUIRED` when `value` is `None`; otherwise unwraps it.
    pub fn if_null<T>(self, value: Option<T>, property: &str) -> GuardResult<T> {
        match value {
            Some(value) => Ok(value),
            None => reject(property, error_codes::REQUIRED),
        }
    }

    /// Fails with `MAX:<max>` when `value > max`. Absent values pass.
    pub fn if_greater_than<V: GuardValue>(
        self,
        value: V,
        max: V::Inner,
        property: &str,
    ) -> GuardResult<V> {
        match value.present() {
            Some(current) if current > max => reject(property, error_codes::max(max.label())),
            _ => Ok(value),
        }
    }

    /// Fails with `MIN:<min>` when `value < min`. Absent values pass.
    pub fn if_less_than<V: GuardValue>(
        self,
        value: V,
        min: V::Inner,
        property: &str,
    ) -> GuardResult<V> {
        match value.present() {
            Some(current) if current < min => reject(property, error_codes::min(min.label())),
            _ => Ok(value),
        }
    }

    /// Fails with `MIN:<min>` below the range or `MAX:<max>` above it. Absent values pass.
    pub fn if_out_of_range<V: GuardValue>(
        self,
        value: V,
        min: V::Inner,
        max: V::Inner,
        property: &str,
    ) -> GuardResult<V> {
        let value = self.if_less_than(value, min, property)?;
        self.if_greater_than(value, max, property)
    }

    /// Fails with `INVALID` when `value == other`.
    ///
    /// On `Option`s two absent values are equal, so `if_equals(None, None)` fails.
    pub fn if_equals<T: PartialEq>(self, value: T, other: T, property: &str) -> GuardResult<T> {
        if value == other {
            return reject(property, error_codes::INVALID);
        }
        Ok(value)
    }

    /// Fails with `INVALID` when `value != other`.
    ///
    /// On `Option`s an absent value differs from any present one.
    pub fn if_different<T: PartialEq>(self, value: T, other: T, property: &str) -> GuardResult<T> {
        if value != other {
            return reject(property, error_codes::INVALID);
        }
        Ok(value)
    }
}
