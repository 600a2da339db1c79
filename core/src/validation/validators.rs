//! # REUSABLE VALIDATORS
//!
//! Pre-configured rules that bundle guard checks behind the [`Validator`] trait,
//! for callers that build a rule once and apply it to many values.

use super::values::GuardValue;
use super::{Guard, GuardResult};

/// **VALIDATOR TRAIT**
///
/// Checks one input on behalf of `property` and hands back the validated output.
pub trait Validator {
    /// Data type accepted by this validator.
    type Input;

    /// Validated data type returned on success.
    type Output;

    /// Runs every configured check, stopping at the first failure.
    fn validate(&self, input: Self::Input, property: &str) -> GuardResult<Self::Output>;
}

// ================================================================================================
// RANGE VALIDATOR
// ================================================================================================

/// **RANGE VALIDATOR**
///
/// Strict `min`/`max` bounds; values equal to a bound pass. Absent values pass.
#[derive(Debug, Clone, Copy)]
pub struct RangeValidator<V: GuardValue> {
    min: V::Inner,
    max: V::Inner,
}

impl<V: GuardValue> RangeValidator<V> {
    /// Accepts `min..=max`.
    pub const fn new(min: V::Inner, max: V::Inner) -> Self {
        Self { min, max }
    }
}

impl<V: GuardValue> Validator for RangeValidator<V> {
    type Input = V;
    type Output = V;

    fn validate(&self, input: V, property: &str) -> GuardResult<V> {
        Guard::VALIDATE.if_out_of_range(input, self.min, self.max, property)
    }
}

// ================================================================================================
// LENGTH VALIDATOR
// ================================================================================================

/// **LENGTH VALIDATOR**
///
/// Optional presence requirement plus optional character-length bounds.
#[derive(Debug, Clone, Default)]
pub struct LengthValidator {
    required: bool,
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthValidator {
    /// No requirement and no bounds; every input passes until configured.
    pub const fn new() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
        }
    }

    /// Reject absent or whitespace-only text.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Reject text shorter than `min` characters.
    #[must_use]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Reject text longer than `max` characters.
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl Validator for LengthValidator {
    type Input = Option<String>;
    type Output = Option<String>;

    fn validate(&self, input: Self::Input, property: &str) -> GuardResult<Self::Output> {
        let mut input = input;
        if self.required {
            input = Guard::VALIDATE.if_null_or_whitespace(input, property)?;
        }
        if let Some(min) = self.min {
            input = Guard::VALIDATE.if_shorter_than(input, min, property)?;
        }
        if let Some(max) = self.max {
            input = Guard::VALIDATE.if_longer_than(input, max, property)?;
        }
        Ok(input)
    }
}

// ================================================================================================
// EMAIL VALIDATOR
// ================================================================================================

/// **EMAIL VALIDATOR**
///
/// With `optional`, absent addresses are accepted; present ones must still be valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator {
    optional: bool,
}

impl EmailValidator {
    /// Address required.
    pub const fn new() -> Self {
        Self { optional: false }
    }

    /// Address may be absent.
    pub const fn optional() -> Self {
        Self { optional: true }
    }
}

impl Validator for EmailValidator {
    type Input = Option<String>;
    type Output = Option<String>;

    fn validate(&self, input: Self::Input, property: &str) -> GuardResult<Self::Output> {
        if self.optional && input.is_none() {
            return Ok(input);
        }
        Guard::VALIDATE.if_not_email(input, property)
    }
}
