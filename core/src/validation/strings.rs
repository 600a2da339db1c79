//! Text checks. Lengths count Unicode scalar values, not bytes.

use super::values::TextValue;
use super::{error_codes, reject, GuardResult, Validate};
use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: one `@`, no whitespace, a dot in the domain.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("e-mail pattern is a valid regex")
});

fn char_len(text: &str) -> usize {
    text.chars().count()
}

impl Validate {
    /// Fails with `REQUIRED` when the text is absent or only whitespace.
    pub fn if_null_or_whitespace<S: TextValue>(self, value: S, property: &str) -> GuardResult<S> {
        match value.text() {
            Some(text) if !text.trim().is_empty() => Ok(value),
            _ => reject(property, error_codes::REQUIRED),
        }
    }

    /// Fails with `MAX:<max>` when longer than `max`. Absent text passes.
    pub fn if_longer_than<S: TextValue>(
        self,
        value: S,
        max: usize,
        property: &str,
    ) -> GuardResult<S> {
        match value.text() {
            Some(text) if char_len(text) > max => reject(property, error_codes::max(max)),
            _ => Ok(value),
        }
    }

    /// Fails with `MIN:<min>` when shorter than `min`. Absent text passes.
    pub fn if_shorter_than<S: TextValue>(
        self,
        value: S,
        min: usize,
        property: &str,
    ) -> GuardResult<S> {
        match value.text() {
            Some(text) if char_len(text) < min => reject(property, error_codes::min(min)),
            _ => Ok(value),
        }
    }

    /// Fails with `INVALID` when exactly `length` long. Absent text passes.
    pub fn if_length_equals<S: TextValue>(
        self,
        value: S,
        length: usize,
        property: &str,
    ) -> GuardResult<S> {
        match value.text() {
            Some(text) if char_len(text) == length => reject(property, error_codes::INVALID),
            _ => Ok(value),
        }
    }

    /// Fails with `INVALID` unless exactly `length` long. Absent text fails.
    pub fn if_length_different<S: TextValue>(
        self,
        value: S,
        length: usize,
        property: &str,
    ) -> GuardResult<S> {
        match value.text() {
            Some(text) if char_len(text) == length => Ok(value),
            _ => reject(property, error_codes::INVALID),
        }
    }

    /// Fails with `MIN:<min>` / `MAX:<max>` outside `min..=max`. Absent text passes.
    pub fn if_length_out_of_range<S: TextValue>(
        self,
        value: S,
        min: usize,
        max: usize,
        property: &str,
    ) -> GuardResult<S> {
        let Some(len) = value.text().map(char_len) else {
            return Ok(value);
        };
        if len < min {
            return reject(property, error_codes::min(min));
        }
        if len > max {
            return reject(property, error_codes::max(max));
        }
        Ok(value)
    }

    /// Fails with `INVALID` when the text is not an e-mail address. Absent text fails.
    pub fn if_not_email<S: TextValue>(self, value: S, property: &str) -> GuardResult<S> {
        match value.text() {
            Some(text) if EMAIL_PATTERN.is_match(text) => Ok(value),
            _ => reject(property, error_codes::INVALID),
        }
    }
}
