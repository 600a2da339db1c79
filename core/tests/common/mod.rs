//! Shared helpers for integration tests.

#![allow(dead_code)]

use httpguard::{ErrorKind, GuardResult, ValidationError};

/// Installs `env_logger` once so guard rejections show up with `RUST_LOG=debug`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every error kind, for table-driven tests.
pub const ALL_KINDS: [ErrorKind; 6] = [
    ErrorKind::BadRequest,
    ErrorKind::Property,
    ErrorKind::Unauthorized,
    ErrorKind::Forbidden,
    ErrorKind::NotFound,
    ErrorKind::Conflict,
];

/// Unwraps a guard failure and checks it names exactly one `{property: code}` pair.
pub fn expect_rejection<T: std::fmt::Debug>(
    result: GuardResult<T>,
    property: &str,
    code: &str,
) -> ValidationError {
    let error = result.expect_err("guard should have rejected the value");
    assert_eq!(error.kind(), ErrorKind::Property);
    assert_eq!(error.errors().len(), 1, "unexpected errors: {:?}", error.errors());
    assert_eq!(error.error_for(property), Some(code));
    error
}
