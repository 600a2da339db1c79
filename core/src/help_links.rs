//! # HELP LINK TABLE
//!
//! Maps each [`StatusCode`] to the reference URI attached to errors carrying it.
//!
//! The process-wide table is built on first use. Its base URI comes from the
//! `HTTPGUARD_HELP_LINK_BASE` environment variable when set, otherwise from
//! [`DEFAULT_BASE`].

use crate::status::StatusCode;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;

/// Environment variable overriding the base URI of the global table.
pub const BASE_ENV_VAR: &str = "HTTPGUARD_HELP_LINK_BASE";

/// Base URI used when no override is configured.
pub const DEFAULT_BASE: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/";

/// The global table, read once.
static HELP_LINKS: Lazy<HelpLinkTable> = Lazy::new(HelpLinkTable::from_env);

/// **HELP LINK TABLE** - status code to reference URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLinkTable {
    links: HashMap<u16, String>,
}

impl HelpLinkTable {
    /// Builds a table where every status links to `<base>/<code>`.
    ///
    /// Trailing slashes on `base` collapse to exactly one.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let links = StatusCode::ALL
            .into_iter()
            .map(|status| (status.as_u16(), format!("{}/{}", base, status.as_u16())))
            .collect();
        Self { links }
    }

    /// Builds a table from [`BASE_ENV_VAR`], falling back to [`DEFAULT_BASE`].
    pub fn from_env() -> Self {
        match env::var(BASE_ENV_VAR) {
            Ok(base) if !base.trim().is_empty() => {
                log::debug!("help links rooted at {} (from {})", base, BASE_ENV_VAR);
                Self::with_base(base.trim())
            }
            _ => Self::default(),
        }
    }

    /// Link for `status`.
    pub fn get(&self, status: StatusCode) -> &str {
        // every StatusCode is inserted by `with_base`
        self.links
            .get(&status.as_u16())
            .map_or(DEFAULT_BASE, String::as_str)
    }
}

impl Default for HelpLinkTable {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE)
    }
}

/// Link for `status` from the process-wide table.
pub fn lookup(status: StatusCode) -> &'static str {
    HELP_LINKS.get(status)
}
