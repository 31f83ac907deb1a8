//! Bearer credential handling.
//!
//! The token is opaque to this crate. It is validated for presence only and
//! never written to logs.

use std::fmt;

use crate::error::{RecapError, Result};

/// An opaque bearer token for the orders API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Validate and wrap a raw token.
    ///
    /// Surrounding whitespace is trimmed and a leading `Bearer ` scheme is
    /// stripped, so a value copied straight from an `authorization` header
    /// is accepted. An empty result is an [`RecapError::Auth`] error.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let token = match trimmed.split_once(char::is_whitespace) {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
            _ if trimmed.eq_ignore_ascii_case("bearer") => "",
            _ => trimmed,
        };
        if token.is_empty() {
            return Err(RecapError::Auth("credential is missing or empty".into()));
        }
        Ok(Self {
            token: token.to_string(),
        })
    }

    /// Value for the `authorization` request header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
