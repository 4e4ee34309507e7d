//! Email Value Object
//!
//! A syntactically plausible, normalized email address. Whether the
//! caller actually controls the mailbox is proven separately, by the
//! verification-code flow.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AuthError;

// RFC 5321 limits
const MAX_TOTAL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

/// Normalized email address. Construction trims surrounding
/// whitespace and lowercases, so two spellings of the same address
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(raw: impl Into<String>) -> Result<Self, AuthError> {
        let normalized = raw.into().trim().to_lowercase();

        let (local, domain) = normalized
            .split_once('@')
            .ok_or_else(|| invalid("missing @"))?;

        if normalized.len() > MAX_TOTAL_LEN {
            return Err(invalid("address too long"));
        }
        if local.is_empty() || local.len() > MAX_LOCAL_LEN {
            return Err(invalid("bad local part"));
        }
        if !domain_looks_valid(domain) {
            return Err(invalid("bad domain"));
        }

        Ok(Self(normalized))
    }

    /// Wrap a value read back from the database, which was validated
    /// on the way in
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

fn invalid(detail: &str) -> AuthError {
    AuthError::EmailValidation(format!("invalid email format ({detail})"))
}

fn domain_looks_valid(domain: &str) -> bool {
    // At least two dot-separated labels of [a-z0-9-], none empty,
    // none starting or ending with a hyphen
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    })
}

impl FromStr for Email {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, AuthError> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
