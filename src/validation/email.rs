use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Local part, a single `@`, then dot-separated domain labels ending in an
/// alphabetic TLD. Leading dots and `..` are rejected separately because the
/// regex engine has no lookaround.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Why a candidate was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    #[error("Please enter a valid email")]
    InvalidFormat,
}

/// An email address that passed [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidEmail(String);

impl ValidEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decide whether `candidate` is a well-formed email address.
///
/// Pure and deterministic. The candidate is not trimmed or case-folded, so
/// surrounding whitespace makes it invalid and `A@x.io` stays distinct from
/// `a@x.io`.
pub fn validate(candidate: &str) -> Result<ValidEmail, ValidationError> {
    if candidate.starts_with('.') || candidate.contains("..") {
        return Err(ValidationError::InvalidFormat);
    }

    if EMAIL_PATTERN.is_match(candidate) {
        Ok(ValidEmail(candidate.to_string()))
    } else {
        Err(ValidationError::InvalidFormat)
    }
}
