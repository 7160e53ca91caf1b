//! Input clean-up shared by every entry point.

use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, Money};

/// Trims and collapses runs of whitespace into a single space.
#[must_use]
pub fn trim_string(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[must_use]
pub fn is_non_empty(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Parses a strictly positive amount, `None` otherwise.
#[must_use]
pub fn sanitize_number(input: &str) -> Option<Money> {
    input
        .parse::<Money>()
        .ok()
        .filter(|amount| amount.is_positive())
}

/// Normalizes free text for case-insensitive matching (NFKC, trimmed,
/// collapsed whitespace, lowercase).
#[must_use]
pub fn sanitize_search_query(input: &str) -> String {
    trim_string(&input.nfkc().collect::<String>()).to_lowercase()
}

pub fn validate_username(username: &str) -> Result<(), EngineError> {
    if username.trim().is_empty() {
        return Err(EngineError::Validation("Username is required".to_string()));
    }
    if !username.contains('@') {
        return Err(EngineError::Validation(
            "Username must be a valid email".to_string(),
        ));
    }
    Ok(())
}

/// Checks login form input before any network call.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), EngineError> {
    validate_username(username)?;
    if password.is_empty() {
        return Err(EngineError::Validation("Password is required".to_string()));
    }
    if password.chars().count() < 6 {
        return Err(EngineError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}
