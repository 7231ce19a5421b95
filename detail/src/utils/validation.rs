//! Validation utilities for launch input

use crate::core::error::{DetailError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a GitHub login
///
/// Logins are 1-39 characters of ASCII letters, digits and single hyphens,
/// and never start or end with a hyphen.
pub fn validate_login(login: &str) -> ValidationResult {
    if login.is_empty() {
        return ValidationResult::err("Login is required");
    }

    if login.len() > 39 {
        return ValidationResult::err("Login must be at most 39 characters");
    }

    if !login.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return ValidationResult::err("Login can only contain letters, numbers and -");
    }

    if login.starts_with('-') || login.ends_with('-') || login.contains("--") {
        return ValidationResult::err("Login cannot start or end with - or contain --");
    }

    ValidationResult::ok()
}

/// Validate an avatar reference URL
pub fn validate_avatar_url(url: &str) -> ValidationResult {
    if url.is_empty() {
        return ValidationResult::err("Avatar URL is required");
    }

    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => ValidationResult::ok(),
        Ok(_) => ValidationResult::err("Avatar URL must use http or https"),
        Err(_) => ValidationResult::err("Invalid avatar URL"),
    }
}

/// Require a non-blank launch parameter.
///
/// Only presence is enforced here; the screen accepts whatever the caller
/// passes and lets the collaborators report malformed values.
pub fn require_input(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DetailError::MissingInput(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        assert!(validate_login("octocat").is_valid);
        assert!(validate_login("skydoves").is_valid);
        assert!(validate_login("a-b-c").is_valid);
        assert!(!validate_login("").is_valid);
        assert!(!validate_login("-leading").is_valid);
        assert!(!validate_login("double--dash").is_valid);
        assert!(!validate_login("under_score").is_valid);
        assert!(!validate_login(&"a".repeat(40)).is_valid);
    }

    #[test]
    fn test_avatar_url_validation() {
        assert!(validate_avatar_url("https://avatars.githubusercontent.com/u/1").is_valid);
        assert!(!validate_avatar_url("").is_valid);
        assert!(!validate_avatar_url("ftp://host/a.png").is_valid);
        assert!(!validate_avatar_url("not a url").is_valid);
    }

    #[test]
    fn test_require_input() {
        assert!(require_input("login", "octocat").is_ok());
        assert_eq!(require_input("login", ""), Err(DetailError::MissingInput("login")));
        assert_eq!(
            require_input("avatar_url", "   "),
            Err(DetailError::MissingInput("avatar_url"))
        );
    }
}
