//! # Shared Utility Functions
//!
//! Helpers for normalising the loosely-typed optional strings the GitHub API
//! returns (`null`, `""` and whitespace all mean "not set").
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::non_empty;
//!
//! assert_eq!(non_empty(Some("Berlin".to_string())), Some("Berlin".to_string()));
//! assert_eq!(non_empty(Some(String::new())), None);
//! assert_eq!(non_empty(None), None);
//! ```

/// Collapse an empty or whitespace-only string to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !is_blank(s))
}

/// True when the string has no visible characters.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
