//! # Common Error Types
//!
//! Consolidated error handling for the detail screen.
//!
//! ## Error Categories
//!
//! - **MissingInput**: A required launch parameter was absent or blank. Raised by
//!   `on_create` before any asynchronous work starts.
//! - **State**: An illegal lifecycle transition was requested.
//! - **Config**: Invalid configuration or command line input.
//!
//! Image and profile failures are not errors of the screen: collaborator
//! traits return plain `String` messages, which are logged or shown to the
//! user verbatim.

use thiserror::Error;

/// Error type for every fallible operation on the screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    /// A required launch parameter (`login` or `avatar_url`) was empty.
    ///
    /// ```rust
    /// use detail::core::error::DetailError;
    ///
    /// let err = DetailError::MissingInput("login");
    /// assert_eq!(err.to_string(), "Missing required input: login");
    /// ```
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// Lifecycle transition not allowed from the current phase.
    #[error("State error: {0}")]
    State(String),

    /// Bad configuration value or command line argument.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, DetailError>`.
pub type Result<T> = std::result::Result<T, DetailError>;

impl From<pico_args::Error> for DetailError {
    fn from(err: pico_args::Error) -> Self {
        DetailError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DetailError::Config("bad timeout".to_string()).to_string(),
            "Config error: bad timeout"
        );
        assert_eq!(
            DetailError::State("already created".to_string()).to_string(),
            "State error: already created"
        );
    }

    #[test]
    fn test_pico_args_error_is_config_error() {
        let err = DetailError::from(pico_args::Error::MissingArgument);
        assert!(matches!(err, DetailError::Config(_)));
    }
}
