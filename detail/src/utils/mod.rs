//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`validation`]**: Launch input validation (login, avatar URL)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate string normalisation
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
