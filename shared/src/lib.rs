//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the detail screen and the
//! GitHub REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::user`]**: User profile DTOs (`GET /users/{login}`)
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::non_empty`]**: Normalise optional strings (empty → `None`)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON (the GitHub API uses snake_case)
//! - Fields the API may send as `null` are `Option<_>`
//! - Unknown fields are ignored on deserialization
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::user::GithubUser;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let user: GithubUser = reqwest::Client::new()
//!     .get("https://api.github.com/users/octocat")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
