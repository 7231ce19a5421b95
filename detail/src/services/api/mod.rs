//! # GitHub API Client Module
//!
//! HTTP client for the GitHub REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and ProfileService impl
//! └── users.rs    - User endpoints (profile lookup)
//! ```

pub mod client;
pub mod users;

pub use client::ApiClient;
pub use users::*;
