//! # Core Abstractions
//!
//! Core traits, primitives and error types shared by the controller and its collaborators.
//!
//! ## Modules
//!
//! - **[`error`]**: Screen error type (`DetailError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits injected into the screen (`ProfileService`,
//!   `ImageLoader`, `Presenter`)
//! - **[`slot`]**: Single-value observable holder with last-value replay
//! - **[`config`]**: Runtime configuration loaded from the environment
//!
//! ## Dependency Injection
//!
//! Collaborators are passed explicitly into constructors:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use detail::core::service::ProfileService;
//!
//! // In production: the GitHub client
//! let api: Arc<dyn ProfileService> = Arc::new(detail::services::api::ApiClient::new());
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod slot;

pub use config::DetailConfig;
pub use error::{DetailError, Result};
pub use service::{ImageLoader, Presenter, ProfileService};
pub use slot::{Slot, Subscription};
