//! # External Services
//!
//! Production implementations of the screen's collaborators.
//!
//! - **[`api`]**: GitHub REST client implementing [`crate::core::ProfileService`]
//! - **[`image`]**: HTTP image loader implementing [`crate::core::ImageLoader`]

pub mod api;
pub mod image;
