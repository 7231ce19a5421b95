//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the GitHub REST API.
//!
//! ## Module Organization
//!
//! - [`user`] - User profile returned by `GET /users/{login}`
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /users/octocat
//! Accept: application/vnd.github+json
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "login": "octocat",
//!   "name": "The Octocat",
//!   "company": "@github",
//!   "blog": "https://github.blog",
//!   "location": "San Francisco",
//!   "bio": null,
//!   "html_url": "https://github.com/octocat",
//!   "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
//!   "followers": 9000,
//!   "following": 9,
//!   "public_repos": 8
//! }
//! ```

pub mod user;

pub use user::*;
