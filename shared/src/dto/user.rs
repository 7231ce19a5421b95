//! # User Profile DTOs
//!
//! Response body of the GitHub users endpoint.

use serde::{Deserialize, Serialize};

/// GitHub user profile as returned by `GET /users/{login}`.
///
/// Only `login` and `html_url` are guaranteed by the API; every other
/// descriptive field may be `null` or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Personal website. The API sends `""` rather than `null` when unset.
    #[serde(default)]
    pub blog: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub public_repos: u32,
}
