//! # Profile Detail Screen - Library Root
//!
//! The orchestration core of a user profile detail screen. Given a login and an
//! avatar URL, the screen loads the avatar, fetches the full profile, renders it
//! as an ordered list of attribute rows and finally loads a contribution chart.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              detail (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  async-channel - Task results back to the owner thread │
//! │  Reqwest       - HTTP client                           │
//! │  image / resvg - Avatar and chart decoding             │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP (JSON)                  │ HTTP (PNG / SVG)
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  GitHub REST    │          │  Avatar + chart hosts   │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: The screen controller ([`DetailScreen`]), its view model and the
//!   image load coordinators
//! - **core**: Error type, collaborator traits, observable slots, configuration
//! - **services**: GitHub API client and HTTP image loader
//! - **ui**: Console presenter and row icons
//! - **debug**: Logging initialisation and task tracking
//! - **utils**: Input validation
//!
//! ## Load Order
//!
//! The three asynchronous operations run in a strict partial order:
//!
//! ```text
//! on_create ──► primary image ──(success | failure)──► observe + fetch profile
//!                                                          │
//!                                  rows rendered ◄─────────┘
//!                                        │
//!                                        └──► secondary (chart) image ──► loading off
//! ```
//!
//! Async tasks never touch the presenter. Their results travel as
//! [`DetailEvent`]s through one channel and are applied on the thread that
//! owns the screen, via [`DetailScreen::on_tick`] or [`DetailScreen::pump`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use detail::app::{DetailScreen, DetailViewModel};
//! use detail::core::DetailConfig;
//! use detail::services::{api::ApiClient, image::HttpImageLoader};
//! use detail::ui::console::ConsolePresenter;
//!
//! # async fn run() {
//! let config = DetailConfig::from_env();
//! let view_model = DetailViewModel::new(Arc::new(ApiClient::from_config(&config)), &config.user_key);
//! let loader = Arc::new(HttpImageLoader::from_config(&config));
//! let mut screen = DetailScreen::new(view_model, loader, Box::new(ConsolePresenter::stdout()), &config.chart_url);
//!
//! screen.on_create("octocat", "https://avatars.githubusercontent.com/u/583231").ok();
//! while !screen.is_settled() {
//!     screen.pump().await;
//! }
//! screen.on_close();
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p detail
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{DetailEvent, DetailScreen, DetailState, DetailViewModel, ScreenPhase};
pub use crate::core::{DetailError, Result};
