//! # Logging and Task Tracking
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/detail.log` (daily rotation)
//! - **Async task tracking**: Spawn/complete logging with durations, active task count
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `detail=debug,info`)
//! - `DETAIL_LOG_DIR`: Log directory (default: `logs`)
//! - `DETAIL_LOG_STDERR`: Mirror logs on stderr (1=on, 0=off)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use task_tracker::{active_task_count, spawn_tracked};

/// Initialize logging. Keep the returned guard alive for the process lifetime.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    init_logger()
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
