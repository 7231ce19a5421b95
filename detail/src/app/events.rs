//! # Screen Events
//!
//! Results of async work, delivered to the thread that owns the screen.

use crate::app::state::{Pipeline, ProfileEntity, TransientMessage};
use crate::services::image::{LoadedImage, RequestOptions};

/// Async results sent to the owning thread.
#[derive(Debug, Clone)]
pub enum DetailEvent {
    /// An image pipeline finished (exactly once per started load)
    ImageLoaded {
        pipeline: Pipeline,
        /// Per-pipeline load counter, starting at 1
        generation: u64,
        source: String,
        /// Options the load was started with; carries the show transition
        options: RequestOptions,
        result: Result<LoadedImage, String>,
    },
    /// The profile slot received a value
    UserChanged(ProfileEntity),
    /// The message slot received a value
    MessagePosted(TransientMessage),
}
