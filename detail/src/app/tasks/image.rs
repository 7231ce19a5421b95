//! # Image Load Tasks
//!
//! One [`ImageLoadCoordinator`] per pipeline (avatar, chart). Each started load
//! sends exactly one [`DetailEvent::ImageLoaded`] unless it is cancelled first.
//! Loads are numbered so a consumer can tell the latest one from superseded ones.

use crate::app::events::DetailEvent;
use crate::app::state::Pipeline;
use crate::core::service::ImageLoader;
use crate::debug::spawn_tracked;
use crate::services::image::RequestOptions;
use async_channel::Sender;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Wraps one image pipeline with an exactly-once completion signal.
pub struct ImageLoadCoordinator {
    pipeline: Pipeline,
    loader: Arc<dyn ImageLoader>,
    in_flight: Vec<JoinHandle<()>>,
    generation: u64,
}

impl ImageLoadCoordinator {
    pub fn new(pipeline: Pipeline, loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            pipeline,
            loader,
            in_flight: Vec::new(),
            generation: 0,
        }
    }

    /// Begin loading `source` and return the load's generation. The outcome
    /// is sent on `event_tx`.
    ///
    /// A loader that panics is reported as a failure, so the outcome is still
    /// delivered exactly once. Redundant starts are not suppressed; every
    /// start reports its own outcome.
    pub fn start(&mut self, source: &str, options: RequestOptions, event_tx: Sender<DetailEvent>) -> u64 {
        self.in_flight.retain(|h| !h.is_finished());
        self.generation += 1;

        let pipeline = self.pipeline;
        let generation = self.generation;
        let loader = Arc::clone(&self.loader);
        let source = source.to_string();

        info!(pipeline = ?pipeline, generation, source = %source, "Starting image load");

        let handle = spawn_tracked(pipeline.task_name(), async move {
            let load_source = source.clone();
            let mut load = AbortOnDrop(tokio::spawn(async move {
                loader.load(&load_source, &options).await
            }));

            let result = match (&mut load.0).await {
                Ok(result) => result,
                Err(e) if e.is_cancelled() => return,
                Err(e) => Err(format!("Image loader panicked: {}", e)),
            };

            match &result {
                Ok(image) => debug!(
                    pipeline = ?pipeline,
                    width = image.width,
                    height = image.height,
                    "Image loaded"
                ),
                Err(e) => warn!(pipeline = ?pipeline, source = %source, error = %e, "Image load failed"),
            }

            // Receiver gone means the screen was torn down
            let _ = event_tx
                .send(DetailEvent::ImageLoaded {
                    pipeline,
                    generation,
                    source,
                    options,
                    result,
                })
                .await;
        });

        self.in_flight.push(handle);
        generation
    }

    /// Generation of the most recently started load, 0 before the first.
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }

    /// Abort every load that has not reported yet.
    pub fn cancel(&mut self) {
        for handle in self.in_flight.drain(..) {
            if !handle.is_finished() {
                debug!(pipeline = ?self.pipeline, "Aborting in-flight image load");
                handle.abort();
            }
        }
    }

    /// Loads started and not yet finished.
    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|h| !h.is_finished()).count()
    }
}

/// Aborts the wrapped task when the owning future is dropped.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Drop for ImageLoadCoordinator {
    fn drop(&mut self) {
        self.cancel();
    }
}
