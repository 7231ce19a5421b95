//! Async task lifecycle tracking for the screen's background work

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::task::JoinHandle;

/// Monotonic task id source
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Tasks spawned and not yet finished or aborted
static ACTIVE_TASKS: AtomicU64 = AtomicU64::new(0);

/// Tasks slower than this are logged as potential hangs
const SLOW_TASK_SECS: u64 = 30;

/// Get current number of active tasks
pub fn active_task_count() -> u64 {
    ACTIVE_TASKS.load(Ordering::Relaxed)
}

/// Decrements the active counter however the task ends, abort included.
struct ActiveGuard {
    name: &'static str,
    task_id: u64,
    start: Instant,
    completed: bool,
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE_TASKS.fetch_sub(1, Ordering::Relaxed);
        if !self.completed {
            tracing::debug!(
                task = %self.name,
                task_id = self.task_id,
                duration_ms = self.start.elapsed().as_millis(),
                "Task dropped before completion"
            );
        }
    }
}

/// Spawn an instrumented async task with lifecycle tracking
///
/// # Arguments
///
/// * `name` - Task name for logging (e.g., "profile_fetch", "primary_image_load")
/// * `future` - The async task to execute
///
/// # Example
///
/// ```rust,ignore
/// spawn_tracked("profile_fetch", async move {
///     service.fetch_user(&login).await
/// });
/// ```
pub fn spawn_tracked<F>(name: &'static str, future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task_id = NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed);
    ACTIVE_TASKS.fetch_add(1, Ordering::Relaxed);
    let start = Instant::now();

    tracing::info!(
        task = %name,
        task_id = task_id,
        "Task spawned"
    );

    let mut guard = ActiveGuard {
        name,
        task_id,
        start,
        completed: false,
    };

    tokio::spawn(async move {
        let result = future.await;
        let duration = start.elapsed();
        guard.completed = true;

        tracing::info!(
            task = %name,
            task_id = task_id,
            duration_ms = duration.as_millis(),
            "Task completed"
        );

        if duration.as_secs() > SLOW_TASK_SECS {
            tracing::warn!(
                task = %name,
                task_id = task_id,
                duration_ms = duration.as_millis(),
                "Task took very long (potential hang)"
            );
        }

        drop(guard);
        result
    })
}
