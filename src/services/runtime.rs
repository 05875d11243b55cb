//! Tokio Runtime Bridge
//!
//! Enrichment pipelines run on a shared tokio runtime so the interactive
//! session never blocks on enumeration. The hosting application may drive
//! its own executor; this module provides a process-wide runtime the
//! pipelines can always be spawned onto.

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached enrichment task.
///
/// The task runs independently and is never awaited; it reports back
/// through the enrichment channel it was given.
pub fn spawn_pipeline<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning enrichment pipeline: {name}");
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Enrichment pipeline completed: {name}");
    });
}

/// Block on a future synchronously (mainly for host startup and tests)
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_pipeline_runs_to_completion() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        spawn_pipeline("test", async move {
            flag_clone.store(true, Ordering::SeqCst);
        });

        // Give the task time to complete
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert!(flag.load(Ordering::SeqCst));
    }
}
