//! Tokio runtime construction.
//!
//! The process limits itself to a single logical CPU by building a runtime
//! with exactly `MAX_PARALLELISM` worker threads and an equally small blocking
//! pool. Request handlers compute inline, so concurrent calculations queue up
//! behind each other on that one worker instead of running in parallel.

use tokio::runtime::{Builder, Runtime};

use crate::config::MAX_PARALLELISM;

/// Worker thread name prefix
pub const THREAD_NAME: &str = "fibload-worker";

/// Build the process-wide runtime, capped at `MAX_PARALLELISM` workers.
pub fn build_runtime() -> std::io::Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(MAX_PARALLELISM)
        .max_blocking_threads(MAX_PARALLELISM)
        .thread_name(THREAD_NAME)
        .enable_io()
        .enable_time()
        .build()
}
