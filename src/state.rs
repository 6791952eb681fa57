//! Shared application state for request handlers.

use crate::workload::Workload;

/// Per-router state. Holds no mutable data; every request computes its own
/// result from the fixed workload.
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub workload: Workload,
}

impl AppState {
    pub fn new(workload: Workload) -> Self {
        Self { workload }
    }
}
