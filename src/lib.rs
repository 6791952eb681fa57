//! fibload: a single-core CPU load generator served over HTTP.
//!
//! `GET /calculate` runs a deliberately naive recursive Fibonacci(36) and
//! reports the value and how long it took. The process runs on a one-worker
//! runtime so concurrent requests compete for a single core.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod model;
pub mod routes;
pub mod runtime;
pub mod state;
pub mod workload;

pub use error::AppError;
pub use model::CalculationResponse;
pub use routes::create_router;
pub use state::AppState;
pub use workload::{fib, Workload};
