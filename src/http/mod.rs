//! HTTP server module.
//!
//! Plain HTTP listener with graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
