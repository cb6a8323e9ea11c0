//! HTTP server module.
//!
//! The server includes:
//! - Plain HTTP listener on the configured host and port
//! - Graceful shutdown on SIGTERM/SIGINT with a bounded drain period
//! - A `Handle` seam so callers can discover the bound address and stop the server

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
