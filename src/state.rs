//! Shared application state for request handlers.

use crate::config::AppConfig;
use crate::health::TimestampFormat;

/// Immutable per-process context handed to every request.
///
/// Holds only `Copy` settings, so cloning per request is free and no
/// synchronization is needed between concurrent handlers.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppState {
    pub timestamp_format: TimestampFormat,
}

impl AppState {
    /// Creates the application state from the loaded configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            timestamp_format: config.health.timestamp,
        }
    }
}
