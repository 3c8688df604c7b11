//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state available to all request handlers.
///
/// The resolver keeps no cross-request mutable state; every request reads
/// the configuration and builds its own response.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
