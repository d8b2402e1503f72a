// Application state module
// Holds the startup configuration shared by every connection

use std::path::Path;

use super::types::Config;

/// Application state
///
/// Built once at startup and never mutated afterwards.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Identifier file read by the `/data` handler
    pub fn data_file(&self) -> &Path {
        &self.config.data.file
    }

    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }
}
