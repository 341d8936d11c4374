//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::dashboard::ViewState;
use crate::dataset::DatasetRegistry;

/// Shared application state for all handlers
pub struct AppState {
    /// Active dashboard section; written only by selection handlers
    pub view: RwLock<ViewState>,
    /// Static datasets
    pub registry: &'static DatasetRegistry,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state starting on the configured default section
    pub fn new(config: Config) -> Self {
        let view = ViewState::with_section(config.dashboard.default_section);
        Self {
            view: RwLock::new(view),
            registry: DatasetRegistry::global(),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
