//! Application State
//!
//! Shared, read-only state accessible by all handlers.
//! Wrapped in Arc for sharing across async tasks.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::pages::RenderContext;

/// Source of "today" for the weekly step sample
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Current local date
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(|| chrono::Local::now().date_naive()))
    }

    /// Create AppState with a fixed or custom date source
    pub fn with_clock(config: Config, clock: Clock) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Fresh context for one render pass
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.config.app.clone(), self.today())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
