//! Application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use rollcall::Rollcall;

/// Shared application state.
///
/// Holds configuration only; every request works on its own copy of the data.
#[derive(Clone)]
pub struct AppState {
    /// The configured check pipeline.
    pub rollcall: Arc<Rollcall>,
    /// How long a single check may run before the request fails.
    pub request_timeout: Duration,
}

impl AppState {
    /// Create new application state.
    pub fn new(rollcall: Rollcall, request_timeout: Duration) -> Self {
        Self {
            rollcall: Arc::new(rollcall),
            request_timeout,
        }
    }
}
