use crate::config::ServerConfig;
use crate::upstream::{MediaResolver, TikwmClient};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Upstream resolver handle. Behind a trait object so tests can swap in
    /// a stub without touching the network.
    pub resolver: Arc<dyn MediaResolver>,
}

impl AppState {
    /// Create state backed by the real TikWM client
    pub fn new(config: ServerConfig) -> Self {
        let resolver = Arc::new(TikwmClient::new(config.upstream_base_url.clone()));
        Self {
            config: Arc::new(config),
            resolver,
        }
    }

    /// Create state with an explicit resolver (used by tests)
    pub fn with_resolver(config: ServerConfig, resolver: Arc<dyn MediaResolver>) -> Self {
        Self {
            config: Arc::new(config),
            resolver,
        }
    }
}
