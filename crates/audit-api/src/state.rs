use std::sync::Arc;

use crate::config::ApiConfig;

/// Shared application state, injected into route handlers via Axum state.
///
/// Scoring is stateless; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
