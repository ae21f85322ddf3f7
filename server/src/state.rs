use std::sync::Arc;

use chrono::{DateTime, Utc};
use shinobi_shared::ApiConfig;

use crate::config::{api_config, static_dir};

#[derive(Clone)]
pub struct AppState {
    /// Catalog location handed to the client at boot.
    pub api_config: Arc<ApiConfig>,
    /// Directory holding the built client bundle.
    pub static_dir: Arc<str>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(api_config: ApiConfig, static_dir: impl Into<Arc<str>>) -> Self {
        Self {
            api_config: Arc::new(api_config),
            static_dir: static_dir.into(),
            started_at: Utc::now(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(api_config(), static_dir())
    }
}
