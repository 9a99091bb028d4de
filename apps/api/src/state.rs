use std::sync::Arc;

use crate::config::Config;
use crate::resumes::{JsonFileMirror, ResumeStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-lifetime resume map; the only mutable state in the service.
    pub store: Arc<ResumeStore>,
}

impl AppState {
    /// Wires a store that mirrors into `config.resumes_dir`.
    pub fn from_config(config: Config) -> Self {
        let mirror = Arc::new(JsonFileMirror::new(config.resumes_dir.clone()));
        let store = Arc::new(ResumeStore::new(mirror, config.id_strategy));
        Self { config, store }
    }
}
