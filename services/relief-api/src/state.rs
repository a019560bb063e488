use std::sync::Arc;

use relief_store::DatasetStore;

use crate::config::AppConfig;

pub type SharedState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub cfg: AppConfig,
}

impl AppState {
    pub fn new(store: DatasetStore, cfg: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            cfg,
        }
    }
}
