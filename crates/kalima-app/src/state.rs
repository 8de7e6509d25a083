use std::sync::Arc;

use kalima_config::Config;
use kalima_core::language::LanguageProcessor;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub processor: Arc<dyn LanguageProcessor>,
}

impl AppState {
    pub fn new(config: Config, processor: Arc<dyn LanguageProcessor>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            processor,
        }
    }
}
