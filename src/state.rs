use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::transcoder::Transcoder;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub transcoder: Arc<dyn Transcoder>,
}

impl AppState {
    pub fn new(config: AppConfig, transcoder: Arc<dyn Transcoder>) -> Self {
        Self {
            config: Arc::new(config),
            transcoder,
        }
    }
}
