// Application state for HTTP handlers
use crate::application::env_service::EnvService;
use crate::application::stream_source::ImageStreamSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub env_service: EnvService,
    pub stream_source: Arc<dyn ImageStreamSource>,
}
