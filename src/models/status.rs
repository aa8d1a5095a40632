use serde::Serialize;

use crate::config::AppConfig;

#[derive(Debug, Serialize)]
pub struct ZoomStatus {
    pub configured: bool,
    pub missing: Vec<&'static str>,
    pub allowed_origin: String,
}

impl ZoomStatus {
    /// Static check of the loaded configuration. Never contacts Zoom.
    pub fn from_config(config: &AppConfig) -> Self {
        let missing = config.zoom.missing();
        Self {
            configured: missing.is_empty(),
            missing,
            allowed_origin: config.frontend_url.clone(),
        }
    }
}
