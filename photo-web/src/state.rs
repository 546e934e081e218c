use std::sync::Arc;

use photo_core::{AssetService, CloudinaryClient, CloudinaryConfig, ConfigError};

#[derive(Clone)]
pub struct AppState {
    /// `Err` when credentials were missing at startup; every delete request
    /// then reports the configuration error.
    pub assets: Result<Arc<dyn AssetService>, ConfigError>,
}

impl AppState {
    pub fn new(config: &CloudinaryConfig) -> Self {
        let assets = config.credentials().map(|credentials| {
            Arc::new(CloudinaryClient::new(credentials, config.api_base.clone())) as Arc<dyn AssetService>
        });

        if let Err(e) = &assets {
            tracing::warn!("Delete endpoint will refuse requests: {}", e);
        }

        Self { assets }
    }

    pub fn with_service(service: Arc<dyn AssetService>) -> Self {
        Self { assets: Ok(service) }
    }
}
