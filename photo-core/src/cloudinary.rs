use async_trait::async_trait;
use serde_json::Value;

use crate::asset::AssetMetadata;
use crate::config::Credentials;
use crate::error::RemoteError;
use crate::signing;

/// Result of looking up an asset's metadata.
pub type FetchResult = Result<AssetMetadata, RemoteError>;

/// Result of asking the service to destroy an asset.
pub type DeleteResult = Result<(), RemoteError>;

const DEFAULT_REJECTION: &str = "Could not delete";

/// Remote asset storage as seen by the delete workflow.
#[async_trait]
pub trait AssetService: Send + Sync {
    /// Look up an asset including its custom context.
    async fn fetch_metadata(&self, public_id: &str) -> FetchResult;

    /// Permanently remove an asset.
    async fn destroy(&self, public_id: &str) -> DeleteResult;
}

#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    credentials: Credentials,
    api_base: String,
}

impl CloudinaryClient {
    pub fn new(credentials: Credentials, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            api_base: api_base.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.credentials.cloud_name,
            path
        )
    }

    /// Fetch an image resource with its context, via the Admin API.
    ///
    /// The HTTP status is not checked: error documents simply carry no
    /// context, which the caller treats as a missing owner tag.
    pub async fn fetch_resource(&self, public_id: &str) -> FetchResult {
        let url = self.endpoint(&format!(
            "resources/image/upload/{}",
            urlencoding::encode(public_id)
        ));
        tracing::debug!("Cloudinary GET: url={}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("context", "true")])
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        let metadata = AssetMetadata::from_value(&value);

        if let Some(message) = &metadata.remote_error {
            tracing::warn!("Cloudinary lookup of {} answered {}: {}", public_id, status, message);
        } else {
            tracing::debug!("Cloudinary GET success: public_id={}, status={}", public_id, status);
        }

        Ok(metadata)
    }

    /// Destroy an image, signing the call with the current time.
    pub async fn destroy_image(&self, public_id: &str) -> DeleteResult {
        self.destroy_image_at(public_id, signing::unix_timestamp()).await
    }

    /// Destroy an image with an explicit signing timestamp.
    pub async fn destroy_image_at(&self, public_id: &str, timestamp: i64) -> DeleteResult {
        let url = self.endpoint("image/destroy");
        let signature = signing::sign_destroy(public_id, timestamp, &self.credentials.api_secret);
        tracing::debug!("Cloudinary destroy: public_id={}, timestamp={}", public_id, timestamp);

        let timestamp = timestamp.to_string();
        let response = self
            .http
            .post(&url)
            .form(&[
                ("public_id", public_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.credentials.api_key.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;

        match value.get("result").and_then(Value::as_str) {
            Some("ok") => {
                tracing::debug!("Cloudinary destroy success: public_id={}", public_id);
                Ok(())
            }
            Some(result) if !result.is_empty() => Err(RemoteError::Rejected(result.to_owned())),
            _ => Err(RemoteError::Rejected(DEFAULT_REJECTION.to_string())),
        }
    }
}

#[async_trait]
impl AssetService for CloudinaryClient {
    async fn fetch_metadata(&self, public_id: &str) -> FetchResult {
        self.fetch_resource(public_id).await
    }

    async fn destroy(&self, public_id: &str) -> DeleteResult {
        self.destroy_image(public_id).await
    }
}
