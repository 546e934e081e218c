use serde_json::Value;

use crate::error::DeleteError;

/// A validated delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub public_id: String,
    pub device_id: String,
}

impl DeleteRequest {
    pub fn new(public_id: impl Into<String>, device_id: impl Into<String>) -> Result<Self, DeleteError> {
        let public_id = public_id.into();
        let device_id = device_id.into();

        if public_id.is_empty() || device_id.is_empty() {
            return Err(DeleteError::MissingParameter);
        }

        Ok(Self { public_id, device_id })
    }

    /// Parse a `{ "publicId": ..., "deviceId": ... }` body.
    ///
    /// Malformed JSON is `InvalidRequest`. A field that is absent, empty or
    /// not a string is `MissingParameter`.
    pub fn from_json(body: &[u8]) -> Result<Self, DeleteError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejecting malformed request body: {}", e);
            DeleteError::InvalidRequest
        })?;

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };

        Self::new(field("publicId"), field("deviceId"))
    }
}
