use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use photo_core::{delete_authorized_asset, DeleteError, DeleteRequest, ErrorKind};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON error response for a failed delete.
#[derive(Debug)]
pub struct ApiError(pub DeleteError);

impl From<DeleteError> for ApiError {
    fn from(e: DeleteError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0.kind() {
            ErrorKind::BadRequest => tracing::debug!("Rejected delete request: {}", self.0),
            ErrorKind::Forbidden => tracing::warn!("Refused delete request: {}", self.0),
            ErrorKind::Configuration | ErrorKind::Remote => {
                tracing::error!("Delete request failed: {:?}", self.0)
            }
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (self.0.status(), Json(body)).into_response()
    }
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Delete a photo on behalf of the device that uploaded it.
///
/// Accepts any method so that non-POST requests get the JSON 405 body.
pub async fn delete_photo(
    method: Method,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Deleted>, ApiError> {
    if method != Method::POST {
        return Err(DeleteError::MethodNotAllowed.into());
    }

    let request = DeleteRequest::from_json(&body)?;
    tracing::info!("Delete request: public_id={}", request.public_id);

    let assets = state
        .assets
        .as_ref()
        .map_err(|e| DeleteError::from(e.clone()))?;

    delete_authorized_asset(&**assets, &request)
        .await
        .into_result()?;

    Ok(Json(Deleted { success: true }))
}
