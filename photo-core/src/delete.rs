use crate::asset::is_owner;
use crate::cloudinary::AssetService;
use crate::error::{DeleteError, RemoteError};
use crate::request::DeleteRequest;

/// How an authorized delete attempt ended.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    /// The asset carries no owner tag (or does not exist).
    MetadataMissing,
    /// The owner tag belongs to another device.
    Unauthorized,
    RemoteFailure(RemoteError),
}

impl DeleteOutcome {
    pub fn into_result(self) -> Result<(), DeleteError> {
        match self {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::MetadataMissing => Err(DeleteError::NoDeviceInfo),
            DeleteOutcome::Unauthorized => Err(DeleteError::NotAuthorized),
            DeleteOutcome::RemoteFailure(e) => Err(DeleteError::Remote(e)),
        }
    }
}

/// Delete `request.public_id` if its owner tag matches `request.device_id`.
///
/// Metadata is fetched first; the destroy call is only issued once the
/// owner check has passed, and at most once. Nothing is retried.
pub async fn delete_authorized_asset<S>(service: &S, request: &DeleteRequest) -> DeleteOutcome
where
    S: AssetService + ?Sized,
{
    let public_id = request.public_id.as_str();

    let metadata = match service.fetch_metadata(public_id).await {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::error!("Failed to fetch metadata for {}: {:?}", public_id, e);
            return DeleteOutcome::RemoteFailure(e);
        }
    };

    let owner_tag = metadata.owner_tag();
    if owner_tag.is_empty() {
        tracing::warn!("Refusing delete of {}: no owner tag", public_id);
        return DeleteOutcome::MetadataMissing;
    }

    if !is_owner(&owner_tag, &request.device_id) {
        tracing::warn!("Refusing delete of {}: device does not own it", public_id);
        return DeleteOutcome::Unauthorized;
    }

    match service.destroy(public_id).await {
        Ok(()) => {
            tracing::info!("Deleted photo {}", public_id);
            DeleteOutcome::Deleted
        }
        Err(e) => {
            tracing::error!("Failed to delete {}: {:?}", public_id, e);
            DeleteOutcome::RemoteFailure(e)
        }
    }
}
