use anyhow::Result;
use photo_core::{delete_authorized_asset, CloudinaryClient, DeleteRequest};

pub async fn execute(client: CloudinaryClient, public_id: String, device_id: String) -> Result<()> {
    tracing::info!("Deleting photo: {}", public_id);

    let request = DeleteRequest::new(public_id, device_id)?;

    // Same ownership check the web endpoint applies
    delete_authorized_asset(&client, &request)
        .await
        .into_result()?;

    println!("✓ Photo deleted successfully: {}", request.public_id);

    Ok(())
}
