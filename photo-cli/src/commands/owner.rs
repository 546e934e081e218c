use anyhow::Result;
use photo_core::CloudinaryClient;

pub async fn execute(client: CloudinaryClient, public_id: String) -> Result<()> {
    let metadata = client.fetch_resource(&public_id).await?;

    if let Some(message) = &metadata.remote_error {
        anyhow::bail!("Lookup failed for {public_id}: {message}");
    }

    // Cloudinary echoes the canonical id
    let public_id = metadata.public_id.as_deref().unwrap_or(&public_id);

    let owner = metadata.owner_tag();
    if owner.is_empty() {
        println!("{public_id}: no owner device recorded");
    } else {
        println!("{public_id}: owned by device {owner}");
        if owner != metadata.raw_owner_tag() {
            println!("  stored as: {}", metadata.raw_owner_tag());
        }
    }

    Ok(())
}
