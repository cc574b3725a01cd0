//! Image upload service.
//!
//! Objects are stored at `<campaign_id>/<unix_millis>_<filename>` and always
//! overwrite an existing object at the same path. The returned public URL is
//! what the browser stores as an image injectable's value.

use std::time::{SystemTime, UNIX_EPOCH};

use records::{UploadedImage, Uuid};
use tracing::info;

use super::ServiceError;
use crate::supabase::ObjectStore;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

/// Build the storage path for an upload.
///
/// Only the final component of `filename` is kept, so a browser-supplied
/// name cannot escape the campaign's folder.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidUpload`] if no file name remains.
pub fn storage_path(campaign_id: Uuid, millis: i64, filename: &str) -> Result<String, ServiceError> {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() || name == "." || name == ".." {
        return Err(ServiceError::InvalidUpload("file name is required".to_owned()));
    }
    Ok(format!("{campaign_id}/{millis}_{name}"))
}

/// Upload one image for a campaign and resolve its public URL.
///
/// # Errors
///
/// Returns [`ServiceError::InvalidUpload`] for a missing file name, or a
/// backend error if the upload fails.
pub async fn upload_image(
    store: &dyn ObjectStore,
    campaign_id: Uuid,
    filename: &str,
    content_type: Option<&str>,
    bytes: Vec<u8>,
) -> Result<UploadedImage, ServiceError> {
    let path = storage_path(campaign_id, now_millis(), filename)?;
    let size = bytes.len();
    store.upload(&path, bytes, content_type).await?;
    let url = store.public_url(&path)?;
    info!(%campaign_id, %path, size, "image uploaded");
    Ok(UploadedImage { url })
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
