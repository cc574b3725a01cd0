//! Object storage URL construction.
//!
//! Object paths are split on `/` and each segment is percent-encoded, so
//! original file names with spaces or non-ASCII characters survive intact.

use reqwest::Url;

use super::types::BackendError;

/// `<base>/storage/v1/object/<bucket>/<path>`, the upload endpoint.
pub fn upload_url(base: &str, bucket: &str, path: &str) -> Result<Url, BackendError> {
    object_url(base, &["storage", "v1", "object", bucket], path)
}

/// `<base>/storage/v1/object/public/<bucket>/<path>`, the public read URL.
pub fn public_url(base: &str, bucket: &str, path: &str) -> Result<Url, BackendError> {
    object_url(base, &["storage", "v1", "object", "public", bucket], path)
}

fn object_url(base: &str, prefix: &[&str], path: &str) -> Result<Url, BackendError> {
    let mut url = Url::parse(base).map_err(|e| BackendError::ConfigParse(format!("invalid base url '{base}': {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| BackendError::ConfigParse(format!("base url '{base}' cannot carry a path")))?;
        segments.pop_if_empty();
        segments.extend(prefix);
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
