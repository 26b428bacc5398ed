//! Template Download
//!
//! Saving the CSV template means turning the fetched bytes into a temporary
//! object URL, pointing a download at it, and revoking it again. The host
//! (a browser, or a test double) supplies those three primitives through
//! [`ObjectUrls`]; [`ObjectUrlGuard`] makes sure every created URL is
//! revoked exactly once, whether the download starts or not.

use thiserror::Error;

use crate::client::{ApiClient, RequestError, Transport};
use crate::model::TemplateFile;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DownloadError {
    #[error("Could not create a download link: {0}")]
    CreateUrl(String),

    #[error("Could not start the download: {0}")]
    Trigger(String),
}

/// Host primitives for saving a file
pub trait ObjectUrls {
    fn create_object_url(&self, file: &TemplateFile) -> Result<String, DownloadError>;

    fn revoke_object_url(&self, url: &str);

    fn trigger_download(&self, url: &str, filename: &str) -> Result<(), DownloadError>;
}

/// Object URL that is revoked when dropped
pub struct ObjectUrlGuard<'a, H: ObjectUrls + ?Sized> {
    host: &'a H,
    url: String,
}

impl<'a, H: ObjectUrls + ?Sized> ObjectUrlGuard<'a, H> {
    pub fn create(host: &'a H, file: &TemplateFile) -> Result<Self, DownloadError> {
        let url = host.create_object_url(file)?;
        Ok(Self { host, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<H: ObjectUrls + ?Sized> Drop for ObjectUrlGuard<'_, H> {
    fn drop(&mut self) {
        self.host.revoke_object_url(&self.url);
    }
}

/// Offer `file` to the user as `filename`
pub fn save_file<H: ObjectUrls + ?Sized>(
    host: &H,
    file: &TemplateFile,
    filename: &str,
) -> Result<(), DownloadError> {
    let guard = ObjectUrlGuard::create(host, file)?;
    host.trigger_download(guard.url(), filename)
}

/// Fetch the batch template and save it under the configured filename.
///
/// Every failure, remote or local, is reported as
/// [`RequestError::TemplateUnavailable`]. Nothing is created on the host if
/// the fetch fails.
pub async fn download_template<T, H>(client: &ApiClient<T>, host: &H) -> Result<(), RequestError>
where
    T: Transport,
    H: ObjectUrls + ?Sized,
{
    let template = client.fetch_template().await?;
    let filename = &client.config().template_filename;

    save_file(host, &template, filename).map_err(|e| {
        tracing::warn!(%filename, "Template download failed: {}", e);
        RequestError::TemplateUnavailable
    })?;

    tracing::debug!(%filename, bytes = template.bytes.len(), "Template downloaded");
    Ok(())
}
