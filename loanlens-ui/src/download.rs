//! Browser download host
//!
//! Object-URL primitives behind the core template download.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, Url};

use loanlens::download::{DownloadError, ObjectUrls};
use loanlens::TemplateFile;

use crate::api::{js_error, to_blob};

/// Saves files through a temporary `<a download>` link
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloads;

impl ObjectUrls for BrowserDownloads {
    fn create_object_url(&self, file: &TemplateFile) -> Result<String, DownloadError> {
        let blob = to_blob(&file.bytes, Some(&file.content_type))
            .map_err(|e| DownloadError::CreateUrl(js_error(e)))?;
        Url::create_object_url_with_blob(&blob).map_err(|e| DownloadError::CreateUrl(js_error(e)))
    }

    fn revoke_object_url(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            tracing::warn!("Failed to revoke object URL: {}", js_error(e));
        }
    }

    fn trigger_download(&self, url: &str, filename: &str) -> Result<(), DownloadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DownloadError::Trigger("no document".to_string()))?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| DownloadError::Trigger(js_error(e)))?
            .dyn_into()
            .map_err(|_| DownloadError::Trigger("not an anchor element".to_string()))?;

        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.click();
        Ok(())
    }
}
