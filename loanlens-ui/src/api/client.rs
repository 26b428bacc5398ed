//! Fetch Transport
//!
//! [`Transport`] implementation over `gloo-net`, used by every page through
//! the shared [`UiClient`].

use async_trait::async_trait;
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use loanlens::client::{FilePart, HttpRequest, HttpResponse, Method, RequestBody};
use loanlens::{ApiClient, Transport, TransportError};

/// Client type shared through the app context
pub type UiClient = ApiClient<FetchTransport>;

/// `fetch`-backed transport. No retries and no timeout: the browser decides
/// when a request has failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                builder
                    .header("Content-Type", "application/json")
                    .body(text)
            }
            // The browser sets the multipart boundary header itself
            RequestBody::Multipart(part) => builder.body(form_data(&part)?),
        }
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            status_text,
            content_type,
            body,
        })
    }
}

fn form_data(part: &FilePart) -> Result<FormData, TransportError> {
    let invalid = |e: JsValue| TransportError::InvalidRequest(js_error(e));

    let blob = to_blob(&part.file.bytes, part.file.content_type.as_deref()).map_err(invalid)?;
    let form = FormData::new().map_err(invalid)?;
    form.append_with_blob_and_filename(&part.field, &blob, &part.file.name)
        .map_err(invalid)?;
    Ok(form)
}

/// Wrap bytes in a `Blob`, typed when a content type is known
pub fn to_blob(bytes: &[u8], content_type: Option<&str>) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let mut options = BlobPropertyBag::new();
    if let Some(content_type) = content_type {
        options.type_(content_type);
    }
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// Readable text for a JS exception value
pub fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
