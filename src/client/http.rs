//! reqwest-backed transport for native hosts.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, TransportError};

/// [`Transport`] over a shared `reqwest::Client`.
///
/// The client is built without a timeout: a request resolves, fails, or is
/// abandoned by its caller.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.header(CONTENT_TYPE, "application/json").body(bytes),
            RequestBody::Multipart(part) => {
                let mut file_part = Part::bytes(part.file.bytes).file_name(part.file.name);
                if let Some(content_type) = part.file.content_type {
                    file_part = file_part
                        .mime_str(&content_type)
                        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
                }
                builder.multipart(Form::new().part(part.field, file_part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            content_type,
            body: body.to_vec(),
        })
    }
}
