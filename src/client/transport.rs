//! HTTP transport seam.
//!
//! The client only needs "send one request, get status and bytes back", so
//! native and browser builds plug in their own HTTP stack behind [`Transport`].

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::model::UploadFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single-file multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file: UploadFile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// Serialized JSON, sent as `application/json`
    Json(Vec<u8>),
    Multipart(FilePart),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json<B: Serialize + ?Sized>(
        url: impl Into<String>,
        body: &B,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            method: Method::Post,
            url: url.into(),
            body: RequestBody::Json(serde_json::to_vec(body)?),
        })
    }

    pub fn post_file(url: impl Into<String>, field: impl Into<String>, file: UploadFile) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: RequestBody::Multipart(FilePart {
                field: field.into(),
                file,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase, e.g. "Bad Request"; may be empty
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Failure below HTTP: connection refused, DNS, CORS, malformed request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Sends one HTTP request. Implementations must not retry.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}
