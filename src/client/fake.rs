//! In-memory transport for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

/// Replies from per-path queues and records every request it sees.
///
/// A path with no queued reply answers 404.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, path: &str, response: HttpResponse) {
        self.push(path, Ok(response));
    }

    pub(crate) fn respond_json(&self, path: &str, status: u16, body: serde_json::Value) {
        self.respond(
            path,
            HttpResponse {
                status,
                status_text: String::new(),
                content_type: Some("application/json".to_string()),
                body: body.to_string().into_bytes(),
            },
        );
    }

    pub(crate) fn respond_text(&self, path: &str, status: u16, body: &str) {
        self.respond(
            path,
            HttpResponse {
                status,
                status_text: String::new(),
                content_type: Some("text/plain".to_string()),
                body: body.as_bytes().to_vec(),
            },
        );
    }

    pub(crate) fn fail(&self, path: &str, message: &str) {
        self.push(path, Err(TransportError::Network(message.to_string())));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    fn push(&self, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());

        let mut replies = self.replies.borrow_mut();
        let queued = replies
            .iter_mut()
            .find(|(path, _)| request.url.ends_with(path.as_str()))
            .and_then(|(_, queue)| queue.pop_front());

        queued.unwrap_or_else(|| {
            Ok(HttpResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                content_type: None,
                body: Vec::new(),
            })
        })
    }
}
