//! HTTP transport abstraction.
//!
//! [`HttpTransport`] is the seam between [`crate::client::ApiClient`] and the
//! network: the browser build sends real `fetch` requests through
//! [`FetchTransport`], while tests and native tooling drive the client with
//! [`QueueTransport`]'s canned responses. Transport errors mean "no response
//! at all"; HTTP error statuses resolve `Ok` and are interpreted by the
//! client.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential, attached when a session token exists.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}

/// Browser transport over `fetch`.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        use gloo_net::http::Request;

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| format!("request build error: {e}"))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| format!("network error: {e}"))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

/// In-memory transport serving canned responses, for tests and native
/// tooling. Records every request it is asked to send.
#[derive(Clone, Debug, Default)]
pub struct QueueTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, String>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl QueueTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse {
                status,
                body: body.to_string(),
            }));
    }

    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// Requests sent so far, oldest first.
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl HttpTransport for QueueTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".to_string()))
    }
}
