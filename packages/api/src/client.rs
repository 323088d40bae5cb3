//! The authenticated HTTP client.
//!
//! [`ApiClient`] wraps a transport with the two cross-cutting behaviors every
//! call shares:
//!
//! 1. **Outbound**: when the session holds a token it is attached as a
//!    `Authorization: Bearer` credential; otherwise the request goes out
//!    unauthenticated.
//! 2. **Inbound**: error responses are decoded as `{ "message": ... }` and
//!    checked for the invalid-session signal. When it fires, the session is
//!    torn down *before* the error propagates — the caller still receives the
//!    original failure and surfaces it like any other.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{ApiRequest, ApiResponse, HttpTransport, Method};
use crate::session::SessionContext;

#[derive(Clone)]
pub struct ApiClient<T: HttpTransport> {
    config: ApiConfig,
    session: Arc<SessionContext>,
    transport: T,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(config: ApiConfig, session: Arc<SessionContext>, transport: T) -> Self {
        Self {
            config,
            session,
            transport,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, path, None).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            bearer: self.session.token(),
            body,
        };
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Network)?;

        if !response.ok() {
            let error = Self::status_error(&response);
            if error.is_invalid_session() {
                tracing::warn!(status = response.status, "invalid session response");
                self.session.invalidate();
            }
            return Err(error);
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn status_error(response: &ApiResponse) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();
        ApiError::Status {
            status: response.status,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::QueueTransport;
    use crate::session::{MemoryBackend, LOGIN_PATH};

    fn client_with(
        transport: QueueTransport,
    ) -> (ApiClient<QueueTransport>, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let session = Arc::new(SessionContext::new(backend.clone()));
        let client = ApiClient::new(
            ApiConfig::with_base_url("http://api.test"),
            session,
            transport,
        );
        (client, backend)
    }

    #[tokio::test]
    async fn attaches_the_bearer_token_when_present() {
        let transport = QueueTransport::new();
        transport.push_response(200, "{}");
        transport.push_response(200, "{}");
        let (client, _backend) = client_with(transport.clone());

        let _: serde_json::Value = client.get("/users/u1").await.unwrap();
        client.session().establish("tok-1", "{}");
        let _: serde_json::Value = client.get("/users/u1").await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[0].url, "http://api.test/users/u1");
        assert_eq!(sent[1].bearer.as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn unauthorized_tears_down_the_session_and_still_fails_the_call() {
        let transport = QueueTransport::new();
        transport.push_response(401, r#"{"message":"Unauthorized"}"#);
        let (client, backend) = client_with(transport);
        client.session().establish("tok-1", "{}");

        let result: Result<serde_json::Value, _> = client.get("/users").await;

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 401,
                message: "Unauthorized".to_string()
            })
        );
        assert_eq!(client.session().token(), None);
        assert_eq!(backend.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn concurrent_auth_failures_redirect_exactly_once() {
        let transport = QueueTransport::new();
        transport.push_response(401, r#"{"message":"Unauthorized"}"#);
        transport.push_response(400, r#"{"message":"Token expired"}"#);
        let (client, backend) = client_with(transport);
        client.session().establish("tok-1", "{}");

        let (first, second) = tokio::join!(
            client.get::<serde_json::Value>("/users"),
            client.get::<serde_json::Value>("/customers"),
        );

        assert!(first.is_err());
        assert!(second.is_err());
        assert_eq!(backend.redirects(), vec![LOGIN_PATH.to_string()]);
    }

    #[tokio::test]
    async fn token_mentions_trigger_teardown_even_without_a_401() {
        let transport = QueueTransport::new();
        transport.push_response(400, r#"{"message":"Invalid token signature"}"#);
        let (client, backend) = client_with(transport);
        client.session().establish("tok-1", "{}");

        let _ = client.get::<serde_json::Value>("/users").await;

        assert_eq!(client.session().token(), None);
        assert_eq!(backend.redirects().len(), 1);
    }

    #[tokio::test]
    async fn ordinary_server_errors_leave_the_session_alone() {
        let transport = QueueTransport::new();
        transport.push_response(500, r#"{"message":"boom"}"#);
        let (client, backend) = client_with(transport);
        client.session().establish("tok-1", "{}");

        let result: Result<serde_json::Value, _> = client.get("/users").await;

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 500,
                message: "boom".to_string()
            })
        );
        assert_eq!(client.session().token().as_deref(), Some("tok-1"));
        assert!(backend.redirects().is_empty());
    }

    #[tokio::test]
    async fn transport_failures_surface_as_network_errors() {
        let transport = QueueTransport::new();
        transport.push_error("connection refused");
        let (client, backend) = client_with(transport);

        let result: Result<serde_json::Value, _> = client.get("/users").await;

        assert_eq!(
            result,
            Err(ApiError::Network("connection refused".to_string()))
        );
        assert!(backend.redirects().is_empty());
    }

    #[tokio::test]
    async fn malformed_success_bodies_are_decode_errors() {
        let transport = QueueTransport::new();
        transport.push_response(200, "not json");
        let (client, _backend) = client_with(transport);

        let result: Result<serde_json::Value, _> = client.get("/users").await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
