//! Login and logout against the external API.

use serde::{Deserialize, Serialize};
use store::User;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::HttpTransport;
use crate::session::SessionContext;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Exchange credentials for a session. On success the token and a user
/// snapshot are persisted through the client's session context.
pub async fn login<T: HttpTransport>(
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let response: LoginResponse = client
        .post("/auth/login", &LoginRequest { email, password })
        .await?;
    let snapshot = serde_json::to_string(&response.user).unwrap_or_default();
    client.session().establish(&response.token, &snapshot);
    tracing::info!("session established for {}", response.user.email);
    Ok(response.user)
}

/// Voluntary logout. Clears the stored session; navigation is the caller's
/// concern.
pub fn logout(session: &SessionContext) {
    session.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::http::QueueTransport;
    use crate::session::MemoryBackend;
    use std::sync::Arc;

    #[tokio::test]
    async fn successful_login_establishes_the_session() {
        let transport = QueueTransport::new();
        transport.push_response(
            200,
            r#"{"token":"tok-7","user":{"_id":"u1","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","role":"admin","isActive":true}}"#,
        );
        let backend = Arc::new(MemoryBackend::new());
        let session = Arc::new(SessionContext::new(backend.clone()));
        let client = ApiClient::new(
            ApiConfig::with_base_url("http://api.test"),
            session.clone(),
            transport.clone(),
        );

        let user = login(&client, "ada@example.com", "hunter2").await.unwrap();

        assert_eq!(user.id, "u1");
        assert_eq!(session.token().as_deref(), Some("tok-7"));
        assert!(backend.snapshot().unwrap().contains(r#""_id":"u1""#));
        let body = transport.sent()[0].body.as_ref().unwrap().clone();
        assert_eq!(
            body,
            serde_json::json!({"email": "ada@example.com", "password": "hunter2"})
        );
    }

    #[tokio::test]
    async fn failed_login_leaves_the_session_empty() {
        let transport = QueueTransport::new();
        transport.push_response(400, r#"{"message":"Invalid credentials"}"#);
        let session = Arc::new(SessionContext::new(MemoryBackend::new()));
        let client = ApiClient::new(
            ApiConfig::with_base_url("http://api.test"),
            session.clone(),
            transport,
        );

        let result = login(&client, "ada@example.com", "wrong").await;

        assert!(result.is_err());
        assert_eq!(session.token(), None);
    }
}
