//! User endpoints.

use store::{CollectionPage, FetchParams, NewUser, User, UserUpdate};

use crate::client::ApiClient;
use crate::envelope::UsersEnvelope;
use crate::error::ApiError;
use crate::http::HttpTransport;

pub async fn fetch_users<T: HttpTransport>(
    client: &ApiClient<T>,
    params: &FetchParams,
) -> Result<CollectionPage<User>, ApiError> {
    let envelope: UsersEnvelope = client.get(&format!("/users?{}", params.to_query())).await?;
    Ok(envelope.into_page())
}

pub async fn fetch_user<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<User, ApiError> {
    client.get(&format!("/users/{id}")).await
}

pub async fn create_user<T: HttpTransport>(
    client: &ApiClient<T>,
    user: &NewUser,
) -> Result<User, ApiError> {
    client.post("/users", user).await
}

pub async fn update_user<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
    changes: &UserUpdate,
) -> Result<User, ApiError> {
    client.put(&format!("/users/{id}"), changes).await
}

/// Deletes the user and returns the id, the value the delete mark carries.
pub async fn delete_user<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<String, ApiError> {
    let _: serde_json::Value = client.delete(&format!("/users/{id}")).await?;
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::http::{Method, QueueTransport};
    use crate::session::{MemoryBackend, SessionContext};
    use std::sync::Arc;

    fn client(transport: QueueTransport) -> ApiClient<QueueTransport> {
        ApiClient::new(
            ApiConfig::with_base_url("http://api.test"),
            Arc::new(SessionContext::new(MemoryBackend::new())),
            transport,
        )
    }

    #[tokio::test]
    async fn fetch_serializes_params_into_the_query_string() {
        let transport = QueueTransport::new();
        transport.push_response(
            200,
            r#"{"data":{"users":[],"pagination":{"total":0,"page":2,"limit":25,"pages":0}}}"#,
        );
        let client = client(transport.clone());

        let mut params = FetchParams {
            page: 2,
            page_size: 25,
            search: "ada".to_string(),
            ..FetchParams::default()
        };
        params
            .filters
            .insert("role".to_string(), "admin".to_string());
        let page = fetch_users(&client, &params).await.unwrap();

        assert_eq!(
            transport.sent()[0].url,
            "http://api.test/users?page=2&pageSize=25&search=ada&role=admin"
        );
        assert_eq!(page.pagination.page_size, 25);
    }

    #[tokio::test]
    async fn create_posts_the_draft_payload() {
        let transport = QueueTransport::new();
        transport.push_response(
            200,
            r#"{"_id":"u9","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","role":"admin","isActive":true}"#,
        );
        let client = client(transport.clone());

        let draft = NewUser {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Some(store::UserRole::Admin),
            is_active: true,
            password: "hunter2".to_string(),
        };
        let created = create_user(&client, &draft).await.unwrap();

        let sent = &transport.sent()[0];
        assert_eq!(sent.method, Method::Post);
        let body = sent.body.as_ref().unwrap();
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["password"], "hunter2");
        assert_eq!(created.id, "u9");
    }

    #[tokio::test]
    async fn delete_returns_the_id_for_the_mark() {
        let transport = QueueTransport::new();
        transport.push_response(200, r#"{"message":"deleted"}"#);
        let client = client(transport.clone());

        let deleted = delete_user(&client, "u1").await.unwrap();

        assert_eq!(deleted, "u1");
        assert_eq!(transport.sent()[0].method, Method::Delete);
        assert_eq!(transport.sent()[0].url, "http://api.test/users/u1");
    }
}
