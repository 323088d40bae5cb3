//! Customer endpoints.

use store::{CollectionPage, Customer, CustomerUpdate, FetchParams, NewCustomer};

use crate::client::ApiClient;
use crate::envelope::CustomersEnvelope;
use crate::error::ApiError;
use crate::http::HttpTransport;

pub async fn fetch_customers<T: HttpTransport>(
    client: &ApiClient<T>,
    params: &FetchParams,
) -> Result<CollectionPage<Customer>, ApiError> {
    let envelope: CustomersEnvelope = client
        .get(&format!("/customers?{}", params.to_query()))
        .await?;
    Ok(envelope.into_page())
}

pub async fn fetch_customer<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<Customer, ApiError> {
    client.get(&format!("/customers/{id}")).await
}

pub async fn create_customer<T: HttpTransport>(
    client: &ApiClient<T>,
    customer: &NewCustomer,
) -> Result<Customer, ApiError> {
    client.post("/customers", customer).await
}

pub async fn update_customer<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
    changes: &CustomerUpdate,
) -> Result<Customer, ApiError> {
    client.put(&format!("/customers/{id}"), changes).await
}

/// Deletes the customer and returns the id, the value the delete mark
/// carries.
pub async fn delete_customer<T: HttpTransport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<String, ApiError> {
    let _: serde_json::Value = client.delete(&format!("/customers/{id}")).await?;
    Ok(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::session::{MemoryBackend, SessionContext};
    use crate::http::QueueTransport;
    use std::sync::Arc;

    fn client(transport: QueueTransport) -> ApiClient<QueueTransport> {
        ApiClient::new(
            ApiConfig::with_base_url("http://api.test"),
            Arc::new(SessionContext::new(MemoryBackend::new())),
            transport,
        )
    }

    #[tokio::test]
    async fn fetch_normalizes_the_documented_envelope() {
        let transport = QueueTransport::new();
        transport.push_response(
            200,
            r#"{"data":{"customers":[{"_id":"c1","firstName":"Jo","lastName":"March","email":"jo@example.com"}],"pagination":{"total":23,"page":1,"limit":10,"pages":3}}}"#,
        );
        let client = client(transport.clone());

        let page = fetch_customers(&client, &FetchParams::default())
            .await
            .unwrap();

        assert_eq!(
            transport.sent()[0].url,
            "http://api.test/customers?page=1&pageSize=10&search="
        );
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 23);
        assert_eq!(page.pagination.pages, 3);
    }

    #[tokio::test]
    async fn update_puts_only_the_changed_fields() {
        let transport = QueueTransport::new();
        transport.push_response(
            200,
            r#"{"_id":"c1","firstName":"Jo","lastName":"March","email":"jo@example.com","city":"Concord"}"#,
        );
        let client = client(transport.clone());

        let changes = CustomerUpdate {
            city: Some("Concord".to_string()),
            ..CustomerUpdate::default()
        };
        let updated = update_customer(&client, "c1", &changes).await.unwrap();

        let body = transport.sent()[0].body.as_ref().unwrap().clone();
        assert_eq!(body, serde_json::json!({"city": "Concord"}));
        assert_eq!(updated.city.as_deref(), Some("Concord"));
    }
}
