//! Response envelopes and the pagination normalization adapter.
//!
//! Collection responses arrive as
//! `{ "data": { "<resource>s": [...], "pagination": {...} } }`, but the
//! pagination field names vary per resource (`total` vs `totalCount`, `page`
//! vs `currentPage`, `pages` vs `totalPages`). [`RawPagination`] absorbs the
//! variants with serde aliases and normalizes into [`store::Pagination`] at
//! this boundary — the raw shapes never reach application state.

use serde::Deserialize;

use store::{CollectionPage, Customer, Pagination, User};

/// Wire pagination, every observed spelling accepted.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct RawPagination {
    #[serde(alias = "totalCount")]
    pub total: u64,
    #[serde(alias = "currentPage")]
    pub page: u32,
    #[serde(alias = "pageSize")]
    pub limit: u32,
    #[serde(alias = "totalPages")]
    pub pages: u32,
}

impl RawPagination {
    pub fn normalize(self) -> Pagination {
        Pagination {
            total: self.total,
            page: self.page,
            page_size: self.limit,
            pages: self.pages,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    data: UsersData,
}

#[derive(Debug, Deserialize)]
struct UsersData {
    users: Vec<User>,
    pagination: RawPagination,
}

impl UsersEnvelope {
    pub fn into_page(self) -> CollectionPage<User> {
        CollectionPage {
            items: self.data.users,
            pagination: self.data.pagination.normalize(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CustomersEnvelope {
    data: CustomersData,
}

#[derive(Debug, Deserialize)]
struct CustomersData {
    customers: Vec<Customer>,
    pagination: RawPagination,
}

impl CustomersEnvelope {
    pub fn into_page(self) -> CollectionPage<Customer> {
        CollectionPage {
            items: self.data.customers,
            pagination: self.data.pagination.normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_the_short_pagination_spelling() {
        let envelope: CustomersEnvelope = serde_json::from_str(
            r#"{"data":{"customers":[],"pagination":{"total":23,"page":1,"limit":10,"pages":3}}}"#,
        )
        .unwrap();
        let page = envelope.into_page();
        assert_eq!(page.pagination.total, 23);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.page_size, 10);
        assert_eq!(page.pagination.pages, 3);
    }

    #[test]
    fn normalizes_the_long_pagination_spelling() {
        let envelope: UsersEnvelope = serde_json::from_str(
            r#"{"data":{"users":[],"pagination":{"totalCount":41,"currentPage":2,"pageSize":20,"totalPages":3}}}"#,
        )
        .unwrap();
        let page = envelope.into_page();
        assert_eq!(page.pagination.total, 41);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.page_size, 20);
        assert_eq!(page.pagination.pages, 3);
    }

    #[test]
    fn carries_the_items_through() {
        let envelope: UsersEnvelope = serde_json::from_str(
            r#"{"data":{"users":[{"_id":"u1","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","role":"admin","isActive":true}],"pagination":{"total":1,"page":1,"limit":10,"pages":1}}}"#,
        )
        .unwrap();
        let page = envelope.into_page();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "u1");
    }
}
