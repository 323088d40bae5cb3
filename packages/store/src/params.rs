//! Fetch parameters for collection requests.
//!
//! A [`FetchParams`] bundle is what a list view sends when it asks the server
//! for a page: pagination coordinates, the committed search text, and any
//! active column filters. Filtering and pagination always happen server-side,
//! so the bundle is serialized into the query string as-is — nothing here is
//! ever applied to the in-memory collection.

use std::collections::BTreeMap;

use serde::Serialize;

/// Active filters, keyed by query-parameter name (`role`, `status`, ...).
///
/// A `BTreeMap` so query strings come out in a stable order.
pub type FilterMap = BTreeMap<String, String>;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FetchParams {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub filters: FilterMap,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            filters: FilterMap::new(),
        }
    }
}

impl FetchParams {
    /// Serialize into a query string: `page=1&pageSize=10&search=&role=admin`.
    ///
    /// `search` is always present (an empty value means "no filter"); filter
    /// entries with empty values are stripped before serialization.
    pub fn to_query(&self) -> String {
        let mut query = format!(
            "page={}&pageSize={}&search={}",
            self.page,
            self.page_size,
            encode_component(&self.search)
        );
        for (key, value) in &self.filters {
            if value.is_empty() {
                continue;
            }
            query.push('&');
            query.push_str(&encode_component(key));
            query.push('=');
            query.push_str(&encode_component(value));
        }
        query
    }
}

/// Percent-encode a query-string component. Unreserved characters
/// (RFC 3986 §2.3) pass through untouched.
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let params = FetchParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
        assert_eq!(params.to_query(), "page=1&pageSize=10&search=");
    }

    #[test]
    fn strips_empty_filter_values() {
        let mut params = FetchParams::default();
        params.filters.insert("role".to_string(), String::new());
        params.filters.insert("status".to_string(), "active".to_string());
        assert_eq!(params.to_query(), "page=1&pageSize=10&search=&status=active");
    }

    #[test]
    fn encodes_reserved_characters() {
        let mut params = FetchParams {
            search: "smith & co".to_string(),
            ..FetchParams::default()
        };
        params
            .filters
            .insert("role".to_string(), "printing operator".to_string());
        assert_eq!(
            params.to_query(),
            "page=1&pageSize=10&search=smith%20%26%20co&role=printing%20operator"
        );
    }
}
