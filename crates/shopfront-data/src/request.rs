//! Request URL construction.

use crate::config::{ApiConfig, Endpoint};

/// Sort direction for listing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Ordered query parameters for a catalog request.
///
/// Parameter names follow the wire format of the catalog API (`limit`,
/// `sortBy`, `order`, `skip`, `q`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Page size.
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit.to_string())
    }

    /// Offset into the listing.
    pub fn skip(self, skip: u32) -> Self {
        self.param("skip", skip.to_string())
    }

    /// Field to sort by.
    pub fn sort_by(self, field: impl Into<String>) -> Self {
        self.param("sortBy", field)
    }

    /// Sort direction.
    pub fn order(self, order: SortOrder) -> Self {
        self.param("order", order.as_str())
    }

    /// Search term.
    pub fn q(self, query: impl Into<String>) -> Self {
        self.param("q", query)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a `key=value&...` query string with percent-encoded values.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Build the full request URL for an endpoint.
pub fn build_url(config: &ApiConfig, endpoint: Endpoint, params: &QueryParams) -> String {
    let mut url = format!("{}{}", config.base_url, endpoint.path());
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.to_query_string());
    }
    url
}

/// Percent-encode a query component.
///
/// Unreserved characters (RFC 3986 §2.3) pass through; spaces and everything
/// else are `%XX`-escaped byte-wise.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_params() {
        let config = ApiConfig::default();
        let url = build_url(&config, Endpoint::Products, &QueryParams::new());
        assert_eq!(url, "https://dummyjson.com/products");
    }

    #[test]
    fn test_build_url_with_listing_params() {
        let config = ApiConfig::default();
        let params = QueryParams::new()
            .limit(6)
            .sort_by("id")
            .order(SortOrder::Desc)
            .skip(12);
        let url = build_url(&config, Endpoint::Products, &params);
        assert_eq!(
            url,
            "https://dummyjson.com/products?limit=6&sortBy=id&order=desc&skip=12"
        );
    }

    #[test]
    fn test_build_search_url() {
        let config = ApiConfig::default();
        let params = QueryParams::new().q("phone");
        let url = build_url(&config, Endpoint::ProductSearch, &params);
        assert_eq!(url, "https://dummyjson.com/products/search?q=phone");
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let params = QueryParams::new().q("wireless mouse & pad");
        assert_eq!(
            params.to_query_string(),
            "q=wireless%20mouse%20%26%20pad"
        );
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_non_ascii_is_escaped_bytewise() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }
}
