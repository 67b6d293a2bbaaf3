//! Catalog API configuration and endpoint set.

/// Default catalog API origin.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Page size for general product listings.
pub const DEFAULT_LIMIT: u32 = 8;

/// Number of products shown in the featured and new-arrivals sections.
pub const FEATURED_LIMIT: u32 = 6;

/// Read-only endpoints exposed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /products`, a paginated listing.
    Products,
    /// `GET /products/search`, full-text search over the catalog.
    ProductSearch,
}

impl Endpoint {
    /// URL path for this endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Products => "/products",
            Endpoint::ProductSearch => "/products/search",
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL requests are issued against, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Configuration pointed at a custom origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_catalog() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://dummyjson.com");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::with_base_url("https://example.com/");
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Products.path(), "/products");
        assert_eq!(Endpoint::ProductSearch.path(), "/products/search");
    }
}
