//! Catalog API client for Shopfront.
//!
//! Builds URLs against a fixed base and endpoint set, performs single HTTP
//! GETs and maps non-2xx responses to typed errors. Retries, caching and
//! request deduplication live one layer up in `shopfront-query`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_data::{ApiClient, Endpoint, QueryParams};
//!
//! let client = ApiClient::new();
//! let page = client
//!     .fetch_products(Endpoint::ProductSearch, QueryParams::new().q("phone"))
//!     .await?;
//! for product in &page.products {
//!     println!("{} {}", product.title, product.price_display());
//! }
//! ```

mod config;
mod error;
mod product;
mod request;
mod response;

pub use config::{ApiConfig, Endpoint, DEFAULT_BASE_URL, DEFAULT_LIMIT, FEATURED_LIMIT};
pub use error::ApiError;
pub use product::{Product, ProductsResponse};
pub use request::{build_url, QueryParams, SortOrder};
pub use response::Response;

/// HTTP client for the catalog API.
///
/// Thin wrapper over the browser `fetch` call; holds only configuration and
/// is cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    /// Client against the default catalog origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client against a custom origin.
    pub fn with_config(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue a single GET and decode the product envelope.
    ///
    /// Fails with [`ApiError::Request`] on a non-2xx status and propagates
    /// transport failures as [`ApiError::Network`]. No retries at this layer.
    pub async fn fetch_products(
        &self,
        endpoint: Endpoint,
        params: QueryParams,
    ) -> Result<ProductsResponse, ApiError> {
        let url = build_url(&self.config, endpoint, &params);
        log::debug!("GET {}", url);

        let response = self.get(&url).await?.error_for_status()?;
        response.json()
    }

    /// Perform a GET against an absolute URL.
    #[cfg(target_arch = "wasm32")]
    async fn get(&self, url: &str) -> Result<Response, ApiError> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .binary()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Response::new(status, status_text, body))
    }

    /// Perform a GET against an absolute URL (non-browser stub).
    ///
    /// Native builds have no transport; URL construction and response
    /// decoding are exercised directly in tests instead.
    #[cfg(not(target_arch = "wasm32"))]
    async fn get(&self, _url: &str) -> Result<Response, ApiError> {
        Err(ApiError::Network(
            "catalog transport is only available in the browser".to_string(),
        ))
    }
}
