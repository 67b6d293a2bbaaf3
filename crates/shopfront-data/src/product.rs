//! Catalog wire types.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalog API.
///
/// Products are immutable on the client; every field comes off the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Price in the catalog currency.
    pub price: f64,
    /// Discount applied to the listed price, in percent.
    pub discount_percentage: f64,
    /// Small preview image URL.
    pub thumbnail: String,
    /// Gallery image URLs, primary first.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Price formatted for display, e.g. `$9.99`.
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Preferred image: first gallery image, falling back to the thumbnail.
    pub fn display_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(&self.thumbnail)
    }

    /// Description truncated to `max` characters with an ellipsis.
    pub fn short_description(&self, max: usize) -> String {
        if self.description.chars().count() <= max {
            self.description.clone()
        } else {
            let truncated: String = self.description.chars().take(max).collect();
            format!("{}...", truncated)
        }
    }
}

/// Pagination envelope around a product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Total matching products.
    pub total: u32,
    /// Offset of this page.
    pub skip: u32,
    /// Requested page size.
    pub limit: u32,
}

impl ProductsResponse {
    /// An envelope with no products.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            total: 0,
            skip: 0,
            limit: 0,
        }
    }
}
