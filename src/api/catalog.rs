//! Product catalog endpoints and DTOs.

use std::future::Future;

use serde::Deserialize;

use super::{ApiClient, ApiError};

/// A single catalog product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
}

/// One page of catalog results.
///
/// `total` is optional on the wire; until a response carries it the overall
/// catalog size is unknown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// The remote catalog surface the pagination controller talks to.
pub trait CatalogService: Send + Sync + 'static {
    /// Fetch one page of the unfiltered listing.
    fn list_products(
        &self,
        skip: u32,
        limit: u32,
    ) -> impl Future<Output = Result<ProductPage, ApiError>> + Send;

    /// Fetch the results for a submitted search term.
    fn search_products(&self, term: &str)
        -> impl Future<Output = Result<ProductPage, ApiError>> + Send;
}

/// [`CatalogService`] over the real HTTP API.
pub struct HttpCatalog {
    client: ApiClient,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(client: ApiClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }
}

impl CatalogService for HttpCatalog {
    async fn list_products(&self, skip: u32, limit: u32) -> Result<ProductPage, ApiError> {
        let url = format!("{}/products", self.base_url);
        let limit = limit.to_string();
        let skip = skip.to_string();
        self.client
            .get_json(&url, &[("limit", limit.as_str()), ("skip", skip.as_str())])
            .await
    }

    async fn search_products(&self, term: &str) -> Result<ProductPage, ApiError> {
        let url = format!("{}/products/search", self.base_url);
        self.client.get_json(&url, &[("q", term)]).await
    }
}
