use crate::{
    domain::{CategoryId, Limit},
    models::{CategoryCount, Product, ProductStats},
};

use super::{ApiClient, ApiError, Listing};

#[derive(Clone)]
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub fn new(client: ApiClient) -> ProductsApi {
        Self { client }
    }

    #[tracing::instrument("Fetching products by category", skip(self))]
    pub async fn by_category(
        &self,
        category_id: &CategoryId,
        limit: Limit,
    ) -> Result<Vec<Product>, ApiError> {
        let listing: Listing<Product> = self
            .client
            .get(
                &["products", "by-category", category_id.as_str()],
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching top product categories", skip(self))]
    pub async fn top_categories(&self) -> Result<Vec<CategoryCount>, ApiError> {
        let listing: Listing<CategoryCount> = self
            .client
            .get(&["products", "top-categories"], &[])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching product stats", skip(self))]
    pub async fn stats(&self) -> Result<ProductStats, ApiError> {
        self.client.get(&["products", "stats"], &[]).await
    }

    #[tracing::instrument("Fetching product list", skip(self))]
    pub async fn list(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        let listing: Listing<Product> = self
            .client
            .get(&["products"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }
}
