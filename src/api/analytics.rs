use crate::{
    domain::Limit,
    models::{
        BackendHealth, CategoryRevenue, DashboardTotals, FunnelStage, QueryCatalog, QueryResult,
        SalesTrendPoint, Satisfaction, SchemaData, SellerReviewDelivery, SellerRevenue,
    },
};

use super::{ApiClient, ApiError, Listing};

// Reporting endpoints: analytics, the SQL query showcase, schema and totals.
#[derive(Clone)]
pub struct AnalyticsApi {
    client: ApiClient,
}

impl AnalyticsApi {
    pub fn new(client: ApiClient) -> AnalyticsApi {
        Self { client }
    }

    #[tracing::instrument("Fetching sales trend", skip(self))]
    pub async fn sales_trend(&self) -> Result<Vec<SalesTrendPoint>, ApiError> {
        let listing: Listing<SalesTrendPoint> = self
            .client
            .get(&["analytics", "sales-trend"], &[])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching customer satisfaction", skip(self))]
    pub async fn satisfaction(&self) -> Result<Satisfaction, ApiError> {
        self.client.get(&["analytics", "satisfaction"], &[]).await
    }

    #[tracing::instrument("Fetching revenue by category", skip(self))]
    pub async fn revenue_by_category(&self, limit: Limit) -> Result<Vec<CategoryRevenue>, ApiError> {
        let listing: Listing<CategoryRevenue> = self
            .client
            .get(&["analytics", "revenue-by-category"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching top sellers", skip(self))]
    pub async fn top_sellers(&self, limit: Limit) -> Result<Vec<SellerRevenue>, ApiError> {
        let listing: Listing<SellerRevenue> = self
            .client
            .get(&["analytics", "top-sellers"], &[("limit", limit.to_string())])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching review vs delivery report", skip(self))]
    pub async fn review_vs_delivery(
        &self,
        min_reviews: Limit,
    ) -> Result<Vec<SellerReviewDelivery>, ApiError> {
        let listing: Listing<SellerReviewDelivery> = self
            .client
            .get(
                &["analytics", "review-vs-delivery"],
                &[("min_reviews", min_reviews.to_string())],
            )
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching order funnel", skip(self))]
    pub async fn order_funnel(&self) -> Result<Vec<FunnelStage>, ApiError> {
        let listing: Listing<FunnelStage> = self
            .client
            .get(&["analytics", "order-funnel"], &[])
            .await?;
        Ok(listing.into_vec())
    }

    #[tracing::instrument("Fetching query catalog", skip(self))]
    pub async fn queries(&self) -> Result<QueryCatalog, ApiError> {
        self.client.get(&["queries", "all"], &[]).await
    }

    #[tracing::instrument("Running showcase query", skip(self))]
    pub async fn run_query(&self, query_id: &str) -> Result<QueryResult, ApiError> {
        self.client.get(&["queries", query_id], &[]).await
    }

    #[tracing::instrument("Fetching database schema", skip(self))]
    pub async fn schema(&self) -> Result<SchemaData, ApiError> {
        self.client.get(&["schema"], &[]).await
    }

    #[tracing::instrument("Fetching dashboard totals", skip(self))]
    pub async fn totals(&self) -> Result<DashboardTotals, ApiError> {
        self.client.get(&["stats"], &[]).await
    }

    #[tracing::instrument("Checking backend health", skip(self))]
    pub async fn health(&self) -> Result<BackendHealth, ApiError> {
        self.client.get(&["health"], &[]).await
    }
}
