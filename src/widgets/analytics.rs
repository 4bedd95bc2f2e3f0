use crate::{
    api::AnalyticsApi,
    domain::{Limit, LimitBounds},
    error_classifier::ErrorClassifier,
    models::{CategoryRevenue, FunnelStage, SellerReviewDelivery, SellerRevenue},
    utils::{group_thousands, short_id, two_decimals},
    views::{TableRow, WidgetView},
};

use super::{invalid, rows};

fn decimals(value: Option<f64>) -> String {
    value.map(two_decimals).unwrap_or_else(|| "-".to_string())
}

fn location(city: &Option<String>, state: &Option<String>) -> String {
    match (city, state) {
        (Some(city), Some(state)) => format!("{}, {}", city, state),
        (Some(place), None) | (None, Some(place)) => place.clone(),
        (None, None) => "-".to_string(),
    }
}

impl TableRow for CategoryRevenue {
    const HEADERS: &'static [&'static str] =
        &["Category", "Items Sold", "Orders", "Revenue", "Avg Item Price"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.category_name.clone(),
            group_thousands(self.items_sold),
            group_thousands(self.distinct_orders),
            two_decimals(self.total_revenue),
            decimals(self.avg_item_price),
        ]
    }
}

impl TableRow for SellerRevenue {
    const HEADERS: &'static [&'static str] =
        &["Seller", "Location", "Orders", "Items Sold", "Revenue"];

    fn cells(&self) -> Vec<String> {
        vec![
            short_id(&self.seller_id),
            location(&self.seller_city, &self.seller_state),
            group_thousands(self.order_count),
            group_thousands(self.items_sold),
            two_decimals(self.total_revenue),
        ]
    }
}

impl TableRow for SellerReviewDelivery {
    const HEADERS: &'static [&'static str] =
        &["Seller", "Location", "Reviews", "Avg Score", "Avg Delivery Days"];

    fn cells(&self) -> Vec<String> {
        vec![
            short_id(&self.seller_id),
            location(&self.seller_city, &self.seller_state),
            group_thousands(self.review_count),
            decimals(self.avg_review_score),
            decimals(self.avg_delivery_days),
        ]
    }
}

impl TableRow for FunnelStage {
    const HEADERS: &'static [&'static str] =
        &["Status", "Orders", "Avg Approval Days", "Avg Delivery Days"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.order_status.clone(),
            group_thousands(self.order_count),
            decimals(self.avg_approval_days),
            decimals(self.avg_delivery_days),
        ]
    }
}

#[derive(Clone)]
pub struct AnalyticsWidgets {
    api: AnalyticsApi,
    errors: ErrorClassifier,
}

impl AnalyticsWidgets {
    pub fn new(api: AnalyticsApi, errors: ErrorClassifier) -> AnalyticsWidgets {
        Self { api, errors }
    }

    #[tracing::instrument("Loading revenue by category", skip(self))]
    pub async fn load_revenue_by_category(&self, limit: Option<&str>) -> WidgetView {
        let limit = match Limit::parse(limit, LimitBounds::REPORT) {
            Ok(limit) => limit,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.revenue_by_category(limit).await)
    }

    #[tracing::instrument("Loading top sellers", skip(self))]
    pub async fn load_top_sellers(&self, limit: Option<&str>) -> WidgetView {
        let limit = match Limit::parse(limit, LimitBounds::REPORT) {
            Ok(limit) => limit,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.top_sellers(limit).await)
    }

    #[tracing::instrument("Loading review vs delivery report", skip(self))]
    pub async fn load_review_vs_delivery(&self, min_reviews: Option<&str>) -> WidgetView {
        let min_reviews = match Limit::parse(min_reviews, LimitBounds::MIN_REVIEWS) {
            Ok(min_reviews) => min_reviews,
            Err(message) => return invalid(&self.errors, message),
        };
        rows(&self.errors, self.api.review_vs_delivery(min_reviews).await)
    }

    #[tracing::instrument("Loading order funnel", skip(self))]
    pub async fn load_order_funnel(&self) -> WidgetView {
        rows(&self.errors, self.api.order_funnel().await)
    }
}
