use actix_web::{error::ErrorInternalServerError, http::header, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{views::WidgetView, widgets::Widgets};

use super::{render, Chrome};

// Every widget form field; each widget reads the ones it needs.
#[derive(Deserialize, Debug, Default)]
pub struct WidgetQuery {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    pub limit: Option<String>,
    #[serde(default)]
    pub customer_id: String,
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub min_score: String,
    #[serde(default)]
    pub max_score: String,
    pub min_reviews: Option<String>,
}

impl WidgetQuery {
    fn limit(&self) -> Option<&str> {
        self.limit.as_deref()
    }
}

fn fragment(view: WidgetView) -> Result<HttpResponse, actix_web::Error> {
    let body = view.render().map_err(|e| {
        tracing::error!(error = %e, "Failed to render widget");
        ErrorInternalServerError(e)
    })?;
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body))
}

#[derive(Template)]
#[template(path = "widgets.html")]
struct ExplorerTemplate {
    chrome: Chrome,
}

#[tracing::instrument("Showing widget explorer")]
pub async fn widget_explorer() -> Result<HttpResponse, actix_web::Error> {
    render(&ExplorerTemplate {
        chrome: Chrome::new("Explorer", "widgets"),
    })
}

#[tracing::instrument("Customers by state widget", skip(widgets))]
pub async fn customers_by_state_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.customers.load_customers_by_state(&query.state).await)
}

#[tracing::instrument("Top cities widget", skip(widgets))]
pub async fn top_cities_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.customers.load_top_cities(query.limit()).await)
}

#[tracing::instrument("Customers by city widget", skip(widgets))]
pub async fn customers_by_city_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(
        widgets
            .customers
            .load_customers_by_city(&query.state, &query.city, query.limit())
            .await,
    )
}

#[tracing::instrument("Top states widget", skip(widgets))]
pub async fn top_states_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.customers.load_top_states(query.limit()).await)
}

#[tracing::instrument("Orders by customer widget", skip(widgets))]
pub async fn orders_by_customer_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(
        widgets
            .orders
            .load_orders_by_customer(&query.customer_id, query.limit())
            .await,
    )
}

#[tracing::instrument("Sample customer widget", skip(widgets))]
pub async fn sample_customer_widget(widgets: web::Data<Widgets>) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.orders.fetch_sample_customer().await)
}

#[tracing::instrument("Payments by type widget", skip(widgets))]
pub async fn payments_by_type_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(
        widgets
            .payments
            .load_payments_by_type(&query.payment_type, query.limit())
            .await,
    )
}

#[tracing::instrument("Products by category widget", skip(widgets))]
pub async fn products_by_category_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(
        widgets
            .products
            .load_products_by_category(&query.category_id, query.limit())
            .await,
    )
}

#[tracing::instrument("Top categories widget", skip(widgets))]
pub async fn top_categories_widget(widgets: web::Data<Widgets>) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.products.load_top_categories().await)
}

#[tracing::instrument("Review stats widget", skip(widgets))]
pub async fn review_stats_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(
        widgets
            .reviews
            .load_review_stats(&query.min_score, &query.max_score)
            .await,
    )
}

#[tracing::instrument("Revenue by category widget", skip(widgets))]
pub async fn revenue_by_category_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.analytics.load_revenue_by_category(query.limit()).await)
}

#[tracing::instrument("Top sellers widget", skip(widgets))]
pub async fn top_sellers_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.analytics.load_top_sellers(query.limit()).await)
}

#[tracing::instrument("Review vs delivery widget", skip(widgets))]
pub async fn review_vs_delivery_widget(
    widgets: web::Data<Widgets>,
    query: web::Query<WidgetQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    fragment(
        widgets
            .analytics
            .load_review_vs_delivery(query.min_reviews.as_deref())
            .await,
    )
}

#[tracing::instrument("Order funnel widget", skip(widgets))]
pub async fn order_funnel_widget(widgets: web::Data<Widgets>) -> Result<HttpResponse, actix_web::Error> {
    fragment(widgets.analytics.load_order_funnel().await)
}
