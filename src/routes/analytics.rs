use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{
    messages::Message,
    pages::Pages,
    utils::{group_thousands, two_decimals},
};

use super::{render, see_other, Chrome};

pub struct SatisfactionView {
    pub average: String,
    pub positive: String,
    pub neutral: String,
    pub negative: String,
    pub total: String,
}

pub struct MonthRow {
    pub month: String,
    pub orders: String,
    pub revenue: String,
    pub width: u32,
}

#[derive(Template)]
#[template(path = "analytics.html")]
struct AnalyticsTemplate {
    chrome: Chrome,
    satisfaction: Option<SatisfactionView>,
    months: Vec<MonthRow>,
    empty_message: String,
}

#[tracing::instrument("Showing analytics page", skip(pages))]
pub async fn analytics_page(pages: web::Data<Pages>) -> Result<HttpResponse, actix_web::Error> {
    pages.analytics.refresh().await;
    let snapshot = pages.analytics.snapshot();
    let data = snapshot.data;

    let months = data
        .revenue_shares()
        .into_iter()
        .zip(data.sales_trend.iter())
        .map(|((month, revenue, width), point)| MonthRow {
            month,
            orders: group_thousands(point.orders),
            revenue: two_decimals(revenue),
            width,
        })
        .collect();

    render(&AnalyticsTemplate {
        chrome: Chrome::new("Analytics", "analytics")
            .banner(snapshot.banner)
            .dismiss_with("/analytics/dismiss-error")
            .loading(snapshot.loading),
        satisfaction: data.satisfaction.map(|s| SatisfactionView {
            average: two_decimals(s.avg_score),
            positive: format!("{:.1}", s.positive_pct),
            neutral: format!("{:.1}", s.neutral_pct),
            negative: format!("{:.1}", s.negative_pct),
            total: group_thousands(s.total_reviews),
        }),
        months,
        empty_message: pages.text(&Message::NoData),
    })
}

#[tracing::instrument("Dismissing analytics error", skip(pages))]
pub async fn dismiss_analytics_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.analytics.dismiss_error();
    see_other("/analytics")
}
