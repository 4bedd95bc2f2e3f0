use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{models::BackendHealth, pages::Pages, utils::group_thousands};

use super::{render, see_other, Chrome};

pub struct Card {
    pub label: &'static str,
    pub value: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    chrome: Chrome,
    cards: Vec<Card>,
    health: Option<BackendHealth>,
    health_error: Option<String>,
    table_counts: Vec<(String, String)>,
}

#[tracing::instrument("Showing dashboard", skip(pages))]
pub async fn dashboard_page(pages: web::Data<Pages>) -> Result<HttpResponse, actix_web::Error> {
    pages.dashboard.refresh().await;
    let snapshot = pages.dashboard.snapshot();

    let cards = snapshot
        .data
        .totals
        .map(|totals| {
            vec![
                Card { label: "Customers", value: group_thousands(totals.customers) },
                Card { label: "Orders", value: group_thousands(totals.orders) },
                Card { label: "Products", value: group_thousands(totals.products) },
                Card { label: "Reviews", value: group_thousands(totals.reviews) },
            ]
        })
        .unwrap_or_default();

    let table_counts = snapshot
        .data
        .health
        .as_ref()
        .map(|health| {
            health
                .table_counts
                .iter()
                .map(|(table, count)| {
                    let count = match count {
                        serde_json::Value::Number(n) => n
                            .as_i64()
                            .map(group_thousands)
                            .unwrap_or_else(|| n.to_string()),
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (table.clone(), count)
                })
                .collect()
        })
        .unwrap_or_default();

    render(&DashboardTemplate {
        chrome: Chrome::new("Dashboard", "dashboard")
            .banner(snapshot.banner)
            .dismiss_with("/dismiss-error")
            .loading(snapshot.loading),
        cards,
        health: snapshot.data.health,
        health_error: snapshot.data.health_error,
        table_counts,
    })
}

#[tracing::instrument("Dismissing dashboard error", skip(pages))]
pub async fn dismiss_dashboard_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.dashboard.dismiss_error();
    see_other("/")
}
