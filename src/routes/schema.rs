use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{messages::Message, models::TableInfo, pages::Pages};

use super::{render, see_other, Chrome};

#[derive(Template)]
#[template(path = "schema.html")]
struct SchemaTemplate {
    chrome: Chrome,
    tables: Vec<TableInfo>,
    relationships: Vec<String>,
    empty_message: String,
}

#[tracing::instrument("Showing schema page", skip(pages))]
pub async fn schema_page(pages: web::Data<Pages>) -> Result<HttpResponse, actix_web::Error> {
    pages.schema.refresh().await;
    let snapshot = pages.schema.snapshot();
    let schema = snapshot.data.unwrap_or_default();

    render(&SchemaTemplate {
        chrome: Chrome::new("Database Schema", "schema")
            .banner(snapshot.banner)
            .dismiss_with("/schema/dismiss-error")
            .loading(snapshot.loading),
        tables: schema.tables,
        relationships: schema.relationships,
        empty_message: pages.text(&Message::NoData),
    })
}

#[tracing::instrument("Dismissing schema error", skip(pages))]
pub async fn dismiss_schema_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.schema.dismiss_error();
    see_other("/schema")
}
