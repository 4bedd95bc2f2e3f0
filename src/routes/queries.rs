use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use serde_json::Value;

use crate::{messages::Message, models::QueryResult, pages::Pages, views::Table};

use super::{render, see_other, Chrome};

#[derive(Deserialize, Debug)]
pub struct QueryRun {
    pub run: Option<String>,
}

pub struct QueryCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub selected: bool,
}

pub struct QueryResultView {
    pub name: String,
    pub description: String,
    pub sql: String,
    pub tables_used: Vec<String>,
    pub table: Option<Table>,
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Result rows are free-form; columns follow the first row's keys.
fn result_view(result: QueryResult) -> QueryResultView {
    let table = result.results.first().map(|first| {
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = result
            .results
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .map(|column| row.get(column).map(cell).unwrap_or_default())
                    .collect()
            })
            .collect();
        Table { headers, rows }
    });

    QueryResultView {
        name: result.query_name,
        description: result.description,
        sql: result.sql,
        tables_used: result.tables_used,
        table,
    }
}

#[derive(Template)]
#[template(path = "queries.html")]
struct QueriesTemplate {
    chrome: Chrome,
    queries: Vec<QueryCard>,
    result: Option<QueryResultView>,
    empty_message: String,
}

#[tracing::instrument("Showing queries page", skip(pages))]
pub async fn queries_page(
    pages: web::Data<Pages>,
    query: web::Query<QueryRun>,
) -> Result<HttpResponse, actix_web::Error> {
    let run = query.into_inner().run.filter(|id| !id.trim().is_empty());
    match &run {
        Some(id) => {
            futures_util::join!(pages.queries.refresh(), pages.queries.execute(id));
        }
        None => pages.queries.refresh().await,
    }

    let catalog = pages.queries.catalog();
    let result = pages.queries.result();
    let banner = result.banner.or(catalog.banner);

    render(&QueriesTemplate {
        chrome: Chrome::new("SQL Queries", "queries")
            .banner(banner)
            .dismiss_with("/queries/dismiss-error")
            .loading(catalog.loading || result.loading),
        queries: catalog
            .data
            .into_iter()
            .map(|q| QueryCard {
                selected: run.as_deref() == Some(q.id.as_str()),
                id: q.id,
                name: q.name,
                description: q.description,
            })
            .collect(),
        result: run.and(result.data).map(result_view),
        empty_message: pages.text(&Message::NoData),
    })
}

#[tracing::instrument("Dismissing queries error", skip(pages))]
pub async fn dismiss_queries_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.queries.dismiss_error();
    see_other("/queries")
}
