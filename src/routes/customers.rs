use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{
    domain::LimitBounds,
    messages::Message,
    pages::{customers::CustomerSearch, Pages},
    views::Table,
};

use super::{render, see_other, Chrome};

#[derive(Template)]
#[template(path = "customers.html")]
struct CustomersTemplate {
    chrome: Chrome,
    state: String,
    limit: String,
    table: Option<Table>,
    empty_message: Option<String>,
}

#[tracing::instrument("Showing customers page", skip(pages))]
pub async fn customers_page(
    pages: web::Data<Pages>,
    query: web::Query<CustomerSearch>,
) -> Result<HttpResponse, actix_web::Error> {
    let search = query.into_inner();
    let searched = !search.view.is_empty();
    pages.customers.search(&search).await;
    let snapshot = pages.customers.snapshot();

    let table = if !snapshot.data.customers.is_empty() {
        Some(Table::from_rows(&snapshot.data.customers))
    } else if !snapshot.data.top_cities.is_empty() {
        Some(Table::from_rows(&snapshot.data.top_cities))
    } else {
        None
    };
    let empty_message = (searched && table.is_none() && snapshot.banner.is_none())
        .then(|| pages.text(&Message::NoData));

    let state = if search.state.trim().is_empty() {
        CustomerSearch::DEFAULT_STATE.to_string()
    } else {
        search.state
    };
    let limit = if search.limit.trim().is_empty() {
        LimitBounds::CUSTOMERS_BY_CITY.default.to_string()
    } else {
        search.limit
    };

    render(&CustomersTemplate {
        chrome: Chrome::new("Customers", "customers")
            .banner(snapshot.banner)
            .dismiss_with("/customers/dismiss-error"),
        state,
        limit,
        table,
        empty_message,
    })
}

#[tracing::instrument("Dismissing customers error", skip(pages))]
pub async fn dismiss_customers_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.customers.dismiss_error();
    see_other("/customers")
}
