use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{
    messages::Message,
    pages::{products::ProductFilter, Pages},
    utils::group_thousands,
    views::Table,
};

use super::{render, see_other, Chrome};

#[derive(Template)]
#[template(path = "products.html")]
struct ProductsTemplate {
    chrome: Chrome,
    stats: Option<(String, String)>,
    categories: Option<Table>,
    search: String,
    match_count: usize,
    products: Option<Table>,
    empty_message: String,
}

#[tracing::instrument("Showing products page", skip(pages))]
pub async fn products_page(
    pages: web::Data<Pages>,
    query: web::Query<ProductFilter>,
) -> Result<HttpResponse, actix_web::Error> {
    pages.products.refresh().await;
    let snapshot = pages.products.snapshot();
    let data = snapshot.data;

    let products = query.apply(&data.products);
    let search = query.search.trim().to_string();
    let empty_message = if search.is_empty() {
        pages.text(&Message::NoData)
    } else {
        pages.text(&Message::NoMatches)
    };

    render(&ProductsTemplate {
        chrome: Chrome::new("Products", "products")
            .banner(snapshot.banner)
            .dismiss_with("/products/dismiss-error")
            .loading(snapshot.loading),
        stats: data.stats.map(|s| {
            (group_thousands(s.total_products), group_thousands(s.total_categories))
        }),
        categories: (!data.top_categories.is_empty()).then(|| Table::from_rows(&data.top_categories)),
        search,
        match_count: products.len(),
        products: (!products.is_empty()).then(|| Table::from_rows(&products)),
        empty_message,
    })
}

#[tracing::instrument("Dismissing products error", skip(pages))]
pub async fn dismiss_products_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.products.dismiss_error();
    see_other("/products")
}
