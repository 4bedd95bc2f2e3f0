use actix_web::{web, HttpResponse};

use crate::pages::{
    orders::{OrderFilter, OrderForm},
    FieldErrors, Pages,
};

use super::{super::render, orders_template};

#[tracing::instrument("Showing orders page", skip(pages))]
pub async fn get_orders(
    pages: web::Data<Pages>,
    query: web::Query<OrderFilter>,
) -> Result<HttpResponse, actix_web::Error> {
    pages.orders.refresh().await;
    let snapshot = pages.orders.snapshot();

    render(&orders_template(
        &pages,
        snapshot,
        &query,
        &OrderForm::default(),
        &FieldErrors::default(),
    ))
}
