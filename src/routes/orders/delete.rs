use actix_web::{web, HttpResponse};

use crate::pages::Pages;

use super::super::see_other;

// Opening the confirmation sends nothing to the backend.
#[tracing::instrument("Requesting order deletion", skip(pages))]
pub async fn request_order_delete(pages: web::Data<Pages>, path: web::Path<String>) -> HttpResponse {
    pages.orders.request_delete(&path);
    see_other("/orders")
}

#[tracing::instrument("Deleting order", skip(pages))]
pub async fn confirm_order_delete(pages: web::Data<Pages>, path: web::Path<String>) -> HttpResponse {
    pages.orders.confirm_delete(&path).await;
    see_other("/orders")
}

#[tracing::instrument("Cancelling order deletion", skip(pages))]
pub async fn cancel_order_delete(pages: web::Data<Pages>) -> HttpResponse {
    pages.orders.cancel_delete();
    see_other("/orders")
}
