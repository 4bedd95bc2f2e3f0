use actix_web::{web, HttpResponse};

use crate::pages::Pages;

use super::super::see_other;

#[tracing::instrument("Requesting review deletion", skip(pages))]
pub async fn request_review_delete(pages: web::Data<Pages>, path: web::Path<String>) -> HttpResponse {
    pages.reviews.request_delete(&path);
    see_other("/reviews")
}

#[tracing::instrument("Deleting review", skip(pages))]
pub async fn confirm_review_delete(pages: web::Data<Pages>, path: web::Path<String>) -> HttpResponse {
    pages.reviews.confirm_delete(&path).await;
    see_other("/reviews")
}

#[tracing::instrument("Cancelling review deletion", skip(pages))]
pub async fn cancel_review_delete(pages: web::Data<Pages>) -> HttpResponse {
    pages.reviews.cancel_delete();
    see_other("/reviews")
}
