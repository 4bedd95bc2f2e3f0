use actix_web::{web, HttpResponse};

use crate::pages::{
    reviews::{ReviewFilter, ReviewForm},
    FieldErrors, Pages,
};

use super::{super::render, reviews_template};

#[tracing::instrument("Showing reviews page", skip(pages))]
pub async fn get_reviews(
    pages: web::Data<Pages>,
    query: web::Query<ReviewFilter>,
) -> Result<HttpResponse, actix_web::Error> {
    pages.reviews.refresh().await;
    let snapshot = pages.reviews.snapshot();

    render(&reviews_template(
        &pages,
        snapshot,
        &query,
        &ReviewForm::default(),
        &FieldErrors::default(),
    ))
}
