use actix_web::{web, HttpResponse};

use crate::pages::{
    reviews::{ReviewFilter, ReviewForm},
    Pages, Submission,
};

use super::{
    super::{html, see_other},
    reviews_template,
};

#[tracing::instrument("Posting review", skip(pages))]
pub async fn create_review(
    pages: web::Data<Pages>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, actix_web::Error> {
    match pages.reviews.create(&form).await {
        Submission::Rejected(errors) => {
            let snapshot = pages.reviews.snapshot();
            html(
                HttpResponse::BadRequest(),
                &reviews_template(&pages, snapshot, &ReviewFilter::default(), &form, &errors),
            )
        }
        Submission::Accepted | Submission::Failed => Ok(see_other("/reviews")),
    }
}

#[tracing::instrument("Dismissing reviews error", skip(pages))]
pub async fn dismiss_review_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.reviews.dismiss_error();
    see_other("/reviews")
}
