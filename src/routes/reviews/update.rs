use actix_web::{web, HttpResponse};
use askama::Template;

use crate::pages::{reviews::ReviewEditForm, FieldErrors, Pages, Submission};

use super::{
    super::{form_messages, html, render, see_other, Chrome, Choice},
    score_choices,
};

#[derive(Template)]
#[template(path = "review_edit.html")]
struct ReviewEditTemplate {
    chrome: Chrome,
    review_id: String,
    form_errors: Vec<String>,
    scores: Vec<Choice>,
    message: String,
}

impl ReviewEditTemplate {
    fn new(review_id: String, form: &ReviewEditForm, errors: &FieldErrors) -> Self {
        ReviewEditTemplate {
            chrome: Chrome::new("Edit review", "reviews"),
            review_id,
            form_errors: form_messages(errors),
            scores: score_choices(&form.review_score),
            message: form.review_comment_message.clone(),
        }
    }
}

#[tracing::instrument("Showing review edit form", skip(pages))]
pub async fn edit_review_form(
    pages: web::Data<Pages>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let review_id = path.into_inner();
    match pages.reviews.edit_form(&review_id) {
        Some(form) => render(&ReviewEditTemplate::new(review_id, &form, &FieldErrors::default())),
        None => Ok(see_other("/reviews")),
    }
}

#[tracing::instrument("Updating review", skip(pages))]
pub async fn update_review(
    pages: web::Data<Pages>,
    path: web::Path<String>,
    form: web::Form<ReviewEditForm>,
) -> Result<HttpResponse, actix_web::Error> {
    let review_id = path.into_inner();
    match pages.reviews.update(&review_id, &form).await {
        Submission::Rejected(errors) => html(
            HttpResponse::BadRequest(),
            &ReviewEditTemplate::new(review_id, &form, &errors),
        ),
        Submission::Accepted | Submission::Failed => Ok(see_other("/reviews")),
    }
}
