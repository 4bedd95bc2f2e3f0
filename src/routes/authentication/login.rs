use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{
    models::SessionUser,
    pages::{login::LoginForm, Pages, Submission},
};

use super::super::{form_messages, html, render, see_other, Chrome};

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    chrome: Chrome,
    user: Option<SessionUser>,
    username: String,
    form_errors: Vec<String>,
}

#[tracing::instrument("Showing login page", skip(pages))]
pub async fn login_form(pages: web::Data<Pages>) -> Result<HttpResponse, actix_web::Error> {
    pages.login.refresh().await;
    let snapshot = pages.login.snapshot();

    render(&LoginTemplate {
        chrome: Chrome::new("Login", "login")
            .banner(snapshot.banner)
            .dismiss_with("/login/dismiss-error"),
        user: snapshot.data.user.filter(|_| snapshot.data.logged_in),
        username: String::new(),
        form_errors: Vec::new(),
    })
}

#[tracing::instrument(
    "Logging in user",
    skip(pages, form),
    fields(username = %form.username)
)]
pub async fn login(
    pages: web::Data<Pages>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, actix_web::Error> {
    match pages.login.login(&form).await {
        Submission::Accepted => Ok(see_other("/")),
        Submission::Failed => Ok(see_other("/login")),
        Submission::Rejected(errors) => html(
            HttpResponse::BadRequest(),
            &LoginTemplate {
                chrome: Chrome::new("Login", "login"),
                user: None,
                username: form.username.clone(),
                form_errors: form_messages(&errors),
            },
        ),
    }
}

#[tracing::instrument("Dismissing login error", skip(pages))]
pub async fn dismiss_login_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.login.dismiss_error();
    see_other("/login")
}

