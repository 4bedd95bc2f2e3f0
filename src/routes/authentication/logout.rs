use actix_web::{web, HttpResponse};

use crate::pages::Pages;

use super::super::see_other;

#[tracing::instrument(
    "Logging out currently logged in user",
    skip_all
)]
pub async fn logout(pages: web::Data<Pages>) -> HttpResponse {
    pages.login.logout().await;
    see_other("/login")
}
