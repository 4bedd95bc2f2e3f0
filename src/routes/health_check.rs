use actix_web::HttpResponse;

// Liveness of the dashboard only; backend health is shown on the dashboard page.
#[tracing::instrument(
    "Checking if dashboard is online"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().finish()
}
