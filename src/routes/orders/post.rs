use actix_web::{web, HttpResponse};

use crate::pages::{
    orders::{OrderFilter, OrderForm},
    Pages, Submission,
};

use super::{
    super::{html, see_other},
    orders_template,
};

#[tracing::instrument("Posting order", skip(pages))]
pub async fn create_order(
    pages: web::Data<Pages>,
    form: web::Form<OrderForm>,
) -> Result<HttpResponse, actix_web::Error> {
    match pages.orders.create(&form).await {
        Submission::Rejected(errors) => {
            let snapshot = pages.orders.snapshot();
            html(
                HttpResponse::BadRequest(),
                &orders_template(&pages, snapshot, &OrderFilter::default(), &form, &errors),
            )
        }
        Submission::Accepted | Submission::Failed => Ok(see_other("/orders")),
    }
}

#[tracing::instrument("Dismissing orders error", skip(pages))]
pub async fn dismiss_order_error(pages: web::Data<Pages>) -> HttpResponse {
    pages.orders.dismiss_error();
    see_other("/orders")
}
