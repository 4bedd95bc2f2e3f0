use actix_web::{web, HttpResponse};
use askama::Template;

use crate::pages::{orders::OrderEditForm, FieldErrors, Pages, Submission};

use super::{
    super::{form_messages, html, render, see_other, Chrome, Choice},
    payment_choices, status_choices,
};

#[derive(Template)]
#[template(path = "order_edit.html")]
struct OrderEditTemplate {
    chrome: Chrome,
    order_id: String,
    form_errors: Vec<String>,
    statuses: Vec<Choice>,
    payment_methods: Vec<Choice>,
    payment_value: String,
}

impl OrderEditTemplate {
    fn new(order_id: String, form: &OrderEditForm, errors: &FieldErrors) -> Self {
        OrderEditTemplate {
            chrome: Chrome::new("Edit order", "orders"),
            order_id,
            form_errors: form_messages(errors),
            statuses: status_choices(&form.order_status),
            payment_methods: payment_choices(&form.payment_type),
            payment_value: form.payment_value.clone(),
        }
    }
}

#[tracing::instrument("Showing order edit form", skip(pages))]
pub async fn edit_order_form(
    pages: web::Data<Pages>,
    path: web::Path<String>,
) -> Result<HttpResponse, actix_web::Error> {
    let order_id = path.into_inner();
    match pages.orders.open_edit(&order_id).await {
        Some(order) => render(&OrderEditTemplate::new(
            order.order_id.clone(),
            &OrderEditForm::from(&order),
            &FieldErrors::default(),
        )),
        None => Ok(see_other("/orders")),
    }
}

#[tracing::instrument("Updating order", skip(pages))]
pub async fn update_order(
    pages: web::Data<Pages>,
    path: web::Path<String>,
    form: web::Form<OrderEditForm>,
) -> Result<HttpResponse, actix_web::Error> {
    let order_id = path.into_inner();
    match pages.orders.update(&order_id, &form).await {
        Submission::Rejected(errors) => html(
            HttpResponse::BadRequest(),
            &OrderEditTemplate::new(order_id, &form, &errors),
        ),
        Submission::Accepted | Submission::Failed => Ok(see_other("/orders")),
    }
}
