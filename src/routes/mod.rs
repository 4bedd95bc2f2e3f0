mod analytics;
mod authentication;
mod customers;
mod dashboard;
mod health_check;
mod orders;
mod payments;
mod products;
mod queries;
mod reviews;
mod schema;
mod widgets;

use actix_web::{error::ErrorInternalServerError, http::header, HttpResponse};
use askama::Template;

use crate::pages::{Banner, BannerKind, FieldErrors};

pub use analytics::{analytics_page, dismiss_analytics_error};
pub use authentication::{dismiss_login_error, login, login_form, logout};
pub use customers::{customers_page, dismiss_customers_error};
pub use dashboard::{dashboard_page, dismiss_dashboard_error};
pub use health_check::health_check;
pub use orders::{
    cancel_order_delete, confirm_order_delete, create_order, dismiss_order_error, edit_order_form,
    get_orders, request_order_delete, update_order,
};
pub use payments::{dismiss_payments_error, payments_page};
pub use products::{dismiss_products_error, products_page};
pub use queries::{dismiss_queries_error, queries_page};
pub use reviews::{
    cancel_review_delete, confirm_review_delete, create_review, dismiss_review_error,
    edit_review_form, get_reviews, request_review_delete, update_review,
};
pub use schema::{dismiss_schema_error, schema_page};
pub use widgets::{
    customers_by_city_widget, customers_by_state_widget, order_funnel_widget,
    orders_by_customer_widget, payments_by_type_widget, products_by_category_widget,
    review_stats_widget, review_vs_delivery_widget, revenue_by_category_widget,
    sample_customer_widget, top_categories_widget, top_cities_widget, top_sellers_widget,
    top_states_widget, widget_explorer,
};

pub struct BannerView {
    pub text: String,
    pub css_class: &'static str,
    pub dismissible: bool,
}

impl From<Banner> for BannerView {
    fn from(banner: Banner) -> Self {
        BannerView {
            css_class: banner.css_class(),
            dismissible: banner.kind == BannerKind::Error,
            text: banner.text,
        }
    }
}

// Shared page frame: title, active nav entry and the banner.
pub struct Chrome {
    pub title: &'static str,
    pub active: &'static str,
    pub banner: Option<BannerView>,
    pub dismiss_action: Option<&'static str>,
    pub loading: bool,
}

impl Chrome {
    pub fn new(title: &'static str, active: &'static str) -> Chrome {
        Chrome {
            title,
            active,
            banner: None,
            dismiss_action: None,
            loading: false,
        }
    }

    pub fn banner(mut self, banner: Option<Banner>) -> Chrome {
        self.banner = banner.map(BannerView::from);
        self
    }

    pub fn dismiss_with(mut self, action: &'static str) -> Chrome {
        self.dismiss_action = Some(action);
        self
    }

    pub fn loading(mut self, loading: bool) -> Chrome {
        self.loading = loading;
        self
    }
}

pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>, current: &str) -> Choice {
        let value = value.into();
        Choice {
            selected: value == current.trim(),
            label: label.into(),
            value,
        }
    }
}

fn form_messages(errors: &FieldErrors) -> Vec<String> {
    errors.messages().map(str::to_string).collect()
}

fn render<T: Template>(template: &T) -> Result<HttpResponse, actix_web::Error> {
    html(HttpResponse::Ok(), template)
}

fn html<T: Template>(
    mut builder: actix_web::HttpResponseBuilder,
    template: &T,
) -> Result<HttpResponse, actix_web::Error> {
    let body = template.render().map_err(|e| {
        tracing::error!(error = %e, "Failed to render template");
        ErrorInternalServerError(e)
    })?;
    Ok(builder
        .content_type(header::ContentType::html())
        .body(body))
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
