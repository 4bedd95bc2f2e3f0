//! Fetch/render widgets.
//!
//! Each operation takes raw form input, validates it, sends at most one
//! request and returns a [`WidgetView`]. Invalid input never reaches the backend.

mod analytics;
mod customers;
mod orders;
mod payments;
mod products;
mod reviews;

use crate::{
    api::{AnalyticsApi, ApiClient, ApiError, CustomersApi, OrdersApi, PaymentsApi, ProductsApi, ReviewsApi},
    error_classifier::ErrorClassifier,
    messages::{Message, SharedCatalog},
    views::{Table, TableRow, WidgetView},
};

pub use analytics::AnalyticsWidgets;
pub use customers::CustomerWidgets;
pub use orders::OrderWidgets;
pub use payments::PaymentWidgets;
pub use products::ProductWidgets;
pub use reviews::ReviewWidgets;

#[derive(Clone)]
pub struct Widgets {
    pub customers: CustomerWidgets,
    pub orders: OrderWidgets,
    pub payments: PaymentWidgets,
    pub products: ProductWidgets,
    pub reviews: ReviewWidgets,
    pub analytics: AnalyticsWidgets,
}

impl Widgets {
    pub fn new(client: ApiClient, catalog: SharedCatalog) -> Widgets {
        let errors = ErrorClassifier::new(client.base_url(), catalog);
        Widgets {
            customers: CustomerWidgets::new(CustomersApi::new(client.clone()), errors.clone()),
            orders: OrderWidgets::new(OrdersApi::new(client.clone()), errors.clone()),
            payments: PaymentWidgets::new(PaymentsApi::new(client.clone()), errors.clone()),
            products: ProductWidgets::new(ProductsApi::new(client.clone()), errors.clone()),
            reviews: ReviewWidgets::new(ReviewsApi::new(client.clone()), errors.clone()),
            analytics: AnalyticsWidgets::new(AnalyticsApi::new(client), errors),
        }
    }
}

fn invalid(errors: &ErrorClassifier, message: Message) -> WidgetView {
    tracing::info!(?message, "Widget input rejected");
    WidgetView::Invalid(errors.render(&message))
}

fn failed(errors: &ErrorClassifier, error: &ApiError) -> WidgetView {
    tracing::warn!(?error, "Widget request failed");
    WidgetView::Failed(errors.describe(error))
}

fn rows<R: TableRow>(errors: &ErrorClassifier, outcome: Result<Vec<R>, ApiError>) -> WidgetView {
    match outcome {
        Ok(rows) if rows.is_empty() => WidgetView::Empty(errors.render(&Message::NoData)),
        Ok(rows) => WidgetView::Table(Table::from_rows(&rows)),
        Err(e) => failed(errors, &e),
    }
}
