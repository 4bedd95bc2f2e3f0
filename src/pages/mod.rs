//! Page controllers.
//!
//! One controller per dashboard page, created at startup and shared by every
//! request. Each owns a [`state::ViewState`] and talks to the backend only
//! through its API client.

pub mod analytics;
pub mod customers;
pub mod dashboard;
pub mod form;
pub mod login;
pub mod orders;
pub mod payments;
pub mod products;
pub mod queries;
pub mod reviews;
pub mod schema;
pub mod state;

use crate::{
    api::{AnalyticsApi, ApiClient, AuthApi, CustomersApi, OrdersApi, PaymentsApi, ProductsApi, ReviewsApi},
    error_classifier::ErrorClassifier,
    messages::{Message, SharedCatalog},
};

pub use analytics::AnalyticsPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use form::{FieldErrors, Submission};
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use payments::PaymentsPage;
pub use products::ProductsPage;
pub use queries::QueriesPage;
pub use reviews::ReviewsPage;
pub use schema::SchemaPage;
pub use state::{Banner, BannerKind, Snapshot, ViewState};

pub struct Pages {
    pub dashboard: DashboardPage,
    pub customers: CustomersPage,
    pub orders: OrdersPage,
    pub products: ProductsPage,
    pub payments: PaymentsPage,
    pub reviews: ReviewsPage,
    pub analytics: AnalyticsPage,
    pub queries: QueriesPage,
    pub schema: SchemaPage,
    pub login: LoginPage,
    catalog: SharedCatalog,
}

impl Pages {
    pub fn new(client: ApiClient, catalog: SharedCatalog) -> Pages {
        let errors = ErrorClassifier::new(client.base_url(), catalog.clone());
        let analytics = AnalyticsApi::new(client.clone());
        Pages {
            dashboard: DashboardPage::new(analytics.clone(), errors.clone()),
            customers: CustomersPage::new(CustomersApi::new(client.clone()), errors.clone()),
            orders: OrdersPage::new(OrdersApi::new(client.clone()), errors.clone()),
            products: ProductsPage::new(ProductsApi::new(client.clone()), errors.clone()),
            payments: PaymentsPage::new(PaymentsApi::new(client.clone()), errors.clone()),
            reviews: ReviewsPage::new(ReviewsApi::new(client.clone()), errors.clone()),
            analytics: AnalyticsPage::new(analytics.clone(), errors.clone()),
            queries: QueriesPage::new(analytics.clone(), errors.clone()),
            schema: SchemaPage::new(analytics, errors.clone()),
            login: LoginPage::new(AuthApi::new(client), errors),
            catalog,
        }
    }

    pub fn text(&self, message: &Message) -> String {
        self.catalog.render(message)
    }
}
