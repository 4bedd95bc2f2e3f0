use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    api::ApiClient,
    configuration::Settings,
    messages::English,
    pages::Pages,
    routes::*,
    widgets::Widgets,
};

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))?;
        let host = settings.application.host;
        let port = listener.local_addr()?.port();

        let client = ApiClient::from_settings(&settings.backend)?;
        let catalog = English::shared();
        let pages = web::Data::new(Pages::new(client.clone(), catalog.clone()));
        let widgets = web::Data::new(Widgets::new(client, catalog));

        tracing::info!(%host, port, backend = %settings.backend.base_url, "Starting dashboard");
        let server = get_server(listener, pages, widgets)?;

        Ok(Application{
            host,
            port,
            server
        })
    }
}

fn get_server(
    listener: TcpListener,
    pages: web::Data<Pages>,
    widgets: web::Data<Widgets>
) -> Result<Server, anyhow::Error>{
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(pages.clone())
            .app_data(widgets.clone())
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(dashboard_page))
            .route("/dismiss-error", web::post().to(dismiss_dashboard_error))
            .route("/login", web::get().to(login_form))
            .route("/login", web::post().to(login))
            .route("/login/dismiss-error", web::post().to(dismiss_login_error))
            .route("/logout", web::post().to(logout))
            .service(
                web::scope("/customers")
                    .route("", web::get().to(customers_page))
                    .route("/dismiss-error", web::post().to(dismiss_customers_error))
            )
            .service(
                web::scope("/orders")
                    .route("", web::get().to(get_orders))
                    .route("", web::post().to(create_order))
                    .route("/dismiss-error", web::post().to(dismiss_order_error))
                    .route("/delete/cancel", web::post().to(cancel_order_delete))
                    .route("/{order_id}", web::post().to(update_order))
                    .route("/{order_id}/edit", web::get().to(edit_order_form))
                    .route("/{order_id}/delete", web::get().to(request_order_delete))
                    .route("/{order_id}/delete", web::post().to(confirm_order_delete))
            )
            .service(
                web::scope("/reviews")
                    .route("", web::get().to(get_reviews))
                    .route("", web::post().to(create_review))
                    .route("/dismiss-error", web::post().to(dismiss_review_error))
                    .route("/delete/cancel", web::post().to(cancel_review_delete))
                    .route("/{review_id}", web::post().to(update_review))
                    .route("/{review_id}/edit", web::get().to(edit_review_form))
                    .route("/{review_id}/delete", web::get().to(request_review_delete))
                    .route("/{review_id}/delete", web::post().to(confirm_review_delete))
            )
            .route("/products", web::get().to(products_page))
            .route("/products/dismiss-error", web::post().to(dismiss_products_error))
            .route("/payments", web::get().to(payments_page))
            .route("/payments/dismiss-error", web::post().to(dismiss_payments_error))
            .route("/analytics", web::get().to(analytics_page))
            .route("/analytics/dismiss-error", web::post().to(dismiss_analytics_error))
            .route("/queries", web::get().to(queries_page))
            .route("/queries/dismiss-error", web::post().to(dismiss_queries_error))
            .route("/schema", web::get().to(schema_page))
            .route("/schema/dismiss-error", web::post().to(dismiss_schema_error))
            .service(
                web::scope("/widgets")
                    .route("", web::get().to(widget_explorer))
                    .route("/customers/by-state", web::get().to(customers_by_state_widget))
                    .route("/customers/top-cities", web::get().to(top_cities_widget))
                    .route("/customers/by-city", web::get().to(customers_by_city_widget))
                    .route("/customers/top-states", web::get().to(top_states_widget))
                    .route("/orders/by-customer", web::get().to(orders_by_customer_widget))
                    .route("/orders/sample-customer", web::get().to(sample_customer_widget))
                    .route("/payments/by-type", web::get().to(payments_by_type_widget))
                    .route("/products/by-category", web::get().to(products_by_category_widget))
                    .route("/products/top-categories", web::get().to(top_categories_widget))
                    .route("/reviews/stats", web::get().to(review_stats_widget))
                    .route("/analytics/revenue-by-category", web::get().to(revenue_by_category_widget))
                    .route("/analytics/top-sellers", web::get().to(top_sellers_widget))
                    .route("/analytics/review-vs-delivery", web::get().to(review_vs_delivery_widget))
                    .route("/analytics/order-funnel", web::get().to(order_funnel_widget))
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
