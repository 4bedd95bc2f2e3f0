use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::helpers::{assert_is_redirect_to, TestApp};

#[actix_web::test]
async fn dashboard_shows_totals_and_backend_health(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "customers": 99441, "orders": 99441, "products": 32951, "reviews": 99224
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "api_status": "ok",
            "db_connected": true,
            "table_counts": {"customers": 99441, "sellers": "error: relation missing"},
            "errors": []
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/").await;

    assert!(html.contains("32,951"));
    assert!(html.contains("database connected"));
    assert!(html.contains("<td>sellers</td><td>error: relation missing</td>"));
}

#[actix_web::test]
async fn dashboard_error_banner_stays_until_dismissed(){
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({"error": "db down"})))
        .mount(&app.backend)
        .await;

    let html = app.get_html("/").await;
    assert!(html.contains("banner error"));
    assert!(html.contains("API is running but the database connection failed."));

    let response = app.post_form("/dismiss-error", &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/");
}

#[actix_web::test]
async fn dashboard_reports_an_unreachable_backend(){
    let app = TestApp::spawn_without_backend().await;

    let html = app.get_html("/").await;
    assert!(html.contains("API not reachable. Is the backend running at"));
}

#[actix_web::test]
async fn customers_page_only_searches_when_asked(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/customers/top-cities"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"customer_city": "sao_paulo", "customer_count": 15540},
            {"customer_city": "rio_de_janeiro", "customer_count": 6882}
        ])))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/customers").await;
    assert!(!html.contains("<table"));

    let html = app.get_html("/customers?view=top-cities&limit=2").await;
    assert!(html.contains("<td>sao_paulo</td>"));
    assert!(html.contains("<td>15,540</td>"));
}

#[actix_web::test]
async fn customers_by_state_are_cut_to_the_limit(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/customers/by-state"))
        .and(query_param("state", "RJ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"customer_id": "c-1", "customer_city": "niteroi", "customer_state": "RJ"},
            {"customer_id": "c-2", "customer_city": "niteroi", "customer_state": "RJ"},
            {"customer_id": "c-3", "customer_city": "niteroi", "customer_state": "RJ"}
        ])))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/customers?view=by-state&state=rj&limit=2").await;

    assert!(html.contains("<td>c-2</td>"));
    assert!(!html.contains("<td>c-3</td>"));
}

#[actix_web::test]
async fn queries_page_runs_the_selected_query(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/queries/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "queries": [
                {"id": "top_categories", "name": "Top categories", "description": "Best selling categories"}
            ]
        })))
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/queries/top_categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query_name": "Top categories",
            "description": "Best selling categories",
            "sql": "SELECT category FROM products",
            "results": [{"category": "cama_mesa_banho", "total": 11115}],
            "tables_used": ["products"]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/queries").await;
    assert!(html.contains("Best selling categories"));
    assert!(!html.contains("SELECT category FROM products"));

    let html = app.get_html("/queries?run=top_categories").await;
    assert!(html.contains("SELECT category FROM products"));
    assert!(html.contains("<td>cama_mesa_banho</td>"));
}

#[actix_web::test]
async fn schema_page_lists_tables(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tables": [{
                "name": "orders",
                "description": "One row per order",
                "columns": ["order_id", "customer_id"],
                "pk": "order_id",
                "fk": [{"column": "customer_id", "references": "customers.customer_id"}]
            }],
            "relationships": ["customers 1-N orders"]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/schema").await;

    assert!(html.contains("One row per order"));
    assert!(html.contains("customers.customer_id"));
    assert!(html.contains("customers 1-N orders"));
}
