use wiremock::{
    matchers::{any, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::helpers::TestApp;

#[actix_web::test]
async fn out_of_range_limit_never_reaches_the_backend(){
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.get("/widgets/customers/top-cities?limit=0").await;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("widget-result invalid"));
    assert!(html.contains("Limit must be between 1 and 50."));
    assert!(!html.contains("<table"));
}

#[actix_web::test]
async fn blank_state_is_rejected_with_an_example(){
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/customers/by-state?state=%20%20").await;
    assert!(html.contains("State is required (e.g. SP)."));
}

#[actix_web::test]
async fn top_cities_render_one_row_per_city(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/customers/top-cities"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"customer_city": "sao_paulo", "customer_count": 15540},
            {"customer_city": "rio_de_janeiro", "customer_count": 6882}
        ])))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/customers/top-cities?limit=3").await;

    assert!(html.contains("widget-result success"));
    assert!(html.contains("<td>sao_paulo</td>"));
    assert!(html.contains("<td>rio_de_janeiro</td>"));
    assert_eq!(html.matches("<tr>").count(), 3);
}

#[actix_web::test]
async fn single_city_renders_exactly_its_two_columns(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/customers/top-cities"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"customer_city": "sao_paulo", "customer_count": 500}
        ])))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/customers/top-cities?limit=10").await;

    assert!(html.contains("<tr><td>sao_paulo</td><td>500</td></tr>"));
    assert_eq!(html.matches("<td>").count(), 2);
}

#[actix_web::test]
async fn blank_limit_falls_back_to_the_default(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/geo/top-states"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{"customer_state": "SP", "customer_count": 41746}]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/customers/top-states?limit=").await;
    assert!(html.contains("<td>SP</td>"));
}

#[actix_web::test]
async fn no_rows_show_a_message_instead_of_a_table(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/customers/by-city"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "params": {"state": "SP", "city": "nowhere", "limit": 10},
            "data": []
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/customers/by-city?state=sp&city=nowhere").await;

    assert!(html.contains("No data found."));
    assert!(!html.contains("<table"));
}

#[actix_web::test]
async fn database_outage_is_reported_without_the_server_text(){
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({"error": "psycopg2 OperationalError"}))
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/products/top-categories").await;

    assert!(html.contains("widget-result error"));
    assert!(html.contains("API is running but the database connection failed."));
    assert!(!html.contains("psycopg2"));
}

#[actix_web::test]
async fn backend_validation_message_is_shown_as_is(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/analytics/top-sellers"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"ok": false, "error": "limit must be at most 100"}))
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/analytics/top-sellers?limit=100").await;
    assert!(html.contains("limit must be at most 100"));
}

#[actix_web::test]
async fn unreachable_backend_is_reported(){
    let app = TestApp::spawn_without_backend().await;

    let html = app.get_html("/widgets/analytics/order-funnel").await;

    assert!(html.contains("widget-result error"));
    assert!(html.contains("API not reachable. Is the backend running at"));
}

#[actix_web::test]
async fn payments_by_type_are_summarised(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/payments/by-type"))
        .and(query_param("payment_type", "voucher"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payment_type": "voucher",
            "limit": 20,
            "row_count": 2,
            "payments": [
                {"order_id": "o1", "payment_sequential": 1, "payment_type": "voucher", "payment_installments": 1, "payment_value": 10.5},
                {"order_id": "o2", "payment_sequential": 1, "payment_type": "voucher", "payment_installments": 1, "payment_value": 9.4}
            ]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/payments/by-type?payment_type=voucher").await;

    assert!(html.contains("Total value"));
    assert!(html.contains("19.90"));
    assert!(!html.contains("<table"));
}

#[actix_web::test]
async fn inverted_score_range_is_rejected_locally(){
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/reviews/stats?min_score=5&max_score=2").await;
    assert!(html.contains("Min score cannot be greater than max score."));
}

#[actix_web::test]
async fn sample_customer_is_offered(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/orders/sample-customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sample_ids": ["9ef432eb6251297304e76186b10a928d"]
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let html = app.get_html("/widgets/orders/sample-customer").await;
    assert!(html.contains("9ef432eb6251297304e76186b10a928d"));
}

#[actix_web::test]
async fn explorer_lists_every_widget(){
    let app = TestApp::spawn_app().await;

    let html = app.get_html("/widgets").await;

    assert!(html.contains("Customers by state"));
    assert!(html.contains("Review statistics"));
    assert!(html.contains("Order funnel"));
}
