use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{assert_is_redirect_to, TestApp};

const ORDER_ID: &str = "e481f51cbdc54678b7cc49136f2d6af7";

async fn mount_order_listing(app: &TestApp, orders: serde_json::Value){
    Mock::given(method("GET"))
        .and(path("/orders/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orders))
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/orders/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_orders": 99441,
            "total_items": 112650,
            "avg_items_per_order": 1.14,
            "total_revenue": 13591643.7
        })))
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/orders/customers/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"customer_id": "cust-0001", "customer_city": "campinas", "customer_state": "SP"}
        ])))
        .mount(&app.backend)
        .await;
}

fn one_order() -> serde_json::Value{
    serde_json::json!([{
        "order_id": ORDER_ID,
        "customer_id": "9ef432eb6251297304e76186b10a928d",
        "order_status": "delivered",
        "order_purchase_timestamp": "2017-10-02 10:56:33",
        "payment_type": "credit_card",
        "payment_value": 38.71
    }])
}

#[actix_web::test]
async fn orders_page_lists_recent_orders_and_stats(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, one_order()).await;

    let response = app.get("/orders").await;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("e481f51c..."));
    assert!(html.contains("99,441"));
    assert!(html.contains("38.71"));
}

#[actix_web::test]
async fn status_filter_hides_other_orders(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, one_order()).await;

    let html = app.get_html("/orders?status=shipped").await;

    assert!(html.contains("Found 0 orders matching your filters."));
    assert!(html.contains("No rows match your search criteria."));
}

#[actix_web::test]
async fn invalid_order_form_is_rejected_without_a_request(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, serde_json::json!([])).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/orders", &serde_json::json!({
        "customer_id": "",
        "order_status": "shipped",
        "payment_type": "boleto",
        "payment_value": "-5"
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    let html = response.text().await.unwrap();
    assert!(html.contains("Please select a value for customer."));
    assert!(html.contains("Payment value must be greater than 0."));
}

#[actix_web::test]
async fn created_order_is_announced_after_redirect(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, one_order()).await;

    Mock::given(method("POST"))
        .and(path("/orders/"))
        .and(body_json(serde_json::json!({
            "customer_id": "cust-0001",
            "order_status": "processing",
            "payment_type": "voucher",
            "payment_value": 49.9
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "order_id": "0123456789abcdef"
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/orders", &serde_json::json!({
        "customer_id": "cust-0001",
        "order_status": "processing",
        "payment_type": "voucher",
        "payment_value": "49.90"
    })).await;
    assert_is_redirect_to(&response, "/orders");

    let html = app.get_html("/orders").await;
    assert!(html.contains("Order created successfully! ID: 01234567..."));
    assert!(html.contains("banner success"));
}

#[actix_web::test]
async fn backend_rejection_of_a_new_order_shows_its_message(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, serde_json::json!([])).await;

    Mock::given(method("POST"))
        .and(path("/orders/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "Unknown customer"}))
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/orders", &serde_json::json!({
        "customer_id": "cust-9999",
        "order_status": "processing",
        "payment_type": "voucher",
        "payment_value": "10"
    })).await;
    assert_is_redirect_to(&response, "/orders");

    let html = app.get_html("/orders").await;
    assert!(html.contains("Unknown customer"));
    assert!(html.contains("banner error"));

    // Error banners stay until dismissed.
    let html = app.get_html("/orders").await;
    assert!(html.contains("Unknown customer"));

    let response = app.post_form("/orders/dismiss-error", &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/orders");
    let html = app.get_html("/orders").await;
    assert!(!html.contains("Unknown customer"));
}

#[actix_web::test]
async fn order_delete_requires_confirmation(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, one_order()).await;

    Mock::given(method("DELETE"))
        .and(path(format!("/orders/{}", ORDER_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.backend)
        .await;

    // Confirming without opening the confirmation sends nothing.
    let response = app.post_form(&format!("/orders/{}/delete", ORDER_ID), &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/orders");
    let html = app.get_html("/orders").await;
    assert!(html.contains("Nothing to delete. Open the delete confirmation first."));

    let response = app.get(&format!("/orders/{}/delete", ORDER_ID)).await;
    assert_is_redirect_to(&response, "/orders");
    let html = app.get_html("/orders").await;
    assert!(html.contains("Are you sure you want to delete this order? This action cannot be undone."));

    // From here on the backend no longer lists the order.
    Mock::given(method("GET"))
        .and(path("/orders/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .with_priority(1)
        .mount(&app.backend)
        .await;

    let response = app.post_form(&format!("/orders/{}/delete", ORDER_ID), &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/orders");
    let html = app.get_html("/orders").await;
    assert!(html.contains("Order deleted successfully!"));
    assert!(!html.contains("Are you sure you want to delete this order?"));
    assert!(!html.contains("e481f51c..."));
}

#[actix_web::test]
async fn cancelled_delete_sends_nothing(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, one_order()).await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    app.get(&format!("/orders/{}/delete", ORDER_ID)).await;
    let response = app.post_form("/orders/delete/cancel", &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/orders");

    let html = app.get_html("/orders").await;
    assert!(!html.contains("Are you sure you want to delete this order?"));
}

#[actix_web::test]
async fn edit_form_is_prefilled_from_the_backend(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path(format!("/orders/{}", ORDER_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "order_id": ORDER_ID,
            "customer_id": "9ef432eb6251297304e76186b10a928d",
            "order_status": "shipped",
            "payment_type": "boleto",
            "payment_value": 120.5
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.get(&format!("/orders/{}/edit", ORDER_ID)).await;
    assert_eq!(response.status().as_u16(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("120.5"));
    assert!(html.contains(r#"value="shipped" selected"#));
}

#[actix_web::test]
async fn blank_payment_value_is_left_out_of_the_update(){
    let app = TestApp::spawn_app().await;
    mount_order_listing(&app, one_order()).await;

    Mock::given(method("PUT"))
        .and(path(format!("/orders/{}", ORDER_ID)))
        .and(body_json(serde_json::json!({
            "order_status": "canceled",
            "payment_type": "debit_card"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.backend)
        .await;

    let response = app.post_form(&format!("/orders/{}", ORDER_ID), &serde_json::json!({
        "order_status": "canceled",
        "payment_type": "debit_card",
        "payment_value": ""
    })).await;
    assert_is_redirect_to(&response, "/orders");

    let html = app.get_html("/orders").await;
    assert!(html.contains("Order updated successfully!"));
}
