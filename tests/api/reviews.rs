use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

use crate::helpers::{assert_is_redirect_to, TestApp};

async fn mount_review_listing(app: &TestApp, reviews: serde_json::Value){
    Mock::given(method("GET"))
        .and(path("/reviews/stats"))
        .and(query_param("min_score", "1"))
        .and(query_param("max_score", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "min_score": 1,
            "max_score": 5,
            "total_reviews": 4,
            "average_score": 4.25,
            "stats": [
                {"review_score": 5, "review_count": 2},
                {"review_score": 4, "review_count": 1},
                {"review_score": 3, "review_count": 1}
            ]
        })))
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/reviews/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reviews))
        .mount(&app.backend)
        .await;
}

fn one_review() -> serde_json::Value{
    serde_json::json!([{
        "review_id": "rev-123456789",
        "order_id": "ord-1",
        "review_score": 5,
        "review_comment_message": "Arrived early, great seller"
    }])
}

#[actix_web::test]
async fn reviews_page_shows_overview_and_rows(){
    let app = TestApp::spawn_app().await;
    mount_review_listing(&app, one_review()).await;

    let html = app.get_html("/reviews").await;

    assert!(html.contains("4.25"));
    assert!(html.contains("75.0%"));
    assert!(html.contains(r#"title="5">★★★★★</td>"#));
    assert!(html.contains("Arrived early, great seller"));
}

#[actix_web::test]
async fn created_review_shows_up_in_the_refetched_list(){
    let app = TestApp::spawn_app().await;
    mount_review_listing(&app, serde_json::json!([])).await;

    let html = app.get_html("/reviews").await;
    assert!(!html.contains("o123"));

    Mock::given(method("POST"))
        .and(path("/reviews/"))
        .and(body_json(serde_json::json!({
            "order_id": "o123",
            "review_score": 5,
            "review_comment_message": "great"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "review_id": "rev-123456789"
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    // Refetched once after the create and once by the redirected page.
    Mock::given(method("GET"))
        .and(path("/reviews/recent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "review_id": "rev-123456789",
            "order_id": "o123",
            "review_score": 5,
            "review_comment_message": "great"
        }])))
        .with_priority(1)
        .expect(2)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/reviews", &serde_json::json!({
        "order_id": " o123 ",
        "review_score": "5",
        "review_comment_message": "  great "
    })).await;
    assert_is_redirect_to(&response, "/reviews");

    let html = app.get_html("/reviews").await;
    assert!(html.contains("Review created successfully! ID: rev-1234..."));
    let row = html
        .split("<tr")
        .find(|row| row.contains("o123"))
        .expect("new review row is listed");
    assert!(row.contains("★★★★★"));
    assert!(row.contains("great"));
}

#[actix_web::test]
async fn out_of_range_score_is_rejected_without_a_request(){
    let app = TestApp::spawn_app().await;
    mount_review_listing(&app, serde_json::json!([])).await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/reviews", &serde_json::json!({
        "order_id": "",
        "review_score": "9",
        "review_comment_message": ""
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    let html = response.text().await.unwrap();
    assert!(html.contains("Order ID is required."));
    assert!(html.contains("Review score must be between 1 and 5."));
}

#[actix_web::test]
async fn review_edit_starts_from_the_listed_review(){
    let app = TestApp::spawn_app().await;
    mount_review_listing(&app, one_review()).await;

    Mock::given(method("PUT"))
        .and(path("/reviews/rev-123456789"))
        .and(body_json(serde_json::json!({
            "review_score": 2,
            "review_comment_message": "Changed my mind"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.backend)
        .await;

    // The edit form is only reachable for reviews the page has loaded.
    let response = app.get("/reviews/rev-123456789/edit").await;
    assert_is_redirect_to(&response, "/reviews");

    app.get("/reviews").await;
    let response = app.get("/reviews/rev-123456789/edit").await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await.unwrap().contains("Arrived early, great seller"));

    let response = app.post_form("/reviews/rev-123456789", &serde_json::json!({
        "review_score": "2",
        "review_comment_message": "Changed my mind"
    })).await;
    assert_is_redirect_to(&response, "/reviews");

    let html = app.get_html("/reviews").await;
    assert!(html.contains("Review updated successfully!"));
}

#[actix_web::test]
async fn review_delete_sends_one_request_after_confirmation(){
    let app = TestApp::spawn_app().await;
    mount_review_listing(&app, one_review()).await;

    Mock::given(method("DELETE"))
        .and(path("/reviews/rev-123456789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.get("/reviews/rev-123456789/delete").await;
    let html = app.get_html("/reviews").await;
    assert!(html.contains("Are you sure you want to delete this review? This action cannot be undone."));

    let response = app.post_form("/reviews/rev-123456789/delete", &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/reviews");

    // A second confirmation has nothing pending.
    app.post_form("/reviews/rev-123456789/delete", &serde_json::json!({})).await;
    let html = app.get_html("/reviews").await;
    assert!(html.contains("Nothing to delete. Open the delete confirmation first."));
}
