use wiremock::{
    matchers::{any, body_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{assert_is_redirect_to, TestApp};

fn analyst() -> serde_json::Value{
    serde_json::json!({
        "username": "analyst",
        "name": "Ana Lima",
        "role": "viewer"
    })
}

#[actix_web::test]
async fn login_page_shows_the_form_when_logged_out(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "Not logged in"})))
        .mount(&app.backend)
        .await;

    let html = app.get_html("/login").await;

    assert!(html.contains(r#"name="password""#));
    assert!(!html.contains("Not logged in"));
}

#[actix_web::test]
async fn successful_login_greets_the_user(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({"username": "analyst", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "user": analyst()
        })))
        .expect(1)
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "logged_in": true,
            "user": analyst()
        })))
        .mount(&app.backend)
        .await;

    let response = app.post_form("/login", &serde_json::json!({
        "username": "analyst",
        "password": "hunter2"
    })).await;
    assert_is_redirect_to(&response, "/");

    let html = app.get_html("/login").await;
    assert!(html.contains("Welcome back, Ana Lima!"));
    assert!(html.contains("Logged in as <strong>Ana Lima</strong>"));
}

#[actix_web::test]
async fn rejected_credentials_show_the_backend_message(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "Invalid credentials"})))
        .expect(1)
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"logged_in": false})))
        .mount(&app.backend)
        .await;

    let response = app.post_form("/login", &serde_json::json!({
        "username": "analyst",
        "password": "wrong"
    })).await;
    assert_is_redirect_to(&response, "/login");

    let html = app.get_html("/login").await;
    assert!(html.contains("Invalid credentials"));
    assert!(html.contains("banner error"));
}

#[actix_web::test]
async fn blank_credentials_never_reach_the_backend(){
    let app = TestApp::spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let response = app.post_form("/login", &serde_json::json!({
        "username": "  ",
        "password": ""
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    let html = response.text().await.unwrap();
    assert!(html.contains("Username is required."));
    assert!(html.contains("Password is required."));
}

#[actix_web::test]
async fn logout_ends_the_backend_session(){
    let app = TestApp::spawn_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&app.backend)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"logged_in": false})))
        .mount(&app.backend)
        .await;

    let response = app.post_form("/logout", &serde_json::json!({})).await;
    assert_is_redirect_to(&response, "/login");

    let html = app.get_html("/login").await;
    assert!(html.contains("You have been logged out."));
}
