use reqwest::StatusCode;

use crate::helpers::{TestApp, location};

#[tokio::test]
async fn should_redirect_anonymous_visitor_to_login() {
    let app = TestApp::new().await;

    let response = app.get_home().await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn should_greet_logged_in_user() {
    let app = TestApp::new().await;
    app.register_and_login("alice", "5550000001").await;

    let response = app.get_home().await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Welcome, alice"));
    assert!(body.contains("[USER]"));
}
