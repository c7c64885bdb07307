use reqwest::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_serve_stylesheet() {
    let app = TestApp::new().await;

    let response = app.get_asset("style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains(".field-error"));
}

#[tokio::test]
async fn should_return_404_for_missing_asset() {
    let app = TestApp::new().await;

    let response = app.get_asset("missing.css").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
