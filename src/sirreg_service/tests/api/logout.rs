use reqwest::StatusCode;

use crate::helpers::{TestApp, location};

#[tokio::test]
async fn should_end_session_and_redirect_to_login() {
    let app = TestApp::new().await;
    app.register_and_login("alice", "5550000001").await;
    assert_eq!(app.get_home().await.status(), StatusCode::OK);

    let response = app.post_logout().await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?logout="));

    let response = app.get_home().await;
    assert_eq!(location(&response), "/login");
}
