use http_ip_gateway::test::test_tracing::initialize_testing_tracing_subscriber;
use http_ip_gateway::ErrorResponse;
use reqwest::StatusCode;
use setup::TestApp;

mod setup;

#[tokio::test(flavor = "multi_thread")]
async fn disallowed_client_is_rejected() {
    initialize_testing_tracing_subscriber();

    // Loopback is the only address a local test client can connect from, so
    // an allowlist without it rejects the request.
    let app = TestApp::spawn_with_allowed_ips("203.0.113.7").await;

    let response = app
        .client
        .get(format!("http://{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.text().await.expect("Failed to read response body");
    let error: ErrorResponse = serde_json::from_str(&body).expect("Body is not an error response");
    assert_eq!(error.error, "Forbidden access");
}

#[tokio::test(flavor = "multi_thread")]
async fn client_in_allowed_network_passes() {
    initialize_testing_tracing_subscriber();

    let app = TestApp::spawn_with_allowed_ips("127.0.0.0/8").await;

    let response = app
        .client
        .get(format!("http://{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.text().await.expect("Failed to read response body");
    assert_eq!(body, "Hello world");
}

#[tokio::test(flavor = "multi_thread")]
async fn allowed_forwarded_address_admits_request() {
    initialize_testing_tracing_subscriber();

    let app = TestApp::spawn_with_allowed_ips("203.0.113.7").await;

    let response = app
        .client
        .get(format!("http://{}/", app.address))
        .header("X-Forwarded-For", "203.0.113.7")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}
