use http_ip_gateway::test::test_tracing::initialize_testing_tracing_subscriber;
use reqwest::StatusCode;
use setup::TestApp;

mod setup;

#[tokio::test(flavor = "multi_thread")]
async fn hello_works() {
    initialize_testing_tracing_subscriber();

    let app = TestApp::spawn().await;

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
async fn unknown_path_is_not_found() {
    initialize_testing_tracing_subscriber();

    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("http://{}/missing", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn post_to_root_is_method_not_allowed() {
    initialize_testing_tracing_subscriber();

    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(format!("http://{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
