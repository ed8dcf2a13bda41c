use axum_crud_api::routes::health::health_check;

#[tokio::test]
async fn health_reports_liveness_and_version() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Service is running");
    assert_eq!(response.0.data.status, "up");
    assert_eq!(response.0.data.version, env!("CARGO_PKG_VERSION"));
}
