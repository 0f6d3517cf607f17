use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn test_health_endpoint() {
    let app = router(Arc::new(FunctionRegistry::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_delivery_endpoint_rejects_get() {
    let app = router(Arc::new(FunctionRegistry::new()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/runtime/webhooks/EventGrid?functionName=EventGridTrigger")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_empty_registry_reports_unknown_function() {
    let app = router(Arc::new(FunctionRegistry::new()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/runtime/webhooks/EventGrid?functionName=EventGridTrigger")
                .body(Body::from("[]"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
