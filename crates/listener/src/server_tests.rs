use relay::{EventGridTrigger, WebhookEndpoint};
use serde_json::json;
use tokio::sync::oneshot;
use webhook::WebhookClient;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use super::*;

#[test]
fn test_listener_config_default() {
    let config = ListenerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 7071);
    assert_eq!(config.addr(), "127.0.0.1:7071");
}

#[test]
fn test_listener_config_new() {
    let config = ListenerConfig::new("0.0.0.0", 8080);
    assert_eq!(config.addr(), "0.0.0.0:8080");
}

#[tokio::test]
async fn test_bind_reports_address_in_use() {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();
    let listener = EventListener::new(
        ListenerConfig::new("127.0.0.1", port),
        FunctionRegistry::new(),
    );

    let err = listener.bind().await.err().unwrap();
    assert!(matches!(err, ListenerError::Bind { .. }));
}

#[tokio::test]
async fn test_delivery_is_relayed_end_to_end() {
    let destination = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/hook"))
        .and(matchers::header("content-type", "application/json"))
        .and(matchers::body_string(r#"{"foo":"bar"}"#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&destination)
        .await;

    let endpoint = WebhookEndpoint::parse(&format!("{}/hook", destination.uri())).unwrap();
    let poster = Arc::new(WebhookClient::new(endpoint).unwrap());
    let mut functions = FunctionRegistry::new();
    functions.register(EventGridTrigger::new(poster));

    let bound = EventListener::new(ListenerConfig::new("127.0.0.1", 0), functions)
        .bind()
        .await
        .unwrap();
    let addr = bound.local_addr().unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(bound.serve(async move {
        let _ = stop_rx.await;
    }));

    let response = reqwest::Client::new()
        .post(format!(
            "http://{addr}/runtime/webhooks/EventGrid?functionName=EventGridTrigger"
        ))
        .header("aeg-event-type", "Notification")
        .json(&json!([{"id": "1", "eventType": "Custom.Event", "data": {"foo": "bar"}}]))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
