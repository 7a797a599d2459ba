//! Integration tests for the export action against a mocked Target API

use cf_offers::config::{secret_string, TargetConfig};
use cf_offers::core::action::{ActionParams, ExportAction};
use mockito::Matcher;
use serde_json::json;

fn action_for(server: &mockito::Server) -> ExportAction {
    let config = TargetConfig {
        base_url: server.url(),
        api_key: Some(secret_string("client-id".to_string())),
        ..Default::default()
    };
    ExportAction::from_config(&config).unwrap()
}

fn valid_params() -> ActionParams {
    ActionParams::new()
        .with_param("tenant", "acme")
        .with_header("Authorization", "Bearer ims-token")
}

#[tokio::test]
async fn test_missing_authorization_makes_no_outbound_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let params = ActionParams::new().with_param("tenant", "acme");
    let response = action_for(&server).run(&params).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"error": {"statusCode": 400, "message": "missing header(s) 'authorization'"}})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_tenant_counts_as_missing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let params = ActionParams::new()
        .with_param("tenant", "")
        .with_header("Authorization", "Bearer ims-token");
    let response = action_for(&server).run(&params).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body["error"]["message"],
        "missing parameter(s) 'tenant'"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_successful_export_returns_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/acme/target/offers/json")
        .match_header("content-type", "application/vnd.adobe.target.v2+json")
        .match_header("authorization", "Bearer ims-token")
        .match_header("x-api-key", "client-id")
        .match_body(Matcher::Json(json!({
            "name": "CF offer name",
            "content": {"content": "The content of the offer"},
            "workspace": "751852935"
        })))
        .with_status(201)
        .with_body(r#"{"id": 4711}"#)
        .expect(1)
        .create_async()
        .await;

    let response = action_for(&server).run(&valid_params()).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, json!("{}"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_rejection_returns_500_with_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/acme/target/offers/json")
        .with_status(403)
        .with_body(r#"{"message": "forbidden"}"#)
        .create_async()
        .await;

    let response = action_for(&server).run(&valid_params()).await;

    assert_eq!(response.status_code, 500);
    let message = response.body["error"]["message"].as_str().unwrap();
    assert!(message.contains("status code 403"), "{message}");
    assert!(message.contains("/acme/target/offers/json"), "{message}");
}

#[tokio::test]
async fn test_missing_api_key_is_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = TargetConfig {
        base_url: server.url(),
        ..Default::default()
    };
    let response = ExportAction::from_config(&config)
        .unwrap()
        .run(&valid_params())
        .await;

    assert_eq!(response.status_code, 500);
    mock.assert_async().await;
}
