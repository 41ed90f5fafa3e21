use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::ai_types::Message;
use crate::chat::{ChatModel, ReplyFormat};
use crate::client::{LlmClient, truncate};
use crate::error::LlmError;

fn client_for(server: &MockServer) -> LlmClient {
    LlmClient::new("test-key".to_owned(), format!("{}/", server.uri()), "test-model".to_owned())
        .unwrap()
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{
            "message": {
                "content": content,
                "role": "assistant"
            }
        }]
    }))
}

#[tokio::test]
async fn test_success_returns_first_choice() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(completion("test response"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.complete(vec![Message::user("hello")], ReplyFormat::Text).await.unwrap();
    assert_eq!(result, "test response");
    assert_eq!(client.model(), "test-model");
}

#[tokio::test]
async fn test_json_mode_sets_response_format() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"response_format": {"type": "json_object"}})))
        .respond_with(completion(r#"{"query": "SELECT 1"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let result =
        client.complete(vec![Message::user("sql please")], ReplyFormat::JsonObject).await.unwrap();
    assert_eq!(result, r#"{"query": "SELECT 1"}"#);
}

#[tokio::test]
async fn test_error_status_surfaces_body_without_retry() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.complete(vec![Message::user("hi")], ReplyFormat::Text).await.unwrap_err();
    assert!(matches!(err, LlmError::HttpStatus { code: 503, .. }));
    let msg = err.to_string();
    assert!(msg.contains("503"));
    assert!(msg.contains("Service Unavailable"));
}

#[tokio::test]
async fn test_unauthorized_is_reported() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client.complete(vec![Message::user("hi")], ReplyFormat::Text).await.unwrap_err();
    assert!(err.is_upstream());
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn test_empty_choices() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client.complete(vec![Message::user("hi")], ReplyFormat::Text).await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn test_unparseable_body() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = client.complete(vec![Message::user("hi")], ReplyFormat::Text).await.unwrap_err();
    assert!(matches!(err, LlmError::JsonParse { .. }));
    assert!(err.to_string().contains("<html>gateway</html>"));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = LlmClient::new("k".to_owned(), "http://host/v1//".to_owned(), "m".to_owned())
        .unwrap();
    assert_eq!(client.base_url(), "http://host/v1");
}

#[test]
fn test_debug_hides_api_key() {
    let client =
        LlmClient::new("very-secret".to_owned(), "http://host".to_owned(), "m".to_owned()).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("very-secret"));
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello world", 5), "hello");
    assert_eq!(truncate("", 10), "");
    assert!(truncate("привет", 3).len() <= 3);
}
