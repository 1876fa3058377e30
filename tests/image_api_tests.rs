use axum::http::StatusCode;
use axum_test::TestServer;
use console_lib::config::models::{Config, GroqConfig};
use console_lib::routes;
use console_lib::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_server(base_url: String) -> TestServer {
    let config = Config {
        port: 0,
        groq: GroqConfig {
            base_url,
            timeout_secs: 5,
        },
    };
    let state = Arc::new(AppState::new(config));
    TestServer::new(routes::create_router(state)).expect("failed to build test server")
}

#[tokio::test]
async fn analyze_image_submits_a_multimodal_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "llama3-70b-8192",
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": "What is in this image?" },
                    { "type": "image_url", "image_url": { "url": "https://example.com/cat.png" } }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-789",
            "model": "llama3-70b-8192",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "A cat on a sofa." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 20, "completion_tokens": 6, "total_tokens": 26 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let server = test_server(mock_server.uri());
    let response = temp_env::async_with_vars([("GROQ_API_KEY", Some("test-key"))], async {
        server
            .post("/analyze-image")
            .json(&json!({
                "imageUrl": "https://example.com/cat.png",
                "prompt": "What is in this image?"
            }))
            .await
    })
    .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["content"], "A cat on a sofa.");
}

#[tokio::test]
async fn analyze_image_rejects_a_missing_prompt_without_calling_upstream() {
    let mock_server = MockServer::start().await;

    let server = test_server(mock_server.uri());
    let response = temp_env::async_with_vars([("GROQ_API_KEY", Some("test-key"))], async {
        server
            .post("/analyze-image")
            .json(&json!({ "imageUrl": "https://example.com/cat.png" }))
            .await
    })
    .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Image URL and prompt are required");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn analyze_image_rejects_a_missing_url() {
    let mock_server = MockServer::start().await;

    let server = test_server(mock_server.uri());
    let response = temp_env::async_with_vars([("GROQ_API_KEY", Some("test-key"))], async {
        server
            .post("/analyze-image")
            .json(&json!({ "imageUrl": "", "prompt": "What is in this image?" }))
            .await
    })
    .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "Image URL and prompt are required");
}

#[tokio::test]
async fn analyze_image_surfaces_an_upstream_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_string("model decommissioned"))
        .mount(&mock_server)
        .await;

    let server = test_server(mock_server.uri());
    let response = temp_env::async_with_vars([("GROQ_API_KEY", Some("test-key"))], async {
        server
            .post("/analyze-image")
            .json(&json!({
                "imageUrl": "https://example.com/cat.png",
                "prompt": "What is in this image?"
            }))
            .await
    })
    .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "model decommissioned");
}
