use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;

use ledgerflow::infrastructure::credentials::{EnvTokenProvider, StaticTokenProvider};
use ledgerflow::infrastructure::http::{ApiClient, ApiError};

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn echo_headers(headers: HeaderMap) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "authorization": headers.get("authorization").and_then(|v| v.to_str().ok()),
        "contentType": headers.get("content-type").and_then(|v| v.to_str().ok()),
    }))
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Arc::new(StaticTokenProvider::new("sekrit")))
}

#[tokio::test]
async fn attaches_bearer_token_and_json_content_type() {
    let base_url = spawn(Router::new().route("/ping", get(echo_headers))).await;
    let client = client(&base_url);

    let seen: serde_json::Value = client.get("/ping").await.unwrap().unwrap();

    assert_eq!(seen["authorization"], "Bearer sekrit");
    assert_eq!(seen["contentType"], "application/json");
}

#[tokio::test]
async fn open_endpoints_are_sent_without_credentials() {
    let base_url = spawn(Router::new().route("/auth/login", post(echo_headers))).await;
    let client = client(&base_url);

    let body = serde_json::json!({"email": "a@b.c", "password": "pw"});
    let seen: serde_json::Value = client.post("/auth/login", &body).await.unwrap().unwrap();

    assert_eq!(seen["authorization"], serde_json::Value::Null);
}

#[tokio::test]
async fn missing_token_sends_no_auth_header() {
    let base_url = spawn(Router::new().route("/ping", get(echo_headers))).await;
    let client = ApiClient::new(&base_url, Arc::new(StaticTokenProvider::anonymous()));

    let seen: serde_json::Value = client.get("/ping").await.unwrap().unwrap();

    assert_eq!(seen["authorization"], serde_json::Value::Null);
}

#[tokio::test]
async fn env_token_provider_reads_current_value() {
    std::env::set_var("LEDGERFLOW_TEST_TOKEN", "from-env");
    let base_url = spawn(Router::new().route("/ping", get(echo_headers))).await;
    let client = ApiClient::new(
        &base_url,
        Arc::new(EnvTokenProvider::new("LEDGERFLOW_TEST_TOKEN")),
    );

    let seen: serde_json::Value = client.get("/ping").await.unwrap().unwrap();

    assert_eq!(seen["authorization"], "Bearer from-env");
}

#[tokio::test]
async fn no_content_response_yields_none() {
    let base_url = spawn(Router::new().route("/empty", get(|| async { StatusCode::NO_CONTENT }))).await;
    let client = client(&base_url);

    let result: Option<serde_json::Value> = client.get("/empty").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let router = Router::new().route(
        "/budgets",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({"message": "Budget amount must be positive"})),
            )
        }),
    );
    let base_url = spawn(router).await;
    let client = client(&base_url);

    let err = client
        .post::<serde_json::Value, _>("/budgets", &serde_json::json!({"amount": -1}))
        .await
        .unwrap_err();

    match err {
        ApiError::Status {
            endpoint,
            status,
            message,
        } => {
            assert_eq!(endpoint, "/budgets");
            assert_eq!(status, 422);
            assert_eq!(message, "Budget amount must be positive");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_status_text() {
    let router = Router::new().route(
        "/boom",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "wreckage") }),
    );
    let base_url = spawn(router).await;
    let client = client(&base_url);

    let err = client.get::<serde_json::Value>("/boom").await.unwrap_err();

    match err {
        ApiError::Status { message, .. } => assert_eq!(message, "Internal Server Error"),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetcher_unwraps_the_data_envelope() {
    let router = Router::new().route(
        "/categories",
        get(|| async { Json(serde_json::json!({"data": ["food", "rent"]})) }),
    );
    let base_url = spawn(router).await;
    let client = client(&base_url);

    let data: Option<Vec<String>> = client.fetcher("/categories").await.unwrap();

    assert_eq!(data, Some(vec!["food".to_string(), "rent".to_string()]));
}

#[tokio::test]
async fn fetcher_without_data_field_yields_none() {
    let router = Router::new().route("/categories", get(|| async { Json(serde_json::json!({})) }));
    let base_url = spawn(router).await;
    let client = client(&base_url);

    let data: Option<Vec<String>> = client.fetcher("/categories").await.unwrap();

    assert!(data.is_none());
}
