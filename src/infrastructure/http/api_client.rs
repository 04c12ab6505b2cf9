use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::TokenProvider;

/// Endpoints that must work before the user has a token.
pub const DEFAULT_OPEN_ENDPOINTS: &[&str] = &["/auth/login", "/auth/register", "/auth/forgot-password"];

/// Authenticated JSON client for the finance backend. Normalizes headers,
/// attaches the bearer token from the injected [`TokenProvider`] (except on
/// the open allow-list), and unwraps error bodies into [`ApiError`]. No
/// caching and no retries at this layer.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
    open_endpoints: Vec<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::with_open_endpoints(
            base_url,
            tokens,
            DEFAULT_OPEN_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn with_open_endpoints(
        base_url: &str,
        tokens: Arc<dyn TokenProvider>,
        open_endpoints: Vec<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
            open_endpoints,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::GET)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::POST).json(body)?)
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::PUT).json(body)?)
            .await
    }

    /// GET that additionally unwraps the backend's `{data: ...}` envelope,
    /// yielding `None` when the envelope has no data.
    pub async fn fetcher<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>, ApiError> {
        let envelope: Option<Envelope<T>> = self.get(endpoint).await?;
        Ok(envelope.and_then(|e| e.data))
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.http.request(options.method, &url);

        let content_type = options
            .content_type
            .as_deref()
            .unwrap_or("application/json");
        request = request.header(CONTENT_TYPE, content_type);

        if !self.is_open(endpoint) {
            if let Some(token) = self.tokens.bearer_token() {
                let header = format!("Bearer {}", token);
                if let Ok(value) = HeaderValue::from_str(&header) {
                    request = request.header(AUTHORIZATION, value);
                }
            }
        }

        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: error_message(&text, status),
            });
        }

        // 204 and empty bodies are success without payload; never parsed.
        if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
            return Ok(None);
        }

        let parsed = response.json::<T>().await.map_err(|e| ApiError::InvalidBody {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(parsed))
    }

    fn is_open(&self, endpoint: &str) -> bool {
        let path = endpoint.split('?').next().unwrap_or(endpoint);
        self.open_endpoints.iter().any(|open| path == open)
    }
}

/// Best available human-readable message: the JSON error body's
/// `message`/`error` field, else the HTTP reason phrase.
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// The backend's `{data: T}` success envelope.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

pub struct RequestOptions {
    method: Method,
    body: Option<Vec<u8>>,
    content_type: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            content_type: None,
        }
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body).map_err(|e| ApiError::InvalidBody {
            endpoint: String::new(),
            message: format!("failed to serialize request body: {}", e),
        })?);
        Ok(self)
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{endpoint} returned {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid response from {endpoint}: {message}")]
    InvalidBody { endpoint: String, message: String },
    #[error("response from {endpoint} missing data")]
    MissingData { endpoint: String },
}

impl ApiError {
    /// The message shown to the user, without the endpoint prefix.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
