use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::application::ports::{FileTransport, UploadError};

/// Direct PUT of raw bytes to a pre-signed URL. The destination is an
/// external storage service, so no API auth header is attached.
pub struct SignedUrlTransport {
    http: reqwest::Client,
}

impl SignedUrlTransport {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self { http }
    }
}

impl Default for SignedUrlTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileTransport for SignedUrlTransport {
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, url: &str, content_type: &str, bytes: Bytes) -> Result<(), UploadError> {
        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| UploadError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
