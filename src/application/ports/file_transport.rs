use async_trait::async_trait;
use bytes::Bytes;

/// Raw byte transport to a pre-signed URL, outside the authenticated API
/// surface.
#[async_trait]
pub trait FileTransport: Send + Sync {
    async fn put(&self, url: &str, content_type: &str, bytes: Bytes) -> Result<(), UploadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    RequestFailed(String),
    #[error("upload returned {status}: {body}")]
    Rejected { status: u16, body: String },
}
