use async_trait::async_trait;

use crate::domain::{ReceiptJob, UploadTicket};

/// Backend attachment endpoints driving the receipt-scan pipeline.
#[async_trait]
pub trait ReceiptApi: Send + Sync {
    /// `POST /attachments/signed-url` — trade a file name and MIME type for
    /// a one-shot upload destination.
    async fn request_signed_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<UploadTicket, SignedUrlError>;

    /// `POST /attachments/process-receipt` — queue extraction for an
    /// uploaded file, returning the job id to poll.
    async fn submit_processing(&self, file_path: &str) -> Result<String, ProcessingSubmitError>;

    /// `GET /attachments/receipt-status?jobId=<id>` — one status check.
    async fn fetch_status(&self, job_id: &str) -> Result<ReceiptJob, StatusFetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SignedUrlError {
    #[error("signed url request failed: {0}")]
    RequestFailed(String),
    /// The server answered but not with a usable ticket; carries the
    /// server-provided message when there is one.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessingSubmitError {
    #[error("receipt processing request failed: {0}")]
    RequestFailed(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StatusFetchError {
    #[error("receipt status check failed: {0}")]
    RequestFailed(String),
    /// A response without a `status` field aborts the workflow; single
    /// polls are never retried.
    #[error("receipt status response missing status field")]
    MissingStatus,
}
