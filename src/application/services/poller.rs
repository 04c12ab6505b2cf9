use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    ProcessingSubmitError, ReceiptApi, ScanNotifier, StatusFetchError,
};
use crate::domain::{ExtractedReceiptData, JobStatus, WorkflowStatus};

/// Fixed wait between status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Hard cap on status checks (~120 s of polling). Not extendable mid-flight.
pub const MAX_POLL_ATTEMPTS: u32 = 40;

/// Submits an extraction job and polls it to a terminal state. Each wait is
/// a cooperative suspension point, never a blocked thread.
pub struct ReceiptPoller {
    receipts: Arc<dyn ReceiptApi>,
    notifier: Arc<dyn ScanNotifier>,
}

impl ReceiptPoller {
    pub fn new(receipts: Arc<dyn ReceiptApi>, notifier: Arc<dyn ScanNotifier>) -> Self {
        Self { receipts, notifier }
    }

    pub async fn submit(&self, file_path: &str) -> Result<String, ProcessingSubmitError> {
        let job_id = self.receipts.submit_processing(file_path).await?;
        tracing::debug!(job_id = %job_id, "Receipt processing job submitted");
        Ok(job_id)
    }

    /// Polls until `completed` or `failed`. After each non-terminal check a
    /// progress update reports `attempts * 3` elapsed seconds; that figure
    /// is for display only.
    #[tracing::instrument(skip(self))]
    pub async fn await_completion(&self, job_id: &str) -> Result<ExtractedReceiptData, PollError> {
        for attempt in 1..=MAX_POLL_ATTEMPTS {
            tokio::time::sleep(POLL_INTERVAL).await;

            let job = self
                .receipts
                .fetch_status(job_id)
                .await
                .map_err(PollError::Status)?;

            match job.status {
                JobStatus::Completed => {
                    tracing::info!(attempts = attempt, "Receipt processing completed");
                    return Ok(job.extracted_data.unwrap_or_default());
                }
                JobStatus::Failed => {
                    return Err(PollError::JobFailed(job.error.unwrap_or_else(|| {
                        "Receipt processing failed".to_string()
                    })));
                }
                _ => {
                    self.notifier.status(&WorkflowStatus::Processing {
                        elapsed_secs: u64::from(attempt) * 3,
                    });
                }
            }
        }

        Err(PollError::Timeout)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("{0}")]
    Status(StatusFetchError),
    /// The job's own `error` field, or a generic message. Never retried.
    #[error("{0}")]
    JobFailed(String),
    #[error("Receipt processing timed out. Please try again.")]
    Timeout,
}
