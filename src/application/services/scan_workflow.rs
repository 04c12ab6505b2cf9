use std::sync::Arc;

use crate::application::ports::{FileTransport, ReceiptApi, ScanNotifier};
use crate::domain::{DraftTransaction, ReceiptFile, WorkflowStatus};

use super::poller::{PollError, ReceiptPoller};
use super::upload::{UploadCoordinator, UploadStageError};

/// Drives one receipt scan end to end:
///
/// ```text
/// PreparingUpload -> Uploading -> Processing -> {Completed | Failed}
/// ```
///
/// Each stage must finish before the next starts. `run` holds no shared
/// mutable state, so concurrent invocations are independent; there is no
/// cancel operation beyond the polling cap.
pub struct ScanWorkflow {
    uploader: UploadCoordinator,
    poller: ReceiptPoller,
    notifier: Arc<dyn ScanNotifier>,
}

impl ScanWorkflow {
    pub fn new(
        receipts: Arc<dyn ReceiptApi>,
        transport: Arc<dyn FileTransport>,
        notifier: Arc<dyn ScanNotifier>,
    ) -> Self {
        Self {
            uploader: UploadCoordinator::new(
                Arc::clone(&receipts),
                transport,
                Arc::clone(&notifier),
            ),
            poller: ReceiptPoller::new(receipts, Arc::clone(&notifier)),
            notifier,
        }
    }

    /// Runs the full pipeline for one selected file, consuming it so a
    /// finished run leaves nothing selected. On success the staged draft is
    /// both returned and handed to the notifier's persistent "create"
    /// affordance; it is not sent to the backend here.
    #[tracing::instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn run(&self, file: ReceiptFile) -> Result<DraftTransaction, ScanError> {
        let result = self.drive(&file).await;

        match &result {
            Ok(draft) => {
                tracing::info!(description = %draft.description, "Receipt scan completed");
                self.notifier.status(&WorkflowStatus::Completed);
                self.notifier.completed(draft);
            }
            Err(e) => {
                tracing::error!(error = %e, "Receipt scan failed");
                let terminal = if matches!(e, ScanError::Timeout) {
                    WorkflowStatus::PollingTimedOut
                } else {
                    WorkflowStatus::Failed
                };
                self.notifier.status(&terminal);
                self.notifier.failed(&e.to_string());
            }
        }

        result
    }

    async fn drive(&self, file: &ReceiptFile) -> Result<DraftTransaction, ScanError> {
        self.notifier.status(&WorkflowStatus::PreparingUpload);
        let file_path = self.uploader.upload(file).await?;

        self.notifier
            .status(&WorkflowStatus::Processing { elapsed_secs: 0 });
        let job_id = self.poller.submit(&file_path).await?;

        let extracted = self.poller.await_completion(&job_id).await?;
        Ok(extracted.into_draft())
    }
}

/// Everything that can end a scan early. Display text is what the user sees
/// in the destructive notification, so variants defer to the underlying
/// message rather than prefixing it.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{0}")]
    SignedUrl(crate::application::ports::SignedUrlError),
    #[error("{0}")]
    Upload(crate::application::ports::UploadError),
    #[error("{0}")]
    Submit(#[from] crate::application::ports::ProcessingSubmitError),
    #[error("{0}")]
    Status(crate::application::ports::StatusFetchError),
    #[error("{0}")]
    Processing(String),
    #[error("Receipt processing timed out. Please try again.")]
    Timeout,
}

impl From<UploadStageError> for ScanError {
    fn from(e: UploadStageError) -> Self {
        match e {
            UploadStageError::SignedUrl(e) => ScanError::SignedUrl(e),
            UploadStageError::Put(e) => ScanError::Upload(e),
        }
    }
}

impl From<PollError> for ScanError {
    fn from(e: PollError) -> Self {
        match e {
            PollError::Status(e) => ScanError::Status(e),
            PollError::JobFailed(message) => ScanError::Processing(message),
            PollError::Timeout => ScanError::Timeout,
        }
    }
}
