use std::sync::Arc;

use crate::application::ports::{
    FileTransport, ReceiptApi, ScanNotifier, SignedUrlError, UploadError,
};
use crate::domain::{ReceiptFile, WorkflowStatus};

/// Stages a receipt into backend storage: signed-url request, then a direct
/// PUT of the raw bytes. Neither step is retried; the caller decides whether
/// to rerun the whole sequence.
pub struct UploadCoordinator {
    receipts: Arc<dyn ReceiptApi>,
    transport: Arc<dyn FileTransport>,
    notifier: Arc<dyn ScanNotifier>,
}

impl UploadCoordinator {
    pub fn new(
        receipts: Arc<dyn ReceiptApi>,
        transport: Arc<dyn FileTransport>,
        notifier: Arc<dyn ScanNotifier>,
    ) -> Self {
        Self {
            receipts,
            transport,
            notifier,
        }
    }

    /// Returns the storage path the processing endpoint expects. The
    /// `Uploading` status is emitted only after the signed URL is granted,
    /// so a rejected ticket never reports an upload in progress.
    #[tracing::instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn upload(&self, file: &ReceiptFile) -> Result<String, UploadStageError> {
        let ticket = self
            .receipts
            .request_signed_url(&file.file_name, &file.content_type)
            .await?;

        tracing::debug!(file_path = %ticket.file_path, "Signed upload URL granted");
        self.notifier.status(&WorkflowStatus::Uploading);

        self.transport
            .put(&ticket.upload_url, &file.content_type, file.bytes.clone())
            .await?;

        Ok(ticket.file_path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStageError {
    #[error("{0}")]
    SignedUrl(#[from] SignedUrlError),
    #[error("{0}")]
    Put(#[from] UploadError),
}
