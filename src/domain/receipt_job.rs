use super::{ExtractedReceiptData, JobStatus};

/// One observation of a server-side extraction job, as returned by the
/// status endpoint. Not persisted beyond the workflow's lifetime.
#[derive(Debug, Clone)]
pub struct ReceiptJob {
    pub status: JobStatus,
    pub extracted_data: Option<ExtractedReceiptData>,
    pub error: Option<String>,
}
