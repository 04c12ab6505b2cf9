/// Progress of one receipt-scan invocation, in display order. One value
/// stream exists per file selection; concurrent selections get independent
/// streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Idle,
    PreparingUpload,
    Uploading,
    Processing { elapsed_secs: u64 },
    PollingTimedOut,
    Completed,
    Failed,
}

impl WorkflowStatus {
    /// Human-readable progress text. Periodic `Processing` updates carry the
    /// approximate elapsed time and supersede the prior message in place.
    pub fn message(&self) -> String {
        match self {
            WorkflowStatus::Idle => "Waiting for a receipt".to_string(),
            WorkflowStatus::PreparingUpload => "Preparing upload...".to_string(),
            WorkflowStatus::Uploading => "Uploading receipt...".to_string(),
            WorkflowStatus::Processing { elapsed_secs: 0 } => {
                "Processing receipt...".to_string()
            }
            WorkflowStatus::Processing { elapsed_secs } => {
                format!("Processing receipt... {}s elapsed", elapsed_secs)
            }
            WorkflowStatus::PollingTimedOut => {
                "Receipt processing timed out".to_string()
            }
            WorkflowStatus::Completed => "Receipt scanned".to_string(),
            WorkflowStatus::Failed => "Receipt scan failed".to_string(),
        }
    }
}
