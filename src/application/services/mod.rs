mod poller;
mod scan_workflow;
mod upload;

pub use poller::{PollError, ReceiptPoller, MAX_POLL_ATTEMPTS, POLL_INTERVAL};
pub use scan_workflow::{ScanError, ScanWorkflow};
pub use upload::{UploadCoordinator, UploadStageError};
