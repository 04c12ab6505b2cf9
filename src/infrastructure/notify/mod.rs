use tokio::sync::mpsc;

use crate::application::ports::ScanNotifier;
use crate::domain::{DraftTransaction, WorkflowStatus};

/// Notification emitted by a scan workflow, for consumers that render their
/// own progress surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    Status(WorkflowStatus),
    /// Persistent: carries the staged draft for the "create" affordance.
    Completed(DraftTransaction),
    /// Destructive: human-readable failure text.
    Failed(String),
}

/// Fans scan events out over an unbounded channel. Send failures mean the
/// consumer went away, which a fire-and-forget notifier ignores.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<ScanEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ScanEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ScanNotifier for ChannelNotifier {
    fn status(&self, status: &WorkflowStatus) {
        let _ = self.tx.send(ScanEvent::Status(*status));
    }

    fn completed(&self, draft: &DraftTransaction) {
        let _ = self.tx.send(ScanEvent::Completed(draft.clone()));
    }

    fn failed(&self, message: &str) {
        let _ = self.tx.send(ScanEvent::Failed(message.to_string()));
    }
}

/// Renders notifications as log lines; the surface the CLI uses.
pub struct TracingNotifier;

impl ScanNotifier for TracingNotifier {
    fn status(&self, status: &WorkflowStatus) {
        tracing::info!(progress = %status.message(), "Scan progress");
    }

    fn completed(&self, draft: &DraftTransaction) {
        tracing::info!(
            description = %draft.description,
            amount = draft.amount,
            date = %draft.transaction_date,
            "Receipt scanned; draft staged for confirmation"
        );
    }

    fn failed(&self, message: &str) {
        tracing::error!(message = %message, "Receipt scan failed");
    }
}
