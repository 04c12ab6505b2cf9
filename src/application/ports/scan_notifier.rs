use crate::domain::{DraftTransaction, WorkflowStatus};

/// User-facing notification surface for one scan invocation. Implementations
/// must be fire-and-forget; the workflow never waits on them.
pub trait ScanNotifier: Send + Sync {
    /// Progress update; each one supersedes the prior message in place.
    fn status(&self, status: &WorkflowStatus);

    /// Persistent success notification carrying the staged draft (the
    /// "create transaction" affordance).
    fn completed(&self, draft: &DraftTransaction);

    /// Destructive notification with a human-readable failure message.
    fn failed(&self, message: &str);
}
