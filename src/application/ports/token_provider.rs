/// Credential lookup for the HTTP client. Passed in explicitly at
/// construction instead of read from ambient storage, so callers decide
/// where tokens live.
pub trait TokenProvider: Send + Sync {
    /// Current bearer token, or `None` when the user is not signed in.
    fn bearer_token(&self) -> Option<String>;
}
