mod file_transport;
mod receipt_api;
mod scan_notifier;
mod token_provider;

pub use file_transport::{FileTransport, UploadError};
pub use receipt_api::{ProcessingSubmitError, ReceiptApi, SignedUrlError, StatusFetchError};
pub use scan_notifier::ScanNotifier;
pub use token_provider::TokenProvider;
