mod api_client;
mod finance_api;
mod receipt_api;
mod signed_upload;

pub use api_client::{ApiClient, ApiError, Envelope, RequestOptions, DEFAULT_OPEN_ENDPOINTS};
pub use finance_api::FinanceApi;
pub use receipt_api::HttpReceiptApi;
pub use signed_upload::SignedUrlTransport;
