mod account;
mod budget;
mod category;
mod draft_transaction;
mod extracted_receipt;
mod job_status;
mod receipt_file;
mod receipt_job;
mod transaction;
mod upload_ticket;
mod workflow_status;

pub use account::{Account, NewAccount};
pub use budget::{Budget, NewBudget};
pub use category::{Category, NewCategory};
pub use draft_transaction::{DraftTransaction, TransactionType};
pub use extracted_receipt::ExtractedReceiptData;
pub use job_status::JobStatus;
pub use receipt_file::ReceiptFile;
pub use receipt_job::ReceiptJob;
pub use transaction::{NewTransaction, Transaction};
pub use upload_ticket::UploadTicket;
pub use workflow_status::WorkflowStatus;
