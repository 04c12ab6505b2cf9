use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{
    ProcessingSubmitError, ReceiptApi, SignedUrlError, StatusFetchError,
};
use crate::domain::{ExtractedReceiptData, JobStatus, ReceiptJob, UploadTicket};

use super::api_client::ApiClient;

const SIGNED_URL_ENDPOINT: &str = "/attachments/signed-url";
const PROCESS_RECEIPT_ENDPOINT: &str = "/attachments/process-receipt";
const RECEIPT_STATUS_ENDPOINT: &str = "/attachments/receipt-status";

/// [`ReceiptApi`] over the backend's attachment endpoints, via the
/// authenticated [`ApiClient`].
pub struct HttpReceiptApi {
    client: Arc<ApiClient>,
}

impl HttpReceiptApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReceiptApi for HttpReceiptApi {
    async fn request_signed_url(
        &self,
        file_name: &str,
        file_type: &str,
    ) -> Result<UploadTicket, SignedUrlError> {
        let body = serde_json::json!({ "fileName": file_name, "fileType": file_type });
        let response: Option<SignedUrlResponse> = self
            .client
            .post(SIGNED_URL_ENDPOINT, &body)
            .await
            .map_err(|e| SignedUrlError::RequestFailed(e.user_message()))?;

        let response = response
            .ok_or_else(|| SignedUrlError::Rejected("Failed to get upload URL".to_string()))?;

        if response.status.as_deref() != Some("success") {
            return Err(SignedUrlError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Failed to get upload URL".to_string()),
            ));
        }

        let data = response.data.unwrap_or_default();
        match (data.signed_url, data.file_path) {
            (Some(upload_url), Some(file_path)) => Ok(UploadTicket {
                upload_url,
                file_path,
                token: data.token.unwrap_or_default(),
            }),
            _ => Err(SignedUrlError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Failed to get upload URL".to_string()),
            )),
        }
    }

    async fn submit_processing(&self, file_path: &str) -> Result<String, ProcessingSubmitError> {
        let body = serde_json::json!({ "filePath": file_path });
        let response: Option<ProcessReceiptResponse> = self
            .client
            .post(PROCESS_RECEIPT_ENDPOINT, &body)
            .await
            .map_err(|e| ProcessingSubmitError::RequestFailed(e.user_message()))?;

        let response = response.ok_or_else(|| {
            ProcessingSubmitError::Rejected("Failed to start receipt processing".to_string())
        })?;

        match (response.success, response.data.and_then(|d| d.job_id)) {
            (true, Some(job_id)) => Ok(job_id),
            _ => Err(ProcessingSubmitError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| "Failed to start receipt processing".to_string()),
            )),
        }
    }

    async fn fetch_status(&self, job_id: &str) -> Result<ReceiptJob, StatusFetchError> {
        let endpoint = format!("{}?jobId={}", RECEIPT_STATUS_ENDPOINT, job_id);
        let response: Option<ReceiptStatusResponse> = self
            .client
            .get(&endpoint)
            .await
            .map_err(|e| StatusFetchError::RequestFailed(e.user_message()))?;

        let response = response.ok_or(StatusFetchError::MissingStatus)?;
        let status_str = response.status.ok_or(StatusFetchError::MissingStatus)?;

        // The wire contract names four statuses; anything unrecognized keeps
        // the poll alive rather than aborting the workflow.
        let status = status_str.parse::<JobStatus>().unwrap_or_else(|_| {
            tracing::warn!(status = %status_str, "Unrecognized job status, treating as pending");
            JobStatus::Pending
        });

        Ok(ReceiptJob {
            status,
            extracted_data: response.extracted_data,
            error: response.error,
        })
    }
}

#[derive(Deserialize)]
struct SignedUrlResponse {
    status: Option<String>,
    message: Option<String>,
    data: Option<SignedUrlData>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignedUrlData {
    signed_url: Option<String>,
    file_path: Option<String>,
    token: Option<String>,
}

#[derive(Deserialize)]
struct ProcessReceiptResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    data: Option<ProcessReceiptData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProcessReceiptData {
    job_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptStatusResponse {
    status: Option<String>,
    extracted_data: Option<ExtractedReceiptData>,
    error: Option<String>,
}
