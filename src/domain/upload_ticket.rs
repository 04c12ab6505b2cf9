/// Pre-signed upload destination issued by the backend. Consumed once: the
/// URL receives the PUT, the path identifies the file to the processing
/// endpoint afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub upload_url: String,
    pub file_path: String,
    pub token: String,
}
