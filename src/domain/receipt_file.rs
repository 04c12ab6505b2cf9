use bytes::Bytes;

/// A user-selected receipt image or PDF. The scan workflow takes ownership,
/// so a finished run never leaves a stale selection behind.
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ReceiptFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}
