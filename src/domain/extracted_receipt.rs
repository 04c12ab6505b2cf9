use serde::Deserialize;

use super::{DraftTransaction, TransactionType};

/// Fields the backend's extraction step may return. Older jobs used the
/// generic names, newer ones the receipt-specific names, so every field is
/// optional and resolution is ordered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedReceiptData {
    pub merchant_name: Option<String>,
    pub description: Option<String>,
    pub total: Option<f64>,
    pub amount: Option<f64>,
    pub transaction_date: Option<String>,
    pub date: Option<String>,
}

impl ExtractedReceiptData {
    /// Resolves extracted fields into a draft, preferring the
    /// receipt-specific name over the generic one per field:
    ///
    /// | draft field      | resolution order                 |
    /// |------------------|----------------------------------|
    /// | description      | merchant_name, description, ""   |
    /// | amount           | total, amount, 0.0               |
    /// | transaction_date | transaction_date, date, ""       |
    pub fn into_draft(self) -> DraftTransaction {
        DraftTransaction {
            description: self
                .merchant_name
                .or(self.description)
                .unwrap_or_default(),
            amount: self.total.or(self.amount).unwrap_or(0.0),
            transaction_date: self.transaction_date.or(self.date).unwrap_or_default(),
            transaction_type: TransactionType::Expense,
        }
    }
}
