use serde::{Deserialize, Serialize};

use super::{DraftTransaction, TransactionType};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub transaction_date: String,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Creation payload for `POST /transactions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    pub transaction_date: String,
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl NewTransaction {
    /// Confirmation path for a staged draft: account and category are left
    /// for the form to fill in.
    pub fn from_draft(draft: DraftTransaction) -> Self {
        Self {
            description: draft.description,
            amount: draft.amount,
            transaction_date: draft.transaction_date,
            transaction_type: draft.transaction_type,
            account_id: None,
            category_id: None,
        }
    }
}
