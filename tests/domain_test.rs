use ledgerflow::domain::{
    DraftTransaction, ExtractedReceiptData, JobStatus, NewTransaction, TransactionType,
    WorkflowStatus,
};

#[test]
fn completed_extraction_maps_to_expense_draft() {
    let extracted: ExtractedReceiptData = serde_json::from_str(
        r#"{"merchantName": "Cafe X", "total": 12.5, "transactionDate": "2024-07-01"}"#,
    )
    .unwrap();

    assert_eq!(
        extracted.into_draft(),
        DraftTransaction {
            description: "Cafe X".to_string(),
            amount: 12.5,
            transaction_date: "2024-07-01".to_string(),
            transaction_type: TransactionType::Expense,
        }
    );
}

#[test]
fn generic_field_names_fill_in_when_receipt_names_are_missing() {
    let extracted: ExtractedReceiptData = serde_json::from_str(
        r#"{"description": "Groceries", "amount": 54.2, "date": "2024-07-02"}"#,
    )
    .unwrap();

    let draft = extracted.into_draft();
    assert_eq!(draft.description, "Groceries");
    assert_eq!(draft.amount, 54.2);
    assert_eq!(draft.transaction_date, "2024-07-02");
}

#[test]
fn receipt_specific_fields_win_over_generic_ones() {
    let extracted = ExtractedReceiptData {
        merchant_name: Some("Cafe X".to_string()),
        description: Some("generic".to_string()),
        total: Some(12.5),
        amount: Some(99.0),
        transaction_date: Some("2024-07-01".to_string()),
        date: Some("1999-01-01".to_string()),
    };

    let draft = extracted.into_draft();
    assert_eq!(draft.description, "Cafe X");
    assert_eq!(draft.amount, 12.5);
    assert_eq!(draft.transaction_date, "2024-07-01");
}

#[test]
fn empty_extraction_falls_back_to_neutral_defaults() {
    let draft = ExtractedReceiptData::default().into_draft();

    assert_eq!(draft.description, "");
    assert_eq!(draft.amount, 0.0);
    assert_eq!(draft.transaction_date, "");
    assert_eq!(draft.transaction_type, TransactionType::Expense);
}

#[test]
fn job_status_parses_wire_values() {
    assert_eq!("pending".parse::<JobStatus>().unwrap(), JobStatus::Pending);
    assert_eq!(
        "processing".parse::<JobStatus>().unwrap(),
        JobStatus::Processing
    );
    assert_eq!(
        "completed".parse::<JobStatus>().unwrap(),
        JobStatus::Completed
    );
    assert_eq!("failed".parse::<JobStatus>().unwrap(), JobStatus::Failed);
    assert!("COMPLETED".parse::<JobStatus>().is_err());
}

#[test]
fn only_completed_and_failed_are_terminal() {
    assert!(!JobStatus::Pending.is_terminal());
    assert!(!JobStatus::Processing.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}

#[test]
fn processing_message_reports_elapsed_seconds() {
    assert_eq!(
        WorkflowStatus::Processing { elapsed_secs: 0 }.message(),
        "Processing receipt..."
    );
    assert_eq!(
        WorkflowStatus::Processing { elapsed_secs: 27 }.message(),
        "Processing receipt... 27s elapsed"
    );
}

#[test]
fn draft_serializes_camel_case_with_lowercase_type() {
    let draft = DraftTransaction {
        description: "Cafe X".to_string(),
        amount: 12.5,
        transaction_date: "2024-07-01".to_string(),
        transaction_type: TransactionType::Expense,
    };

    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["transactionDate"], "2024-07-01");
    assert_eq!(json["transactionType"], "expense");
}

#[test]
fn new_transaction_from_draft_leaves_account_and_category_unset() {
    let draft = DraftTransaction {
        description: "Cafe X".to_string(),
        amount: 12.5,
        transaction_date: "2024-07-01".to_string(),
        transaction_type: TransactionType::Expense,
    };

    let new = NewTransaction::from_draft(draft);
    assert_eq!(new.account_id, None);
    assert_eq!(new.category_id, None);

    let json = serde_json::to_value(&new).unwrap();
    assert!(json.get("accountId").is_none());
    assert!(json.get("categoryId").is_none());
}
