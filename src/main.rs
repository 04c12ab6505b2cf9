use std::path::Path;
use std::sync::Arc;

use ledgerflow::application::services::ScanWorkflow;
use ledgerflow::config::{Settings, TOKEN_ENV_VAR};
use ledgerflow::domain::{NewTransaction, ReceiptFile};
use ledgerflow::infrastructure::credentials::EnvTokenProvider;
use ledgerflow::infrastructure::http::{ApiClient, FinanceApi, HttpReceiptApi, SignedUrlTransport};
use ledgerflow::infrastructure::notify::TracingNotifier;
use ledgerflow::infrastructure::observability::{init_tracing, TracingConfig};

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig {
        environment: settings.environment.to_string(),
        json_format: settings.logging.enable_json,
    });

    let mut args = std::env::args().skip(1);
    let file_arg = args.next();
    let create = args.any(|a| a == "--create");

    let Some(file_arg) = file_arg else {
        eprintln!("Usage: ledgerflow <receipt-file> [--create]");
        std::process::exit(2);
    };

    tracing::info!(base_url = %settings.api.base_url, "Using backend");

    let tokens = Arc::new(EnvTokenProvider::new(TOKEN_ENV_VAR));
    let client = Arc::new(ApiClient::new(&settings.api.base_url, tokens));
    let receipts = Arc::new(HttpReceiptApi::new(Arc::clone(&client)));
    let transport = Arc::new(SignedUrlTransport::new());
    let notifier = Arc::new(TracingNotifier);

    let workflow = ScanWorkflow::new(receipts, transport, notifier);

    let path = Path::new(&file_arg);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("receipt")
        .to_string();
    let bytes = tokio::fs::read(path).await?;
    let file = ReceiptFile::new(file_name, content_type_for(path), bytes);

    let draft = workflow.run(file).await?;
    println!("{}", serde_json::to_string_pretty(&draft)?);

    if create {
        let mut new = NewTransaction::from_draft(draft);
        if new.transaction_date.is_empty() {
            new.transaction_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
        }
        let finance = FinanceApi::new(client);
        let created = finance.create_transaction(&new).await?;
        tracing::info!(id = created.id, "Transaction created");
    }

    Ok(())
}
