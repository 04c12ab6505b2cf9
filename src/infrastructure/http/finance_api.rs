use std::sync::Arc;

use crate::domain::{
    Account, Budget, Category, NewAccount, NewBudget, NewCategory, NewTransaction, Transaction,
};

use super::api_client::{ApiClient, ApiError, Envelope};

/// Typed CRUD wrappers over the backend's finance resources. Every success
/// body is a `{data: T}` envelope.
pub struct FinanceApi {
    client: Arc<ApiClient>,
}

impl FinanceApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        Ok(self
            .client
            .fetcher("/transactions")
            .await?
            .unwrap_or_default())
    }

    pub async fn create_transaction(&self, new: &NewTransaction) -> Result<Transaction, ApiError> {
        self.unwrap_data("/transactions", self.client.post("/transactions", new).await?)
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        update: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let endpoint = format!("/transactions/{}", id);
        let envelope = self.client.put(&endpoint, update).await?;
        self.unwrap_data(&endpoint, envelope)
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        Ok(self.client.fetcher("/accounts").await?.unwrap_or_default())
    }

    pub async fn create_account(&self, new: &NewAccount) -> Result<Account, ApiError> {
        self.unwrap_data("/accounts", self.client.post("/accounts", new).await?)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(self
            .client
            .fetcher("/categories")
            .await?
            .unwrap_or_default())
    }

    pub async fn create_category(&self, new: &NewCategory) -> Result<Category, ApiError> {
        self.unwrap_data("/categories", self.client.post("/categories", new).await?)
    }

    pub async fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        Ok(self.client.fetcher("/budgets").await?.unwrap_or_default())
    }

    pub async fn create_budget(&self, new: &NewBudget) -> Result<Budget, ApiError> {
        self.unwrap_data("/budgets", self.client.post("/budgets", new).await?)
    }

    fn unwrap_data<T>(&self, endpoint: &str, envelope: Option<Envelope<T>>) -> Result<T, ApiError> {
        envelope
            .and_then(|e| e.data)
            .ok_or_else(|| ApiError::MissingData {
                endpoint: endpoint.to_string(),
            })
    }
}
