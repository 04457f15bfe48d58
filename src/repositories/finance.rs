// src/repositories/finance.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{first_of, removed, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{FinanceInfo, NewFinanceInfo};

#[async_trait]
pub trait FinanceRepository: Send + Sync {
    async fn find_all(&self) -> ServiceResult<Vec<FinanceInfo>>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<FinanceInfo>;
    async fn insert(&self, finance: &NewFinanceInfo) -> ServiceResult<()>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

pub struct SupabaseFinanceRepository {
    table: Table,
}

impl SupabaseFinanceRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "financial_info"),
        }
    }
}

#[async_trait]
impl FinanceRepository for SupabaseFinanceRepository {
    async fn find_all(&self) -> ServiceResult<Vec<FinanceInfo>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("Finance -> FindAll: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<FinanceInfo> {
        let rows = self
            .table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("Finance -> FindByUserID: {}", e))?;
        first_of(rows, format!("finance info for user {}", user_id))
    }

    async fn insert(&self, finance: &NewFinanceInfo) -> ServiceResult<()> {
        self.table
            .insert(finance)
            .await
            .inspect_err(|e| tracing::error!("Finance -> InsertFinance: {}", e))
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("id", id))
            .await
            .and_then(|count| removed(count, format!("finance with id {}", id)))
            .inspect_err(|e| tracing::error!("Finance -> DeleteFinance: {}", e))
    }
}
