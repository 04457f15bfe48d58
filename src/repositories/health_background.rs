// src/repositories/health_background.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{first_of, removed, require_user_id, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{HealthBackground, NewHealthBackground};

#[async_trait]
pub trait HealthBackgroundRepository: Send + Sync {
    async fn insert(&self, health: &NewHealthBackground) -> ServiceResult<()>;
    async fn find_all(&self) -> ServiceResult<Vec<HealthBackground>>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<HealthBackground>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

pub struct SupabaseHealthBackgroundRepository {
    table: Table,
}

impl SupabaseHealthBackgroundRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "health_backgrounds"),
        }
    }
}

#[async_trait]
impl HealthBackgroundRepository for SupabaseHealthBackgroundRepository {
    async fn insert(&self, health: &NewHealthBackground) -> ServiceResult<()> {
        require_user_id(&health.user_id)?;
        self.table
            .insert(health)
            .await
            .inspect_err(|e| tracing::error!("HealthBackground -> InsertHealth: {}", e))
    }

    async fn find_all(&self) -> ServiceResult<Vec<HealthBackground>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("HealthBackground -> FindAll: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<HealthBackground> {
        let rows = self
            .table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("HealthBackground -> FindByUserID: {}", e))?;
        first_of(rows, format!("health background for user {}", user_id))
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("id", id))
            .await
            .and_then(|count| removed(count, format!("health background with id {}", id)))
            .inspect_err(|e| tracing::error!("HealthBackground -> DeleteHealth: {}", e))
    }
}
