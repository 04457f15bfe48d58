// src/repositories/lifegoal.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{exactly_one, removed, require_user_id, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{LifeGoal, NewLifeGoal, UpdateLifeGoalSchema};

#[async_trait]
pub trait LifeGoalRepository: Send + Sync {
    async fn insert(&self, goal: &NewLifeGoal) -> ServiceResult<()>;
    async fn find_all(&self) -> ServiceResult<Vec<LifeGoal>>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<LifeGoal>;
    async fn find_by_id(&self, id: &str) -> ServiceResult<LifeGoal>;
    async fn update(&self, id: &str, patch: &UpdateLifeGoalSchema) -> ServiceResult<()>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

pub struct SupabaseLifeGoalRepository {
    table: Table,
}

impl SupabaseLifeGoalRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "life_goals"),
        }
    }

    // 按 user_id 或 id 查，都要求恰好一行
    async fn find_one(&self, field: &str, value: &str) -> ServiceResult<LifeGoal> {
        let rows = self
            .table
            .select(&eq(field, value))
            .await
            .inspect_err(|e| tracing::error!("LifeGoal -> FindBy {}: {}", field, e))?;
        exactly_one(rows, format!("LifeGoal with {} {}", field, value))
            .inspect_err(|e| tracing::error!("LifeGoal -> FindBy {}: {}", field, e))
    }
}

#[async_trait]
impl LifeGoalRepository for SupabaseLifeGoalRepository {
    async fn insert(&self, goal: &NewLifeGoal) -> ServiceResult<()> {
        require_user_id(&goal.user_id)?;
        self.table
            .insert(goal)
            .await
            .inspect_err(|e| tracing::error!("LifeGoal -> InsertLifeGoal: {}", e))
    }

    async fn find_all(&self) -> ServiceResult<Vec<LifeGoal>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("LifeGoal -> FindAll: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<LifeGoal> {
        self.find_one("user_id", user_id).await
    }

    async fn find_by_id(&self, id: &str) -> ServiceResult<LifeGoal> {
        self.find_one("id", id).await
    }

    async fn update(&self, id: &str, patch: &UpdateLifeGoalSchema) -> ServiceResult<()> {
        self.table
            .update(&eq("id", id), patch)
            .await
            .inspect_err(|e| tracing::error!("LifeGoal -> UpdateLifeGoal: {}", e))
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("id", id))
            .await
            .and_then(|count| removed(count, format!("life goal with id {}", id)))
            .inspect_err(|e| tracing::error!("LifeGoal -> DeleteLifeGoal: {}", e))
    }
}
