// src/repositories/generated_plan.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{first_of, non_empty, removed, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{GeneratedPlan, NewGeneratedPlan};

#[async_trait]
pub trait GeneratedPlanRepository: Send + Sync {
    async fn insert(&self, plan: &NewGeneratedPlan) -> ServiceResult<()>;
    async fn find_all(&self) -> ServiceResult<Vec<GeneratedPlan>>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<GeneratedPlan>>;
    async fn find_by_id(&self, id: &str) -> ServiceResult<GeneratedPlan>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

pub struct SupabaseGeneratedPlanRepository {
    table: Table,
}

impl SupabaseGeneratedPlanRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "goals"),
        }
    }
}

#[async_trait]
impl GeneratedPlanRepository for SupabaseGeneratedPlanRepository {
    async fn insert(&self, plan: &NewGeneratedPlan) -> ServiceResult<()> {
        self.table
            .insert(plan)
            .await
            .inspect_err(|e| tracing::error!("GeneratedPlan -> InsertGoal: {}", e))
    }

    async fn find_all(&self) -> ServiceResult<Vec<GeneratedPlan>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("GeneratedPlan -> GetAllGenGoal: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<GeneratedPlan>> {
        let rows = self
            .table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("GeneratedPlan -> GetGenGoalByUserID: {}", e))?;
        non_empty(rows, format!("plans for user {}", user_id))
    }

    async fn find_by_id(&self, id: &str) -> ServiceResult<GeneratedPlan> {
        let rows = self
            .table
            .select(&eq("id", id))
            .await
            .inspect_err(|e| tracing::error!("GeneratedPlan -> GetGenGoalByID: {}", e))?;
        first_of(rows, format!("goal with ID {}", id))
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("id", id))
            .await
            .and_then(|count| removed(count, format!("generated plan with id {}", id)))
            .inspect_err(|e| tracing::error!("GeneratedPlan -> DeleteGoal: {}", e))
    }
}
