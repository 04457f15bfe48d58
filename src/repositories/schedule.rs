// src/repositories/schedule.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{first_of, removed, require_user_id, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{NewSchedule, Schedule, UpdateScheduleSchema};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn find_all(&self) -> ServiceResult<Vec<Schedule>>;
    async fn insert(&self, schedule: &NewSchedule) -> ServiceResult<()>;
    async fn find_by_id(&self, id: &str) -> ServiceResult<Schedule>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Schedule>;
    async fn update(&self, id: &str, patch: &UpdateScheduleSchema) -> ServiceResult<()>;
    async fn delete(&self, id: &str) -> ServiceResult<()>;
}

pub struct SupabaseScheduleRepository {
    table: Table,
}

impl SupabaseScheduleRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "schedules"),
        }
    }

    async fn find_first(&self, field: &str, value: &str) -> ServiceResult<Schedule> {
        let rows = self
            .table
            .select(&eq(field, value))
            .await
            .inspect_err(|e| tracing::error!("Schedule -> FindBy {}: {}", field, e))?;
        first_of(rows, format!("schedule with {} {}", field, value))
    }
}

#[async_trait]
impl ScheduleRepository for SupabaseScheduleRepository {
    async fn find_all(&self) -> ServiceResult<Vec<Schedule>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("Schedule -> FindAll: {}", e))
    }

    async fn insert(&self, schedule: &NewSchedule) -> ServiceResult<()> {
        require_user_id(&schedule.user_id)?;
        self.table
            .insert(schedule)
            .await
            .inspect_err(|e| tracing::error!("Schedule -> InsertSchedule: {}", e))
    }

    async fn find_by_id(&self, id: &str) -> ServiceResult<Schedule> {
        self.find_first("id", id).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Schedule> {
        self.find_first("user_id", user_id).await
    }

    async fn update(&self, id: &str, patch: &UpdateScheduleSchema) -> ServiceResult<()> {
        self.table
            .update(&eq("id", id), patch)
            .await
            .inspect_err(|e| tracing::error!("Schedule -> UpdateSchedule: {}", e))
    }

    async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.table
            .delete(&eq("id", id))
            .await
            .and_then(|count| removed(count, format!("schedule with id {}", id)))
            .inspect_err(|e| tracing::error!("Schedule -> DeleteSchedule: {}", e))
    }
}
