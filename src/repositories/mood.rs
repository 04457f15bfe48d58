// src/repositories/mood.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::Table;
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{Mood, NewMood};

#[async_trait]
pub trait MoodRepository: Send + Sync {
    async fn find_all(&self) -> ServiceResult<Vec<Mood>>;
    /// 没有记录时返回空列表
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<Mood>>;
    async fn insert(&self, mood: &NewMood) -> ServiceResult<()>;
}

pub struct SupabaseMoodRepository {
    table: Table,
}

impl SupabaseMoodRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "mood"),
        }
    }
}

#[async_trait]
impl MoodRepository for SupabaseMoodRepository {
    async fn find_all(&self) -> ServiceResult<Vec<Mood>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("Mood -> GetMood: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<Mood>> {
        self.table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("Mood -> GetMoodByUserID: {}", e))
    }

    async fn insert(&self, mood: &NewMood) -> ServiceResult<()> {
        self.table
            .insert(mood)
            .await
            .inspect_err(|e| tracing::error!("Mood -> NewMood: {}", e))
    }
}
