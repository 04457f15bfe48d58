// src/repositories/habits.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{non_empty, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{Habit, NewHabit};

#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn insert(&self, habit: &NewHabit) -> ServiceResult<()>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<Habit>>;
}

pub struct SupabaseHabitRepository {
    table: Table,
}

impl SupabaseHabitRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "habits"),
        }
    }
}

#[async_trait]
impl HabitRepository for SupabaseHabitRepository {
    async fn insert(&self, habit: &NewHabit) -> ServiceResult<()> {
        self.table
            .insert(habit)
            .await
            .inspect_err(|e| tracing::error!("Habit -> CreateHabit: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<Vec<Habit>> {
        let rows = self
            .table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("Habit -> GetHabitsByUserID: {}", e))?;
        non_empty(rows, format!("habits for user {}", user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::memory::MemoryBackend;
    use crate::error::ServiceError;
    use serde_json::json;

    #[tokio::test]
    async fn no_habits_is_not_found() {
        let db = Arc::new(MemoryBackend::new());
        let repo = SupabaseHabitRepository::new(db.clone());
        assert!(matches!(
            repo.find_by_user_id("u1").await,
            Err(ServiceError::NotFound(_))
        ));

        db.seed("habits", json!({ "user_id": "u1", "name": "walk", "target_count": 3 }));
        let habits = repo.find_by_user_id("u1").await.unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, 1);
        assert_eq!(habits[0].target_count, 3);
    }
}
