// src/services/habits.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{Habit, HabitSchema, NewHabit};
use crate::repositories::HabitRepository;

pub struct HabitService {
    habits: Arc<dyn HabitRepository>,
    clock: LocalClock,
}

impl HabitService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            habits: repos.habits.clone(),
            clock,
        }
    }

    pub async fn create(&self, user_id: &str, body: HabitSchema) -> ServiceResult<()> {
        let now = self.clock.now();
        let habit = NewHabit {
            user_id: user_id.to_string(),
            name: body.name,
            frequency: body.frequency,
            description: body.description,
            target_count: body.target_count,
            current_streak: body.current_streak,
            completed_dates: body.completed_dates,
            category: body.category,
            created_at: now,
            updated_at: now,
        };
        self.habits.insert(&habit).await
    }

    pub async fn list_by_user(&self, user_id: &str) -> ServiceResult<Vec<Habit>> {
        self.habits.find_by_user_id(user_id).await
    }
}
