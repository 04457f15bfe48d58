// src/services/lifegoal.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{LifeGoal, LifeGoalSchema, NewLifeGoal, UpdateLifeGoalSchema};
use crate::repositories::LifeGoalRepository;

pub struct LifeGoalService {
    life_goals: Arc<dyn LifeGoalRepository>,
    clock: LocalClock,
}

impl LifeGoalService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            life_goals: repos.life_goals.clone(),
            clock,
        }
    }

    pub async fn create(&self, user_id: &str, body: LifeGoalSchema) -> ServiceResult<()> {
        let now = self.clock.now();
        let goal = NewLifeGoal {
            user_id: user_id.to_string(),
            short_term: body.short_term.unwrap_or_default(),
            long_term: body.long_term.unwrap_or_default(),
            priorities: body.priorities.unwrap_or_default(),
            timeframe: body.timeframe,
            created_at: now,
            updated_at: now,
        };
        self.life_goals.insert(&goal).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<LifeGoal>> {
        self.life_goals.find_all().await
    }

    pub async fn find_by_user(&self, user_id: &str) -> ServiceResult<LifeGoal> {
        self.life_goals.find_by_user_id(user_id).await
    }

    pub async fn find(&self, id: &str) -> ServiceResult<LifeGoal> {
        self.life_goals.find_by_id(id).await
    }

    pub async fn update(&self, id: &str, mut patch: UpdateLifeGoalSchema) -> ServiceResult<()> {
        patch.updated_at = Some(self.clock.now());
        self.life_goals.update(id, &patch).await
    }
}
