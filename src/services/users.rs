// src/services/users.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{CreateUserSchema, NewUserProfile, UpdateUserSchema, UserProfile};
use crate::repositories::{
    FinanceRepository, HealthBackgroundRepository, LifeGoalRepository, ScheduleRepository,
    UsersRepository,
};

pub struct UsersService {
    users: Arc<dyn UsersRepository>,
    life_goals: Arc<dyn LifeGoalRepository>,
    finance: Arc<dyn FinanceRepository>,
    health: Arc<dyn HealthBackgroundRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    clock: LocalClock,
}

impl UsersService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            users: repos.users.clone(),
            life_goals: repos.life_goals.clone(),
            finance: repos.finance.clone(),
            health: repos.health.clone(),
            schedules: repos.schedules.clone(),
            clock,
        }
    }

    pub async fn create(&self, user_id: &str, body: CreateUserSchema) -> ServiceResult<()> {
        let now = self.clock.now();
        let profile = NewUserProfile {
            user_id: user_id.to_string(),
            full_name: body.full_name,
            age: body.age,
            weight: body.weight,
            height: body.height,
            gender: body.gender,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(&profile).await
    }

    pub async fn list(&self) -> ServiceResult<Vec<UserProfile>> {
        self.users.find_all().await
    }

    pub async fn find(&self, user_id: &str) -> ServiceResult<UserProfile> {
        self.users.find_by_user_id(user_id).await
    }

    /// 先读出原记录，请求里为 0 / 空的字段沿用原值
    pub async fn update(&self, user_id: &str, body: UpdateUserSchema) -> ServiceResult<UserProfile> {
        let stored = self.users.find_by_user_id(user_id).await?;

        let mut merged = stored;
        if !body.full_name.is_empty() {
            merged.full_name = body.full_name;
        }
        if body.age != 0 {
            merged.age = body.age;
        }
        if body.weight != 0.0 {
            merged.weight = body.weight;
        }
        if body.height != 0.0 {
            merged.height = body.height;
        }
        if !body.gender.is_empty() {
            merged.gender = body.gender;
        }
        merged.updated_at = Some(self.clock.now());

        self.users.update(&merged).await?;
        Ok(merged)
    }

    /// LifeGoal -> Finance -> Health -> Schedule，逐个查再删，任何一步失败立即返回，已删的不恢复。
    /// prompt / 计划 / 聊天 / 用户资料本身不动。
    pub async fn delete_all_data(&self, user_id: &str) -> ServiceResult<()> {
        let goal = self.life_goals.find_by_user_id(user_id).await?;
        self.life_goals.delete(&goal.id).await?;

        let finance = self.finance.find_by_user_id(user_id).await?;
        self.finance.delete(&finance.id).await?;

        let health = self.health.find_by_user_id(user_id).await?;
        self.health.delete(&health.id).await?;

        let schedule = self.schedules.find_by_user_id(user_id).await?;
        self.schedules.delete(&schedule.id).await?;

        tracing::info!("🗑️ removed aggregate data for user {}", user_id);
        Ok(())
    }
}
