// src/services/ai_prompt.rs
use std::sync::Arc;

use super::Repositories;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{FinanceInfo, HealthBackground, LifeGoal, NewAiPrompt, Schedule, UserProfile};
use crate::repositories::{
    AiPromptRepository, FinanceRepository, HealthBackgroundRepository, LifeGoalRepository,
    ScheduleRepository, UsersRepository,
};

/// 根据五份资料拼出固定格式的 prompt，列表字段用逗号连接
pub fn render_prompt(
    profile: &UserProfile,
    goal: &LifeGoal,
    health: &HealthBackground,
    finance: &FinanceInfo,
    schedule: &Schedule,
) -> String {
    format!(
        "Generate a life goal for me based on my profile information. \n\
         My LongTermGoal is {} and \n\
         My ShorttermGoal is {}.\n\
         Right now I am {} years old {} . \n\
         This is my Health Background \n\
         My weight is {:.6} kg, height is {:.6} cm, medical condition is {} , allergies {}, current medication {} ,sleeppattern is {} and fitness level is {} \n \
         My financial situation \n \
         My income is {:.6} {} ,Monthly expenses is {:.6} {} \n \
         I expect to save money {:.6} {}, Risk Tolerence for investments is {}.\n \
         I have workhour {}, available time {}, my most busy day is {} , preferred time for activity is {}.",
        goal.long_term.join(","),
        goal.short_term.join(","),
        profile.age,
        profile.gender,
        profile.weight,
        profile.height,
        health.medical_conditions.join(","),
        health.allergies.join(","),
        health.medications.join(","),
        health.sleep_pattern,
        health.fitness_level,
        finance.income,
        finance.currency,
        finance.expenses,
        finance.currency,
        finance.savings_goal,
        finance.currency,
        finance.risk_tolerance,
        schedule.work_hours,
        schedule.available_time,
        schedule.busy_days.join(","),
        schedule.preferred_times.join(","),
    )
}

pub struct AiPromptService {
    users: Arc<dyn UsersRepository>,
    life_goals: Arc<dyn LifeGoalRepository>,
    health: Arc<dyn HealthBackgroundRepository>,
    finance: Arc<dyn FinanceRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    prompts: Arc<dyn AiPromptRepository>,
    clock: LocalClock,
}

impl AiPromptService {
    pub fn new(repos: &Repositories, clock: LocalClock) -> Self {
        Self {
            users: repos.users.clone(),
            life_goals: repos.life_goals.clone(),
            health: repos.health.clone(),
            finance: repos.finance.clone(),
            schedules: repos.schedules.clone(),
            prompts: repos.prompts.clone(),
            clock,
        }
    }

    /// 五份资料缺任何一份都直接失败，不会写入 prompt
    pub async fn create_prompt(&self, user_id: &str) -> ServiceResult<NewAiPrompt> {
        let profile = self.users.find_by_user_id(user_id).await?;
        let goal = self.life_goals.find_by_user_id(user_id).await?;
        let health = self.health.find_by_user_id(user_id).await?;
        let finance = self.finance.find_by_user_id(user_id).await?;
        let schedule = self.schedules.find_by_user_id(user_id).await?;

        let prompt = NewAiPrompt {
            user_id: user_id.to_string(),
            prompt: render_prompt(&profile, &goal, &health, &finance, &schedule),
            lifegoal_id: goal.id,
            finance_id: finance.id,
            health_id: health.id,
            schedule_id: schedule.id,
            created_at: self.clock.now(),
        };
        self.prompts.insert(&prompt).await?;

        tracing::debug!("prompt stored for user {}", user_id);
        Ok(prompt)
    }

    pub async fn delete_prompt(&self, id: &str) -> ServiceResult<()> {
        self.prompts.delete(id).await
    }
}
