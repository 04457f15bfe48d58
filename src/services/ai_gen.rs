// src/services/ai_gen.rs
use std::sync::Arc;

use super::Repositories;
use crate::aimodel::GenerativeModel;
use crate::clock::LocalClock;
use crate::error::ServiceResult;
use crate::models::{AiChat, GeneratedPlan, NewAiChat, NewGeneratedPlan, Sender};
use crate::repositories::{
    AiChatRepository, AiPromptRepository, FinanceRepository, GeneratedPlanRepository,
    HealthBackgroundRepository, LifeGoalRepository, ScheduleRepository,
};

/// 计划生成、对话、以及计划的级联删除
pub struct AiGenService {
    model: Arc<dyn GenerativeModel>,
    prompts: Arc<dyn AiPromptRepository>,
    plans: Arc<dyn GeneratedPlanRepository>,
    chats: Arc<dyn AiChatRepository>,
    life_goals: Arc<dyn LifeGoalRepository>,
    finance: Arc<dyn FinanceRepository>,
    health: Arc<dyn HealthBackgroundRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    clock: LocalClock,
}

impl AiGenService {
    pub fn new(repos: &Repositories, model: Arc<dyn GenerativeModel>, clock: LocalClock) -> Self {
        Self {
            model,
            prompts: repos.prompts.clone(),
            plans: repos.plans.clone(),
            chats: repos.chats.clone(),
            life_goals: repos.life_goals.clone(),
            finance: repos.finance.clone(),
            health: repos.health.clone(),
            schedules: repos.schedules.clone(),
            clock,
        }
    }

    /// 用最新的 prompt 生成计划。计划写库失败只记 warn，照样返回生成的文本
    pub async fn generate_plan(&self, user_id: &str) -> ServiceResult<String> {
        let prompt = self.prompts.latest_by_user_id(user_id).await?;

        let text = self
            .model
            .generate_text(&prompt.prompt)
            .await
            .inspect_err(|e| tracing::error!("AiGen -> GeneratePlan: {}", e))?;

        let plan = NewGeneratedPlan {
            user_id: user_id.to_string(),
            generated_plan: text.clone(),
            prompt_id: prompt.id,
            lifegoal_id: prompt.lifegoal_id,
            finance_id: prompt.finance_id,
            health_id: prompt.health_id,
            schedule_id: prompt.schedule_id,
            created_at: self.clock.now(),
        };
        if let Err(e) = self.plans.insert(&plan).await {
            tracing::warn!("⚠️ plan for user {} generated but not stored: {}", user_id, e);
        }

        Ok(text)
    }

    pub async fn list_plans(&self) -> ServiceResult<Vec<GeneratedPlan>> {
        self.plans.find_all().await
    }

    pub async fn plans_by_user(&self, user_id: &str) -> ServiceResult<Vec<GeneratedPlan>> {
        self.plans.find_by_user_id(user_id).await
    }

    /// 存用户消息 -> 读历史 -> 调模型 -> 存回复
    pub async fn chat_turn(&self, user_id: &str, message: &str) -> ServiceResult<String> {
        let sent = self
            .chats
            .insert(&NewAiChat {
                user_id: user_id.to_string(),
                sender: Sender::User,
                message: message.to_string(),
                created_at: self.clock.now(),
            })
            .await?;

        let mut history = self.chats.history_by_user_id(user_id).await?;
        // 刚写入的那条会作为新消息单独发送，按 id 从历史里拿掉
        history.retain(|chat| chat.id != sent.id);

        let reply = self
            .model
            .chat(&history, message)
            .await
            .inspect_err(|e| tracing::error!("AiGen -> ChatTurn: {}", e))?;

        self.chats
            .insert(&NewAiChat {
                user_id: user_id.to_string(),
                sender: Sender::Ai,
                message: reply.clone(),
                created_at: self.clock.now(),
            })
            .await?;

        Ok(reply)
    }

    pub async fn chat_history(&self, user_id: &str) -> ServiceResult<Vec<AiChat>> {
        self.chats.history_by_user_id(user_id).await
    }

    pub async fn delete_chat(&self, user_id: &str) -> ServiceResult<()> {
        self.chats.delete_by_user_id(user_id).await
    }

    /// plan -> prompt -> life goal -> finance -> health -> schedule，失败即停，不回滚
    pub async fn delete_plan(&self, plan_id: &str) -> ServiceResult<()> {
        let plan = self.plans.find_by_id(plan_id).await?;

        self.plans.delete(plan_id).await?;
        self.prompts.delete(&plan.prompt_id).await?;
        self.life_goals.delete(&plan.lifegoal_id).await?;
        self.finance.delete(&plan.finance_id).await?;
        self.health.delete(&plan.health_id).await?;
        self.schedules.delete(&plan.schedule_id).await?;

        tracing::info!("🗑️ plan {} and its linked records removed", plan_id);
        Ok(())
    }
}
