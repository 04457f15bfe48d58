// src/models.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clock::Timestamp;

// --- 0. 统一响应外壳 {message, data?} ---
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

impl<T> Envelope<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

// --- 1. UserProfile 模型 ---
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub age: i32,
    pub weight: f32,
    pub height: f32,
    pub gender: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct NewUserProfile {
    pub user_id: String,
    pub full_name: String,
    pub age: i32,
    pub weight: f32,
    pub height: f32,
    pub gender: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserSchema {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(range(min = 1))]
    pub age: i32,
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f32,
    #[validate(range(exclusive_min = 0.0))]
    pub height: f32,
    #[validate(length(min = 1))]
    pub gender: String,
}

// 0 / 空字符串 表示 "沿用原值"
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserSchema {
    pub full_name: String,
    pub age: i32,
    pub weight: f32,
    pub height: f32,
    pub gender: String,
}

// --- 2. LifeGoal 模型 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeGoal {
    pub id: String,
    pub user_id: String,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
    pub priorities: Vec<String>,
    pub timeframe: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct NewLifeGoal {
    pub user_id: String,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
    pub priorities: Vec<String>,
    pub timeframe: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LifeGoalSchema {
    #[validate(required)]
    pub short_term: Option<Vec<String>>,
    #[validate(required)]
    pub long_term: Option<Vec<String>>,
    #[validate(required)]
    pub priorities: Option<Vec<String>>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub timeframe: String,
}

// 只 PATCH 请求里出现的字段
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateLifeGoalSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priorities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// --- 3. FinanceInfo 模型 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceInfo {
    pub id: String,
    pub user_id: String,
    pub currency: String,
    pub income: f64,
    pub expenses: f64,
    pub savings_goal: f64,
    pub risk_tolerance: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct NewFinanceInfo {
    pub user_id: String,
    pub currency: String,
    pub income: f64,
    pub expenses: f64,
    pub savings_goal: f64,
    pub risk_tolerance: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FinanceSchema {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub savings_goal: f64,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub risk_tolerance: String,
}

// --- 4. HealthBackground 模型 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthBackground {
    pub id: String,
    pub user_id: String,
    pub medical_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub fitness_level: String,
    pub sleep_pattern: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct NewHealthBackground {
    pub user_id: String,
    pub medical_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub fitness_level: String,
    pub sleep_pattern: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HealthSchema {
    #[validate(required)]
    pub medical_conditions: Option<Vec<String>>,
    #[validate(required)]
    pub allergies: Option<Vec<String>>,
    #[validate(required)]
    pub medications: Option<Vec<String>>,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub fitness_level: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub sleep_pattern: String,
}

// --- 5. Schedule 模型 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub id: String,
    pub user_id: String,
    pub work_hours: String,
    pub available_time: String,
    pub busy_days: Vec<String>,
    pub preferred_times: Vec<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct NewSchedule {
    pub user_id: String,
    pub work_hours: String,
    pub available_time: String,
    pub busy_days: Vec<String>,
    pub preferred_times: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScheduleSchema {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub work_hours: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub available_time: String,
    #[validate(required)]
    pub busy_days: Option<Vec<String>>,
    #[validate(required)]
    pub preferred_times: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateScheduleSchema {
    #[serde(default)]
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_days: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_times: Option<Vec<String>>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

// --- 6. Habit 模型 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Habit {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub frequency: String,
    pub description: String,
    pub target_count: i32,
    pub current_streak: i32,
    pub completed_dates: Vec<String>,
    pub category: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct NewHabit {
    pub user_id: String,
    pub name: String,
    pub frequency: String,
    pub description: String,
    pub target_count: i32,
    pub current_streak: i32,
    pub completed_dates: Vec<String>,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct HabitSchema {
    #[validate(length(min = 1))]
    pub name: String,
    pub frequency: String,
    pub description: String,
    pub target_count: i32,
    pub current_streak: i32,
    pub completed_dates: Vec<String>,
    pub category: String,
}

// --- 7. Mood 模型 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mood {
    pub id: i64,
    pub user_id: String,
    pub mood: String,
    pub note: String,
    pub created_at: Option<Timestamp>,
}

// 插入后原样返回给前端
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMood {
    pub user_id: String,
    pub mood: String,
    pub note: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct MoodSchema {
    #[validate(length(min = 1))]
    pub mood: String,
    pub note: String,
}

// --- 8. AI Prompt / 生成计划 ---
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiPrompt {
    pub id: String,
    pub user_id: String,
    pub prompt: String,
    pub lifegoal_id: String,
    pub finance_id: String,
    pub health_id: String,
    pub schedule_id: String,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAiPrompt {
    pub user_id: String,
    pub prompt: String,
    pub lifegoal_id: String,
    pub finance_id: String,
    pub health_id: String,
    pub schedule_id: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedPlan {
    pub id: String,
    pub user_id: String,
    pub generated_plan: String,
    pub prompt_id: String,
    pub lifegoal_id: String,
    pub finance_id: String,
    pub health_id: String,
    pub schedule_id: String,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGeneratedPlan {
    pub user_id: String,
    pub generated_plan: String,
    pub prompt_id: String,
    pub lifegoal_id: String,
    pub finance_id: String,
    pub health_id: String,
    pub schedule_id: String,
    pub created_at: Timestamp,
}

// --- 9. AI Chat ---
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    #[default]
    User,
    Ai,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiChat {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub sender: Sender,
    pub created_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAiChat {
    pub user_id: String,
    pub sender: Sender,
    pub message: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ChatSchema {
    #[validate(length(min = 1))]
    pub message: String,
    // 只允许 "user"，省略时按 "user" 处理
    pub sender: Option<String>,
}

// --- 10. 一次性提交全部资料 ---
#[derive(Debug, Deserialize, Validate)]
pub struct AllDataSchema {
    #[serde(flatten)]
    #[validate(nested)]
    pub health: HealthSchema,
    #[serde(flatten)]
    #[validate(nested)]
    pub schedule: ScheduleSchema,
    #[serde(flatten)]
    #[validate(nested)]
    pub life_goal: LifeGoalSchema,
    #[serde(flatten)]
    #[validate(nested)]
    pub finance: FinanceSchema,
}
