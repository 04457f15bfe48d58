// src/services/mod.rs
use std::sync::Arc;

use crate::datasource::DataBackend;
use crate::repositories::{
    AiChatRepository, AiPromptRepository, FinanceRepository, GeneratedPlanRepository,
    HabitRepository, HealthBackgroundRepository, LifeGoalRepository, MoodRepository,
    ScheduleRepository, SupabaseAiChatRepository, SupabaseAiPromptRepository,
    SupabaseFinanceRepository, SupabaseGeneratedPlanRepository, SupabaseHabitRepository,
    SupabaseHealthBackgroundRepository, SupabaseLifeGoalRepository, SupabaseMoodRepository,
    SupabaseScheduleRepository, SupabaseUsersRepository, UsersRepository,
};

mod ai_gen;
mod ai_prompt;
mod finance;
mod habits;
mod health_background;
mod lifegoal;
mod mood;
mod schedule;
mod users;

pub use ai_gen::AiGenService;
pub use ai_prompt::AiPromptService;
pub use finance::FinanceService;
pub use habits::HabitService;
pub use health_background::HealthBackgroundService;
pub use lifegoal::LifeGoalService;
pub use mood::MoodService;
pub use schedule::ScheduleService;
pub use users::UsersService;

/// 每张表一个 repository，启动时建一次，各个 service 按需取用
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UsersRepository>,
    pub life_goals: Arc<dyn LifeGoalRepository>,
    pub finance: Arc<dyn FinanceRepository>,
    pub health: Arc<dyn HealthBackgroundRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub habits: Arc<dyn HabitRepository>,
    pub moods: Arc<dyn MoodRepository>,
    pub prompts: Arc<dyn AiPromptRepository>,
    pub plans: Arc<dyn GeneratedPlanRepository>,
    pub chats: Arc<dyn AiChatRepository>,
}

impl Repositories {
    pub fn supabase(db: Arc<dyn DataBackend>) -> Self {
        Self {
            users: Arc::new(SupabaseUsersRepository::new(db.clone())),
            life_goals: Arc::new(SupabaseLifeGoalRepository::new(db.clone())),
            finance: Arc::new(SupabaseFinanceRepository::new(db.clone())),
            health: Arc::new(SupabaseHealthBackgroundRepository::new(db.clone())),
            schedules: Arc::new(SupabaseScheduleRepository::new(db.clone())),
            habits: Arc::new(SupabaseHabitRepository::new(db.clone())),
            moods: Arc::new(SupabaseMoodRepository::new(db.clone())),
            prompts: Arc::new(SupabaseAiPromptRepository::new(db.clone())),
            plans: Arc::new(SupabaseGeneratedPlanRepository::new(db.clone())),
            chats: Arc::new(SupabaseAiChatRepository::new(db)),
        }
    }
}
