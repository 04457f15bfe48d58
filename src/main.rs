// src/main.rs
use axum::http::Method;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod aimodel;
mod clock;
mod config;
mod datasource;
mod error;
mod handlers;
mod models;
mod repositories;
mod services;
mod validation;

use aimodel::{GeminiRest, GenerativeModel};
use clock::LocalClock;
use config::Config;
use datasource::{DataBackend, SupabaseRest};
use services::{
    AiGenService, AiPromptService, FinanceService, HabitService, HealthBackgroundService,
    LifeGoalService, MoodService, Repositories, ScheduleService, UsersService,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UsersService>,
    pub life_goals: Arc<LifeGoalService>,
    pub finance: Arc<FinanceService>,
    pub health: Arc<HealthBackgroundService>,
    pub schedules: Arc<ScheduleService>,
    pub habits: Arc<HabitService>,
    pub moods: Arc<MoodService>,
    pub prompts: Arc<AiPromptService>,
    pub ai_gen: Arc<AiGenService>,
}

impl AppState {
    pub fn new(
        db: Arc<dyn DataBackend>,
        model: Arc<dyn GenerativeModel>,
        clock: LocalClock,
    ) -> Self {
        let repos = Repositories::supabase(db);
        Self {
            users: Arc::new(UsersService::new(&repos, clock)),
            life_goals: Arc::new(LifeGoalService::new(&repos, clock)),
            finance: Arc::new(FinanceService::new(&repos, clock)),
            health: Arc::new(HealthBackgroundService::new(&repos, clock)),
            schedules: Arc::new(ScheduleService::new(&repos, clock)),
            habits: Arc::new(HabitService::new(&repos, clock)),
            moods: Arc::new(MoodService::new(&repos, clock)),
            prompts: Arc::new(AiPromptService::new(&repos, clock)),
            ai_gen: Arc::new(AiGenService::new(&repos, model, clock)),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        tracing::error!("❌ 启动失败: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let supabase = SupabaseRest::new(&config.supabase)?;
    match supabase.test_connection().await {
        Ok(()) => tracing::info!("✅ Supabase 连接成功!"),
        Err(e) => tracing::warn!("⚠️ Supabase 连接测试失败: {}", e),
    }

    let gemini = GeminiRest::new(config.gemini.clone())?;

    let state = AppState::new(Arc::new(supabase), Arc::new(gemini), config.clock);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let app = handlers::router(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 服务器运行在: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
