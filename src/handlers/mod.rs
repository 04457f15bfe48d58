// src/handlers/mod.rs
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::AppState;

mod ai_gen;
mod lifegoal;
mod users;

pub const WELCOME: &str = "Welcome to the life planner API";

async fn welcome_handler() -> &'static str {
    WELCOME
}

/// 全部路由：/api/v1/users, /api/v1/lifegoals, /api/v1/ai_gen
pub fn router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(welcome_handler))
        .nest("/api/v1/users", users_routes())
        .nest("/api/v1/lifegoals", lifegoal_routes())
        .nest("/api/v1/ai_gen", ai_gen_routes())
        .with_state(state);
    with_middleware(app)
}

// 每个请求记一行日志；handler 里的 panic 变成 500，不会带走连接
fn with_middleware(app: Router) -> Router {
    app.layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

fn users_routes() -> Router<AppState> {
    Router::new()
        // 用户资料
        .route("/add_user/:id", post(users::create_user_handler))
        .route("/users", get(users::get_users_handler))
        .route(
            "/user/:id",
            get(users::get_user_handler).delete(users::delete_user_data_handler),
        )
        .route("/update_user/:id", patch(users::update_user_handler))
        .route("/user/add_alldata/:id", post(users::add_all_data_handler))
        // 财务
        .route("/finance_info", get(users::get_finances_handler))
        .route(
            "/finance_info/:id",
            post(users::create_finance_handler).get(users::get_finance_handler),
        )
        // 健康
        .route("/health_background", get(users::get_health_list_handler))
        .route(
            "/health_background/:id",
            post(users::create_health_handler).get(users::get_health_handler),
        )
        // 日程
        .route("/schedule", get(users::get_schedules_handler))
        .route(
            "/schedule/:id",
            get(users::get_schedule_handler).post(users::create_schedule_handler),
        )
        .route("/update_schedule/:id", patch(users::update_schedule_handler))
        .route("/user/schedule/:id", get(users::get_user_schedule_handler))
        // 习惯 / 心情
        .route(
            "/habit/:id",
            post(users::create_habit_handler).get(users::get_habits_handler),
        )
        .route("/mood", get(users::get_moods_handler))
        .route(
            "/mood/:id",
            post(users::create_mood_handler).get(users::get_user_moods_handler),
        )
}

fn lifegoal_routes() -> Router<AppState> {
    Router::new()
        .route("/add_lifegoal/:id", post(lifegoal::create_lifegoal_handler))
        .route("/lifegoals", get(lifegoal::get_lifegoals_handler))
        .route("/users/:id", get(lifegoal::get_user_lifegoal_handler))
        .route("/lifegoal/:id", get(lifegoal::get_lifegoal_handler))
        .route("/update_lifegoal/:id", patch(lifegoal::update_lifegoal_handler))
}

fn ai_gen_routes() -> Router<AppState> {
    Router::new()
        .route("/add_ai_prompt/:id", post(ai_gen::create_prompt_handler))
        .route("/ai_prompt/:id", delete(ai_gen::delete_prompt_handler))
        .route("/create_ai_gen/:id", post(ai_gen::create_ai_gen_handler))
        .route("/ai_gens", get(ai_gen::get_plans_handler))
        .route("/ai_gen/:id", get(ai_gen::get_user_plans_handler))
        .route("/goal/:id", delete(ai_gen::delete_plan_handler))
        .route(
            "/chat/:id",
            post(ai_gen::chat_handler)
                .get(ai_gen::get_chat_handler)
                .delete(ai_gen::delete_chat_handler),
        )
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::aimodel::scripted::ScriptedModel;
    use crate::datasource::memory::MemoryBackend;
    use crate::services::fixtures;
    use crate::AppState;

    pub fn app(db: &Arc<MemoryBackend>, model: ScriptedModel) -> Router {
        super::router(AppState::new(db.clone(), Arc::new(model), fixtures::clock()))
    }

    /// 发一个请求，返回 (状态码, JSON body)
    pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}
