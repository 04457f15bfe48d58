// src/handlers/ai_gen.rs
use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::models::{AiChat, ChatSchema, Envelope, GeneratedPlan};
use crate::validation::ValidatedJson;
use crate::AppState;

// --- 1. Prompt ---
pub async fn create_prompt_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope>, AppError> {
    state
        .prompts
        .create_prompt(&id)
        .await
        .map_err(AppError::downstream("cannot create new AI prompt."))?;
    Ok(Json(Envelope::message("successfully created new AI prompt")))
}

pub async fn delete_prompt_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope>, AppError> {
    state
        .prompts
        .delete_prompt(&id)
        .await
        .map_err(AppError::downstream("cannot delete AI prompt."))?;
    Ok(Json(Envelope::message("success")))
}

// --- 2. 生成计划：先建 prompt，再用它生成 ---
pub async fn create_ai_gen_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<String>>, AppError> {
    state
        .prompts
        .create_prompt(&id)
        .await
        .map_err(AppError::downstream("cannot create new AI prompt."))?;

    let plan = state
        .ai_gen
        .generate_plan(&id)
        .await
        .map_err(AppError::downstream("cannot create new AI gen."))?;

    Ok(Json(Envelope::with_data("successfully created new AI gen", plan)))
}

pub async fn get_plans_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<GeneratedPlan>>>, AppError> {
    let plans = state
        .ai_gen
        .list_plans()
        .await
        .map_err(AppError::downstream("cannot get all gen goal."))?;
    Ok(Json(Envelope::with_data("success", plans)))
}

pub async fn get_user_plans_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<GeneratedPlan>>>, AppError> {
    let plans = state
        .ai_gen
        .plans_by_user(&id)
        .await
        .map_err(AppError::downstream("cannot get gen goal."))?;
    Ok(Json(Envelope::with_data("success", plans)))
}

// 路径里是计划自己的 id
pub async fn delete_plan_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope>, AppError> {
    state
        .ai_gen
        .delete_plan(&id)
        .await
        .map_err(AppError::downstream("cannot delete gen goal."))?;
    Ok(Json(Envelope::message("success")))
}

// --- 3. 对话 ---
pub async fn chat_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ChatSchema>,
) -> Result<Json<Envelope<String>>, AppError> {
    if body.sender.as_deref().is_some_and(|sender| sender != "user") {
        return Err(AppError::Unprocessable("invalid sender".to_string()));
    }

    let reply = state
        .ai_gen
        .chat_turn(&id, &body.message)
        .await
        .map_err(AppError::downstream("cannot get gen chat."))?;
    Ok(Json(Envelope::with_data("success", reply)))
}

pub async fn get_chat_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<AiChat>>>, AppError> {
    let history = state
        .ai_gen
        .chat_history(&id)
        .await
        .map_err(AppError::downstream("cannot get gen chat."))?;
    Ok(Json(Envelope::with_data("success", history)))
}

pub async fn delete_chat_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope>, AppError> {
    state
        .ai_gen
        .delete_chat(&id)
        .await
        .map_err(AppError::downstream("cannot delete gen chat."))?;
    Ok(Json(Envelope::message("success")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::aimodel::scripted::ScriptedModel;
    use crate::datasource::memory::MemoryBackend;
    use crate::handlers::testing::{app, send};
    use crate::services::fixtures;

    #[tokio::test]
    async fn create_ai_gen_returns_plan_text() {
        let db = Arc::new(MemoryBackend::new());
        fixtures::seed_profile(&db, "u1");
        let app = app(&db, ScriptedModel::new().reply("Week 1: walk 20 minutes daily"));

        let (status, body) = send(&app, "POST", "/api/v1/ai_gen/create_ai_gen/u1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "successfully created new AI gen", "data": "Week 1: walk 20 minutes daily" })
        );
        assert_eq!(db.count("ai_prompt"), 1);
        assert_eq!(db.count("goals"), 1);

        let (status, body) = send(&app, "GET", "/api/v1/ai_gen/ai_gen/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["generated_plan"], "Week 1: walk 20 minutes daily");
    }

    #[tokio::test]
    async fn create_ai_gen_without_profile_fails_at_prompt_step() {
        let db = Arc::new(MemoryBackend::new());
        let app = app(&db, ScriptedModel::new());

        let (status, body) = send(&app, "POST", "/api/v1/ai_gen/create_ai_gen/u1", None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "cannot create new AI prompt.");
    }

    #[tokio::test]
    async fn model_failure_is_reported_as_gen_failure() {
        let db = Arc::new(MemoryBackend::new());
        fixtures::seed_profile(&db, "u1");
        let app = app(&db, ScriptedModel::new().fail("quota"));

        let (status, body) = send(&app, "POST", "/api/v1/ai_gen/create_ai_gen/u1", None).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "cannot create new AI gen.");
    }

    #[tokio::test]
    async fn chat_roundtrip_and_clear() {
        let db = Arc::new(MemoryBackend::new());
        let app = app(&db, ScriptedModel::new().reply("Drink more water."));

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/ai_gen/chat/u1",
            Some(json!({ "message": "any tips?", "sender": "user" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "Drink more water.");

        let (_, body) = send(&app, "GET", "/api/v1/ai_gen/chat/u1", None).await;
        let history = body["data"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["sender"], "user");
        assert_eq!(history[1]["sender"], "ai");

        let (status, _) = send(&app, "DELETE", "/api/v1/ai_gen/chat/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(db.count("ai_chats"), 0);
    }

    #[tokio::test]
    async fn chat_rejects_bad_input() {
        let db = Arc::new(MemoryBackend::new());
        let app = app(&db, ScriptedModel::new());

        let (status, body) = send(&app, "POST", "/api/v1/ai_gen/chat/u1", Some(json!({ "message": "" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "invalid json body");

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/ai_gen/chat/u1",
            Some(json!({ "message": "hi", "sender": "ai" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "invalid sender");
        assert!(db.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_plan_route_cascades() {
        let db = Arc::new(MemoryBackend::new());
        fixtures::seed_profile(&db, "u1");
        let app = app(&db, ScriptedModel::new().reply("plan"));
        send(&app, "POST", "/api/v1/ai_gen/create_ai_gen/u1", None).await;
        let (_, body) = send(&app, "GET", "/api/v1/ai_gen/ai_gens", None).await;
        let plan_id = body["data"][0]["id"].as_str().unwrap().to_string();

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/ai_gen/goal/{}", plan_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(db.count("life_goals"), 0);

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/ai_gen/goal/{}", plan_id), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn prompt_create_and_delete() {
        let db = Arc::new(MemoryBackend::new());
        fixtures::seed_profile(&db, "u1");
        let app = app(&db, ScriptedModel::new());

        let (status, body) = send(&app, "POST", "/api/v1/ai_gen/add_ai_prompt/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "successfully created new AI prompt");

        let prompt_id = db.rows("ai_prompt")[0]["id"].as_str().unwrap().to_string();
        let (status, _) = send(&app, "DELETE", &format!("/api/v1/ai_gen/ai_prompt/{}", prompt_id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(db.count("ai_prompt"), 0);
    }
}
