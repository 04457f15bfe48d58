// src/handlers/lifegoal.rs
use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::models::{Envelope, LifeGoal, LifeGoalSchema, UpdateLifeGoalSchema};
use crate::validation::ValidatedJson;
use crate::AppState;

pub async fn create_lifegoal_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LifeGoalSchema>,
) -> Result<Json<Envelope>, AppError> {
    state
        .life_goals
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot insert new life goal."))?;
    Ok(Json(Envelope::message("successfully created new life goal")))
}

pub async fn get_lifegoals_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<LifeGoal>>>, AppError> {
    let goals = state
        .life_goals
        .list()
        .await
        .map_err(AppError::downstream("cannot get all life goals"))?;
    Ok(Json(Envelope::with_data("success", goals)))
}

pub async fn get_user_lifegoal_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<LifeGoal>>, AppError> {
    let goal = state
        .life_goals
        .find_by_user(&id)
        .await
        .map_err(AppError::downstream("cannot get life goal data"))?;
    Ok(Json(Envelope::with_data("success", goal)))
}

pub async fn get_lifegoal_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<LifeGoal>>, AppError> {
    let goal = state
        .life_goals
        .find(&id)
        .await
        .map_err(AppError::downstream("cannot get life goal data"))?;
    Ok(Json(Envelope::with_data("success", goal)))
}

// 只更新请求里带了的字段
pub async fn update_lifegoal_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateLifeGoalSchema>,
) -> Result<Json<Envelope>, AppError> {
    state
        .life_goals
        .update(&id, body)
        .await
        .map_err(AppError::downstream("cannot update life goal"))?;
    Ok(Json(Envelope::message("successfully updated life goal")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::aimodel::scripted::ScriptedModel;
    use crate::datasource::memory::MemoryBackend;
    use crate::handlers::testing::{app, send};

    #[tokio::test]
    async fn create_fetch_and_patch_life_goal() {
        let db = Arc::new(MemoryBackend::new());
        let app = app(&db, ScriptedModel::new());

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/lifegoals/add_lifegoal/u1",
            Some(json!({ "short_term": ["sleep by 11"], "long_term": ["run a marathon"], "priorities": ["health"], "timeframe": "1y" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "successfully created new life goal");

        let (status, body) = send(&app, "GET", "/api/v1/lifegoals/users/u1", None).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/api/v1/lifegoals/update_lifegoal/{}", id),
            Some(json!({ "timeframe": "18m" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "successfully updated life goal");

        let (_, body) = send(&app, "GET", &format!("/api/v1/lifegoals/lifegoal/{}", id), None).await;
        assert_eq!(body["data"]["timeframe"], "18m");
        assert_eq!(body["data"]["long_term"], json!(["run a marathon"]));

        let (_, body) = send(&app, "GET", "/api/v1/lifegoals/lifegoals", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_list_field_is_422() {
        let db = Arc::new(MemoryBackend::new());
        let app = app(&db, ScriptedModel::new());

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/lifegoals/add_lifegoal/u1",
            Some(json!({ "short_term": [], "long_term": [], "timeframe": "1y" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "invalid json body");
    }

    #[tokio::test]
    async fn duplicate_goals_for_user_is_403() {
        let db = Arc::new(MemoryBackend::new());
        db.seed("life_goals", json!({ "user_id": "u1" }));
        db.seed("life_goals", json!({ "user_id": "u1" }));
        let app = app(&db, ScriptedModel::new());

        let (status, body) = send(&app, "GET", "/api/v1/lifegoals/users/u1", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "cannot get life goal data");
    }
}
