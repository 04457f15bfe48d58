// src/handlers/users.rs
use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::models::{
    AllDataSchema, CreateUserSchema, Envelope, FinanceInfo, FinanceSchema, Habit, HabitSchema,
    HealthBackground, HealthSchema, Mood, MoodSchema, NewMood, Schedule, ScheduleSchema,
    UpdateScheduleSchema, UpdateUserSchema, UserProfile,
};
use crate::validation::ValidatedJson;
use crate::AppState;

type Reply<T = serde_json::Value> = Result<Json<Envelope<T>>, AppError>;

fn success() -> Json<Envelope> {
    Json(Envelope::message("success"))
}

// --- 1. 用户资料 ---
pub async fn create_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateUserSchema>,
) -> Reply {
    state
        .users
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot insert new user account."))?;
    Ok(success())
}

pub async fn get_users_handler(State(state): State<AppState>) -> Reply<Vec<UserProfile>> {
    let users = state
        .users
        .list()
        .await
        .map_err(AppError::downstream("cannot get all users data"))?;
    Ok(Json(Envelope::with_data("success", users)))
}

pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<UserProfile> {
    let user = state
        .users
        .find(&id)
        .await
        .map_err(AppError::downstream("cannot get user data"))?;
    Ok(Json(Envelope::with_data("success", user)))
}

pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateUserSchema>,
) -> Reply {
    state
        .users
        .update(&id, body)
        .await
        .map_err(AppError::downstream("cannot update user data"))?;
    Ok(success())
}

pub async fn delete_user_data_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply {
    state
        .users
        .delete_all_data(&id)
        .await
        .map_err(AppError::downstream("cannot delete user data"))?;
    Ok(success())
}

// 先整体校验，再按 health -> schedule -> life goal -> finance 依次写入，中途失败不回滚
pub async fn add_all_data_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<AllDataSchema>,
) -> Reply {
    state
        .health
        .create(&id, body.health)
        .await
        .map_err(AppError::downstream("cannot insert new health background"))?;
    state
        .schedules
        .create(&id, body.schedule)
        .await
        .map_err(AppError::downstream("cannot insert new schedule."))?;
    state
        .life_goals
        .create(&id, body.life_goal)
        .await
        .map_err(AppError::downstream("cannot insert new life goal."))?;
    state
        .finance
        .create(&id, body.finance)
        .await
        .map_err(AppError::downstream("cannot create new finance."))?;
    Ok(success())
}

// --- 2. 财务 ---
pub async fn create_finance_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<FinanceSchema>,
) -> Reply {
    state
        .finance
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot create new finance."))?;
    Ok(Json(Envelope::message("successfully created new finance")))
}

pub async fn get_finances_handler(State(state): State<AppState>) -> Reply<Vec<FinanceInfo>> {
    let finances = state
        .finance
        .list()
        .await
        .map_err(AppError::downstream("failed to fetch finance records"))?;
    Ok(Json(Envelope::with_data(
        "successfully fetched finance records",
        finances,
    )))
}

pub async fn get_finance_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<FinanceInfo> {
    let finance = state
        .finance
        .find_by_user(&id)
        .await
        .map_err(AppError::downstream("failed to fetch finance records for user"))?;
    Ok(Json(Envelope::with_data(
        "successfully fetched finance records for user",
        finance,
    )))
}

// --- 3. 健康 ---
pub async fn create_health_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<HealthSchema>,
) -> Reply {
    state
        .health
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot insert new health background"))?;
    Ok(Json(Envelope::message(
        "successfully created new health background",
    )))
}

pub async fn get_health_list_handler(
    State(state): State<AppState>,
) -> Reply<Vec<HealthBackground>> {
    let records = state
        .health
        .list()
        .await
        .map_err(AppError::downstream("cannot get all health data"))?;
    Ok(Json(Envelope::with_data("success", records)))
}

pub async fn get_health_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<HealthBackground> {
    let record = state
        .health
        .find_by_user(&id)
        .await
        .map_err(AppError::downstream("cannot get health data by user ID"))?;
    Ok(Json(Envelope::with_data("success", record)))
}

// --- 4. 日程 ---
pub async fn create_schedule_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ScheduleSchema>,
) -> Reply {
    state
        .schedules
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot insert new schedule."))?;
    Ok(success())
}

pub async fn get_schedules_handler(State(state): State<AppState>) -> Reply<Vec<Schedule>> {
    let schedules = state
        .schedules
        .list()
        .await
        .map_err(AppError::downstream("cannot get all schedule data"))?;
    Ok(Json(Envelope::with_data("success", schedules)))
}

// 按记录 id 查
pub async fn get_schedule_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<Schedule> {
    let schedule = state
        .schedules
        .find(&id)
        .await
        .map_err(AppError::downstream("cannot get schedule data"))?;
    Ok(Json(Envelope::with_data("success", schedule)))
}

pub async fn get_user_schedule_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<Schedule> {
    let schedule = state
        .schedules
        .find_by_user(&id)
        .await
        .map_err(AppError::downstream("cannot get schedule data"))?;
    Ok(Json(Envelope::with_data("success", schedule)))
}

pub async fn update_schedule_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UpdateScheduleSchema>,
) -> Reply {
    state
        .schedules
        .update(&id, body)
        .await
        .map_err(AppError::downstream("cannot update schedule data"))?;
    Ok(success())
}

// --- 5. 习惯 / 心情 ---
pub async fn create_habit_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<HabitSchema>,
) -> Reply {
    state
        .habits
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot create new habit"))?;
    Ok(success())
}

pub async fn get_habits_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<Vec<Habit>> {
    let habits = state
        .habits
        .list_by_user(&id)
        .await
        .map_err(AppError::downstream("cannot get habits"))?;
    Ok(Json(Envelope::with_data("success", habits)))
}

pub async fn create_mood_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<MoodSchema>,
) -> Reply<NewMood> {
    let mood = state
        .moods
        .create(&id, body)
        .await
        .map_err(AppError::downstream("cannot insert mood data"))?;
    Ok(Json(Envelope::with_data("success", mood)))
}

pub async fn get_moods_handler(State(state): State<AppState>) -> Reply<Vec<Mood>> {
    let moods = state
        .moods
        .list()
        .await
        .map_err(AppError::downstream("cannot get mood."))?;
    Ok(Json(Envelope::with_data("success", moods)))
}

pub async fn get_user_moods_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Reply<Vec<Mood>> {
    let moods = state
        .moods
        .list_by_user(&id)
        .await
        .map_err(AppError::downstream("cannot get mood."))?;
    Ok(Json(Envelope::with_data("success", moods)))
}
