// src/repositories/users.rs
use std::sync::Arc;

use async_trait::async_trait;

use super::{exactly_one, Table};
use crate::datasource::{eq, DataBackend};
use crate::error::ServiceResult;
use crate::models::{NewUserProfile, UserProfile};

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_all(&self) -> ServiceResult<Vec<UserProfile>>;
    async fn insert(&self, profile: &NewUserProfile) -> ServiceResult<()>;
    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<UserProfile>;
    async fn update(&self, profile: &UserProfile) -> ServiceResult<()>;
}

pub struct SupabaseUsersRepository {
    table: Table,
}

impl SupabaseUsersRepository {
    pub fn new(db: Arc<dyn DataBackend>) -> Self {
        Self {
            table: Table::new(db, "user_profiles"),
        }
    }
}

#[async_trait]
impl UsersRepository for SupabaseUsersRepository {
    async fn find_all(&self) -> ServiceResult<Vec<UserProfile>> {
        self.table
            .select("")
            .await
            .inspect_err(|e| tracing::error!("Users -> FindAll: {}", e))
    }

    async fn insert(&self, profile: &NewUserProfile) -> ServiceResult<()> {
        self.table
            .insert(profile)
            .await
            .inspect_err(|e| tracing::error!("Users -> InsertUser: {}", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> ServiceResult<UserProfile> {
        let rows = self
            .table
            .select(&eq("user_id", user_id))
            .await
            .inspect_err(|e| tracing::error!("Users -> FindByID: {}", e))?;
        exactly_one(rows, format!("user with ID {}", user_id))
            .inspect_err(|e| tracing::error!("Users -> FindByID: {}", e))
    }

    async fn update(&self, profile: &UserProfile) -> ServiceResult<()> {
        self.table
            .update(&eq("user_id", &profile.user_id), profile)
            .await
            .inspect_err(|e| tracing::error!("Users -> UpdateUser: {}", e))
    }
}
