//! Application state shared across handlers

use common::cache::RedisPool;
use sqlx::PgPool;

use crate::{config::UsersConfig, repositories::UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub redis_pool: RedisPool,
    pub user_repository: UserRepository,
    pub config: UsersConfig,
}
