//! User repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;

use crate::models::User;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        info!("Finding user by ID: {}", id);

        let row = sqlx::query(
            r#"
            SELECT id, username, email, hashed_password,
                   is_active, is_superuser, is_verified,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let user = User {
                    id: row.get("id"),
                    username: row.get("username"),
                    email: row.get("email"),
                    hashed_password: row.get("hashed_password"),
                    is_active: row.get("is_active"),
                    is_superuser: row.get("is_superuser"),
                    is_verified: row.get("is_verified"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                };
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}
