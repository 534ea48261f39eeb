//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::user::{CreateUser, Credentials, UpdateUser, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new user account
    pub async fn create(&self, user: &CreateUser) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (user_id, user_name, user_password, user_image)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.user_id)
        .bind(&user.user_name)
        .bind(&user.user_password)
        .bind(&user.user_image)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Fetch the rows matching an id/credential pair. Empty when the
    /// credentials do not match; clients treat the empty set as a failed
    /// login.
    pub async fn find_by_credentials(&self, credentials: &Credentials) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE user_id = $1 AND user_password = $2",
        )
        .bind(&credentials.user_id)
        .bind(&credentials.user_password)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Update a profile. The credential column is only touched when the
    /// request carries a non-blank password.
    pub async fn update(&self, update: &UpdateUser) -> AppResult<u64> {
        let result = if let Some(password) = update.new_password() {
            sqlx::query(
                r#"
                UPDATE users
                SET user_name = $1, user_image = $2, user_password = $3
                WHERE user_id = $4
                "#,
            )
            .bind(&update.user_name)
            .bind(&update.user_image)
            .bind(password)
            .bind(&update.user_id)
            .execute(&self.pool)
            .await?
        } else {
            sqlx::query(
                "UPDATE users SET user_name = $1, user_image = $2 WHERE user_id = $3",
            )
            .bind(&update.user_name)
            .bind(&update.user_image)
            .bind(&update.user_id)
            .execute(&self.pool)
            .await?
        };

        Ok(result.rows_affected())
    }
}
