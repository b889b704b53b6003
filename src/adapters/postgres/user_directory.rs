//! PostgreSQL implementation of UserDirectory.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{UserDirectory, UserProfile};

use super::classify_db_error;

/// PostgreSQL implementation of UserDirectory, backed by the platform's
/// `users` table.
#[derive(Clone)]
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn get_user(&self, user_uuid: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row: Option<(Option<String>, Option<String>, Option<String>)> = sqlx::query_as(
            r#"
            SELECT first_name, last_name, email
            FROM users
            WHERE user_uuid = $1
            "#,
        )
        .bind(user_uuid.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify_db_error(e, "fetch user"))?;

        Ok(row.map(|(first_name, last_name, email)| UserProfile {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
        }))
    }
}
