use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::TokenRecord;
use crate::domain::token::ports::TokenRepository;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, TokenError> {
        sqlx::query(
            r#"
            INSERT INTO tokens (id, data, created_at, expires_at, user_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id.0)
        .bind(&record.data)
        .bind(record.created_at)
        .bind(record.expires_at)
        .bind(record.user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                TokenError::AlreadyExists(record.id.to_string())
            }
            _ => TokenError::DatabaseError(e.to_string()),
        })?;

        Ok(record)
    }
}
