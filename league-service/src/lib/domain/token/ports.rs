use async_trait::async_trait;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::TokenRecord;

/// Persistence operations for issued tokens.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Persist an issued token.
    ///
    /// # Errors
    /// * `AlreadyExists` - Token id collision
    /// * `DatabaseError` - Database operation failed
    async fn save(&self, record: TokenRecord) -> Result<TokenRecord, TokenError>;
}
