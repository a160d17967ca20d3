use thiserror::Error;

/// Issued token persistence errors
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
