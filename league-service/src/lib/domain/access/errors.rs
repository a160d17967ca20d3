use auth::AuthenticationError;
use thiserror::Error;

use crate::domain::token::errors::TokenError;
use crate::domain::user::errors::UserError;

/// Request authentication failures.
///
/// Display strings are the messages reported to API clients.
#[derive(Debug, Clone, Error)]
pub enum AccessError {
    /// No `Authorization` header on a protected route
    #[error("Authentication Required")]
    AuthenticationRequired,

    #[error(transparent)]
    Rejected(#[from] AuthenticationError),

    /// Token verified but its subject is not an active user
    #[error("Invalid Credentials")]
    UserNotFound,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for AccessError {
    fn from(err: UserError) -> Self {
        AccessError::DatabaseError(err.to_string())
    }
}

/// Login failures
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    /// Unknown or inactive user, or wrong password
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for LoginError {
    fn from(err: UserError) -> Self {
        LoginError::DatabaseError(err.to_string())
    }
}

impl From<TokenError> for LoginError {
    fn from(err: TokenError) -> Self {
        LoginError::DatabaseError(err.to_string())
    }
}
