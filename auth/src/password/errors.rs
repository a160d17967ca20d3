use thiserror::Error;

/// Password hashing failures. A wrong password is not an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is unreadable: {0}")]
    MalformedHash(String),
}
