use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Error type for token time-to-live expressions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TtlError {
    #[error("Empty duration expression")]
    Empty,

    #[error("Invalid duration amount in '{0}'")]
    InvalidAmount(String),

    #[error("Unknown duration unit '{0}' (use seconds, minutes, hours, days or weeks)")]
    UnknownUnit(String),

    #[error("Duration must be positive: '{0}'")]
    NotPositive(String),
}
