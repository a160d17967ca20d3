use thiserror::Error;

use crate::domain::league::models::LeagueId;

/// Error for LeagueId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeagueIdError {
    #[error("Invalid league id: {0}")]
    InvalidFormat(String),
}

/// Error for LeagueName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeagueNameError {
    #[error("League name should not be blank.")]
    Blank,

    #[error("League name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all league-related operations
#[derive(Debug, Clone, Error)]
pub enum LeagueError {
    #[error(transparent)]
    InvalidLeagueId(#[from] LeagueIdError),

    #[error(transparent)]
    InvalidLeagueName(#[from] LeagueNameError),

    #[error("League with id: {0} not found")]
    NotFound(LeagueId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
