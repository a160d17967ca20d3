use std::fmt;

use thiserror::Error;

use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::LeagueId;
use crate::domain::team::models::TeamId;

/// Validated team attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    Name,
    Strip,
}

impl fmt::Display for TeamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamField::Name => f.write_str("name"),
            TeamField::Strip => f.write_str("strip"),
        }
    }
}

/// Error for TeamId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamIdError {
    #[error("Invalid team id: {0}")]
    InvalidFormat(String),
}

/// Error for team name and strip validation failures
///
/// Display strings are the messages reported to API clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeamFieldError {
    #[error("Team {0} should not be blank.")]
    Blank(TeamField),

    #[error("Team {0} should contain only letters, digits, spaces, dots and hyphens.")]
    InvalidCharacters(TeamField),

    #[error("Team {field} should be at most {max} characters long.")]
    TooLong { field: TeamField, max: usize },
}

/// Top-level error for all team-related operations
#[derive(Debug, Clone, Error)]
pub enum TeamError {
    #[error(transparent)]
    InvalidTeamId(#[from] TeamIdError),

    #[error(transparent)]
    InvalidField(#[from] TeamFieldError),

    #[error("Team with id: {0} not found")]
    NotFound(TeamId),

    #[error("League with id: {0} not found")]
    LeagueNotFound(LeagueId),

    #[error("League with id: {0} does not have any team")]
    LeagueHasNoTeams(LeagueId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<LeagueError> for TeamError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::NotFound(id) => TeamError::LeagueNotFound(id),
            other => TeamError::DatabaseError(other.to_string()),
        }
    }
}
