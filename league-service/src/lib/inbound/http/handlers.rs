use auth::AuthenticationError;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::access::errors::AccessError;
use crate::domain::access::errors::LoginError;
use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::League;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::Team;

pub mod create_team;
pub mod delete_league;
pub mod get_league;
pub mod get_team;
pub mod home;
pub mod list_league_teams;
pub mod list_leagues;
pub mod list_teams;
pub mod login;
pub mod not_found;
pub mod update_team;

/// Realm advertised when login credentials are rejected.
const LOGIN_REALM: &str = "Basic realm=\"API Login\"";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    NotAcceptable(String),
    Conflict(String),
    Unauthorized(String),
    /// Rejected login; carries the `WWW-Authenticate` challenge
    LoginRejected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::NotAcceptable(msg) => (StatusCode::NOT_ACCEPTABLE, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::LoginRejected(message) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, LOGIN_REALM)],
                    Json(ApiErrorData { message }),
                )
                    .into_response();
            }
        };

        (status, Json(ApiErrorData { message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::InvalidLeagueId(_) => ApiError::BadRequest(err.to_string()),
            LeagueError::InvalidLeagueName(_) => ApiError::NotAcceptable(err.to_string()),
            LeagueError::NotFound(_) => ApiError::NotFound(err.to_string()),
            LeagueError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TeamError> for ApiError {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::InvalidTeamId(_) => ApiError::BadRequest(err.to_string()),
            TeamError::InvalidField(_) => ApiError::NotAcceptable(err.to_string()),
            TeamError::NotFound(_)
            | TeamError::LeagueNotFound(_)
            | TeamError::LeagueHasNoTeams(_) => ApiError::NotFound(err.to_string()),
            TeamError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::AuthenticationRequired | AccessError::UserNotFound => {
                ApiError::Unauthorized(err.to_string())
            }
            AccessError::Rejected(reason) => match reason {
                AuthenticationError::MissingHeader
                | AuthenticationError::MalformedHeader
                | AuthenticationError::ExpiredToken
                | AuthenticationError::MalformedToken
                | AuthenticationError::InvalidToken => ApiError::Unauthorized(reason.to_string()),
                // Anything else carries no client-facing reason
                _ => ApiError::Unauthorized(AccessError::UserNotFound.to_string()),
            },
            AccessError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials => ApiError::LoginRejected(err.to_string()),
            LoginError::TokenIssuance(_) | LoginError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Plain `{message}` body used by informational responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueData {
    pub id: i64,
    pub name: String,
}

impl From<&League> for LeagueData {
    fn from(league: &League) -> Self {
        Self {
            id: league.id.0,
            name: league.name.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamData {
    pub id: i64,
    pub name: String,
    pub strip: String,
    pub league_id: i64,
}

impl From<&Team> for TeamData {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.0,
            name: team.name.as_str().to_string(),
            strip: team.strip.as_str().to_string(),
            league_id: team.league_id.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::league::models::LeagueId;
    use crate::domain::team::errors::TeamField;
    use crate::domain::team::errors::TeamFieldError;
    use crate::domain::team::models::TeamId;

    #[test]
    fn test_team_errors_map_to_statuses() {
        assert_eq!(
            ApiError::from(TeamError::NotFound(TeamId(3))),
            ApiError::NotFound("Team with id: 3 not found".to_string())
        );
        assert_eq!(
            ApiError::from(TeamError::from(TeamFieldError::Blank(TeamField::Strip))),
            ApiError::NotAcceptable("Team strip should not be blank.".to_string())
        );
        assert_eq!(
            ApiError::from(TeamError::from(LeagueError::NotFound(LeagueId(2)))),
            ApiError::NotFound("League with id: 2 not found".to_string())
        );
    }

    #[test]
    fn test_access_errors_map_to_unauthorized() {
        assert_eq!(
            ApiError::from(AccessError::AuthenticationRequired),
            ApiError::Unauthorized("Authentication Required".to_string())
        );
        assert_eq!(
            ApiError::from(AccessError::Rejected(AuthenticationError::ExpiredToken)),
            ApiError::Unauthorized("Expired JWT".to_string())
        );
        assert_eq!(
            ApiError::from(AccessError::Rejected(
                AuthenticationError::InvalidCredentials
            )),
            ApiError::Unauthorized("Invalid Credentials".to_string())
        );
        assert_eq!(
            ApiError::from(AccessError::UserNotFound),
            ApiError::Unauthorized("Invalid Credentials".to_string())
        );
    }

    #[test]
    fn test_login_rejection_carries_challenge() {
        let response = ApiError::from(LoginError::InvalidCredentials).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic realm=\"API Login\""
        );
    }
}
