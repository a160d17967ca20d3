use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TeamData;
use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::LeagueId;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::CreateTeamCommand;
use crate::inbound::http::router::AppState;

/// Adds a team to the league named in the path.
///
/// The body is validated before the league is looked up, so an invalid team
/// for an unknown league reports the validation failure.
pub async fn create_team(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
    body: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Result<ApiSuccess<TeamData>, ApiError> {
    let league_id = LeagueId::from_string(&league_id).map_err(LeagueError::from)?;
    let Json(body) = body?;

    state
        .team_service
        .add_team(league_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref team| ApiSuccess::new(StatusCode::CREATED, team.into()))
}

/// HTTP request body for adding a team (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTeamRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    strip: Option<String>,
}

impl CreateTeamRequest {
    fn try_into_command(self) -> Result<CreateTeamCommand, TeamError> {
        Ok(CreateTeamCommand::new(self.name, self.strip)?)
    }
}
