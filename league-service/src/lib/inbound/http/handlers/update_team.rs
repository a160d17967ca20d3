use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TeamData;
use crate::domain::team::errors::TeamError;
use crate::domain::team::models::TeamId;
use crate::domain::team::models::UpdateTeamCommand;
use crate::inbound::http::router::AppState;

pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    body: Result<Json<UpdateTeamRequest>, JsonRejection>,
) -> Result<ApiSuccess<TeamData>, ApiError> {
    let team_id = TeamId::from_string(&team_id).map_err(TeamError::from)?;
    let Json(body) = body?;

    state
        .team_service
        .update_team(team_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref team| ApiSuccess::new(StatusCode::OK, team.into()))
}

/// HTTP request body for updating a team; omitted or empty fields are kept
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    strip: Option<String>,
}

impl UpdateTeamRequest {
    fn try_into_command(self) -> Result<UpdateTeamCommand, TeamError> {
        Ok(UpdateTeamCommand::new(self.name, self.strip)?)
    }
}
