use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::TeamData;
use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::LeagueId;
use crate::inbound::http::router::AppState;

pub async fn list_league_teams(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
) -> Result<ApiSuccess<Vec<TeamData>>, ApiError> {
    let league_id = LeagueId::from_string(&league_id).map_err(LeagueError::from)?;

    state
        .team_service
        .list_league_teams(league_id)
        .await
        .map_err(ApiError::from)
        .map(|teams| ApiSuccess::new(StatusCode::OK, teams.iter().map(TeamData::from).collect()))
}
