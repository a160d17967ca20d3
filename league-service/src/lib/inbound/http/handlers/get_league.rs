use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::LeagueData;
use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::LeagueId;
use crate::inbound::http::router::AppState;

pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
) -> Result<ApiSuccess<LeagueData>, ApiError> {
    let league_id = LeagueId::from_string(&league_id).map_err(LeagueError::from)?;

    state
        .league_service
        .get_league(league_id)
        .await
        .map_err(ApiError::from)
        .map(|ref league| ApiSuccess::new(StatusCode::OK, league.into()))
}
