use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::LeagueData;
use crate::inbound::http::router::AppState;

pub async fn list_leagues(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<LeagueData>>, ApiError> {
    state
        .league_service
        .list_leagues()
        .await
        .map_err(ApiError::from)
        .map(|leagues| {
            ApiSuccess::new(
                StatusCode::OK,
                leagues.iter().map(LeagueData::from).collect(),
            )
        })
}
