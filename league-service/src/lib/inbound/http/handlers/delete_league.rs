use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::access::models::AuthenticatedUser;
use crate::domain::league::errors::LeagueError;
use crate::domain::league::models::LeagueId;
use crate::inbound::http::router::AppState;

pub async fn delete_league(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(league_id): Path<String>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let league_id = LeagueId::from_string(&league_id).map_err(LeagueError::from)?;

    state.league_service.delete_league(league_id).await?;
    tracing::info!(league_id = %league_id, user_id = %caller.user_id, "League removed by request");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: format!("League with id: {} was deleted", league_id),
        },
    ))
}
