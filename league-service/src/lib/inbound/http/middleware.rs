use auth::AuthenticationError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::AuthenticatedUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that resolves the bearer token to an active user and adds it to
/// request extensions.
///
/// Every rejection ends the request with 401 and the reason message.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = authorization_header(&req).map_err(reject)?;

    let user = state
        .access_service
        .authenticate(authorization.as_deref())
        .await
        .map_err(reject)?;

    tracing::debug!(user_id = %user.id, "Request authenticated");
    req.extensions_mut().insert(AuthenticatedUser::from(&user));

    Ok(next.run(req).await)
}

/// Raw `Authorization` value; a value that is not visible ASCII is malformed.
fn authorization_header(req: &Request) -> Result<Option<String>, AccessError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map(str::to_string)
                .map_err(|_| AccessError::Rejected(AuthenticationError::MalformedHeader))
        })
        .transpose()
}

fn reject(err: AccessError) -> ApiError {
    match &err {
        AccessError::DatabaseError(_) => {
            tracing::error!(error = %err, "Authentication lookup failed")
        }
        _ => tracing::warn!(reason = %err, "Authentication rejected"),
    }

    ApiError::from(err)
}
