use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_team::create_team;
use super::handlers::delete_league::delete_league;
use super::handlers::get_league::get_league;
use super::handlers::get_team::get_team;
use super::handlers::home::home;
use super::handlers::list_league_teams::list_league_teams;
use super::handlers::list_leagues::list_leagues;
use super::handlers::list_teams::list_teams;
use super::handlers::login::login;
use super::handlers::not_found::not_found;
use super::handlers::update_team::update_team;
use super::middleware::authenticate as auth_middleware;
use crate::domain::access::ports::AccessServicePort;
use crate::domain::league::ports::LeagueServicePort;
use crate::domain::team::ports::TeamServicePort;

/// Shared handler state. Services sit behind their ports so the router can be
/// driven by any implementation.
#[derive(Clone)]
pub struct AppState {
    pub league_service: Arc<dyn LeagueServicePort>,
    pub team_service: Arc<dyn TeamServicePort>,
    pub access_service: Arc<dyn AccessServicePort>,
}

pub fn create_router(
    league_service: Arc<dyn LeagueServicePort>,
    team_service: Arc<dyn TeamServicePort>,
    access_service: Arc<dyn AccessServicePort>,
) -> Router {
    let state = AppState {
        league_service,
        team_service,
        access_service,
    };

    let public_routes = Router::new()
        .route("/", get(home))
        .route("/login", post(login));

    // One parameter name per path shape; POST takes the league id
    let protected_routes = Router::new()
        .route("/leagues", get(list_leagues))
        .route("/leagues/:id", get(get_league).delete(delete_league))
        .route("/leagues/:id/teams", get(list_league_teams))
        .route("/teams", get(list_teams))
        .route(
            "/teams/:id",
            get(get_team).put(update_team).post(create_team),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(not_found)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
