use std::sync::Arc;

use auth::Authenticator;
use league_service::config::Config;
use league_service::domain::access::service::AccessService;
use league_service::domain::league::service::LeagueService;
use league_service::domain::team::service::TeamService;
use league_service::inbound::http::router::create_router;
use league_service::outbound::repositories::PostgresLeagueRepository;
use league_service::outbound::repositories::PostgresTeamRepository;
use league_service::outbound::repositories::PostgresTokenRepository;
use league_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "league-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_ttl = %config.jwt.ttl,
        "Configuration loaded"
    );

    // Fails on a non-HMAC algorithm before any connection is made
    let authenticator = Arc::new(Authenticator::new(&config.jwt)?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let token_repository = Arc::new(PostgresTokenRepository::new(pg_pool.clone()));
    let league_repository = Arc::new(PostgresLeagueRepository::new(pg_pool.clone()));
    let team_repository = Arc::new(PostgresTeamRepository::new(pg_pool));

    let league_service = Arc::new(LeagueService::new(Arc::clone(&league_repository)));
    let team_service = Arc::new(TeamService::new(team_repository, league_repository));
    let access_service = Arc::new(AccessService::new(
        user_repository,
        token_repository,
        authenticator,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(league_service, team_service, access_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
