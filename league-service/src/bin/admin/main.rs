use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use league_service::config::Config;
use league_service::domain::user::models::CreateUserCommand;
use league_service::domain::user::models::EmailAddress;
use league_service::domain::user::models::Role;
use league_service::domain::user::models::Username;
use league_service::domain::user::ports::UserServicePort;
use league_service::domain::user::service::UserService;
use league_service::fixtures::load_fixtures;
use league_service::outbound::repositories::PostgresLeagueRepository;
use league_service::outbound::repositories::PostgresTeamRepository;
use league_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "league-admin")]
#[command(about = "League service administration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Creates a user entry in database.
    CreateUser {
        /// The username of the user.
        #[arg(long)]
        username: String,

        /// The email of the user.
        #[arg(long)]
        email: String,

        /// The roles of the user (repeatable, defaults to ROLE_USER).
        #[arg(long)]
        roles: Vec<String>,
    },
    /// Loads the league and team seed data.
    LoadFixtures,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league_service=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Command::CreateUser {
            username,
            email,
            roles,
        } => create_user(pool, username, email, roles).await,
        Command::LoadFixtures => {
            let leagues = PostgresLeagueRepository::new(pool.clone());
            let teams = PostgresTeamRepository::new(pool);
            let summary = load_fixtures(&leagues, &teams, &mut rand::thread_rng()).await?;
            println!(
                "Loaded {} leagues and {} teams",
                summary.leagues, summary.teams
            );
            Ok(())
        }
    }
}

async fn create_user(
    pool: PgPool,
    username: String,
    email: String,
    roles: Vec<String>,
) -> anyhow::Result<()> {
    let roles = roles
        .into_iter()
        .map(Role::new)
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid role")?;

    let username = Username::new(username).context("Invalid username")?;
    let email = EmailAddress::new(email).context("Invalid email")?;

    let password = auth::PasswordHasher::generate_password();
    let command = CreateUserCommand::new(username, email, password.clone(), roles);

    let user_service = UserService::new(Arc::new(PostgresUserRepository::new(pool)));
    let user = user_service.create_user(command).await?;

    println!();
    println!("CREDENTIALS");
    println!("-----------");
    println!("Username: {}", user.username);
    println!("Password: {}", password);
    println!();

    Ok(())
}
