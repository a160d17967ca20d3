mod store;

use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use auth::JwtSettings;
use league_service::domain::access::service::AccessService;
use league_service::domain::league::models::League;
use league_service::domain::league::models::LeagueName;
use league_service::domain::league::ports::LeagueRepository;
use league_service::domain::league::service::LeagueService;
use league_service::domain::team::models::NewTeam;
use league_service::domain::team::models::Team;
use league_service::domain::team::models::TeamName;
use league_service::domain::team::models::TeamStrip;
use league_service::domain::team::ports::TeamRepository;
use league_service::domain::team::service::TeamService;
use league_service::domain::user::models::CreateUserCommand;
use league_service::domain::user::models::EmailAddress;
use league_service::domain::user::models::User;
use league_service::domain::user::models::Username;
use league_service::domain::user::ports::UserServicePort;
use league_service::domain::user::service::UserService;
use league_service::inbound::http::router::create_router;
pub use store::InMemoryStore;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "pass_word!";

/// Test application that spawns a real server over in-memory repositories
pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    user_service: UserService<InMemoryStore>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::default());

        let settings = JwtSettings::new(TEST_SECRET, "HS256", "+1 hour".parse().unwrap());
        let authenticator =
            Arc::new(Authenticator::new(&settings).expect("Failed to create authenticator"));

        let league_service = Arc::new(LeagueService::new(Arc::clone(&store)));
        let team_service = Arc::new(TeamService::new(Arc::clone(&store), Arc::clone(&store)));
        let access_service = Arc::new(AccessService::new(
            Arc::clone(&store),
            Arc::clone(&store),
            authenticator,
        ));

        let router = create_router(league_service, team_service, access_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            user_service: UserService::new(Arc::clone(&store)),
            store,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_SECRET.as_bytes()),
        }
    }

    /// Create an active user whose password is [`TEST_PASSWORD`]
    pub async fn create_user(&self, username: &str) -> User {
        let command = CreateUserCommand::new(
            Username::new(username.to_string()).unwrap(),
            EmailAddress::new(format!("{}@example.com", username)).unwrap(),
            TEST_PASSWORD.to_string(),
            vec![],
        );
        self.user_service
            .create_user(command)
            .await
            .expect("Failed to create user")
    }

    /// Create a user and log in, returning the issued token
    pub async fn authenticated_user(&self, username: &str) -> (User, String) {
        let user = self.create_user(username).await;

        let response = self
            .post("/login")
            .json(&serde_json::json!({
                "username": username,
                "password": TEST_PASSWORD,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let token = body["token"].as_str().unwrap().to_string();

        (user, token)
    }

    pub async fn seed_league(&self, name: &str) -> League {
        LeagueRepository::create(&*self.store, LeagueName::new(name.to_string()).unwrap())
            .await
            .expect("Failed to seed league")
    }

    pub async fn seed_team(&self, league: &League, name: &str, strip: &str) -> Team {
        TeamRepository::create(
            &*self.store,
            NewTeam {
                league_id: league.id,
                name: TeamName::new(name.to_string()).unwrap(),
                strip: TeamStrip::new(strip.to_string()).unwrap(),
            },
        )
        .await
        .expect("Failed to seed team")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
