use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;
use auth::bearer;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::TokenSubject;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::access::errors::AccessError;
use crate::domain::access::errors::LoginError;
use crate::domain::access::models::IssuedToken;
use crate::domain::access::models::LoginCommand;
use crate::domain::access::ports::AccessServicePort;
use crate::domain::token::models::TokenId;
use crate::domain::token::models::TokenRecord;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Issues tokens at login and resolves bearer tokens to active users.
pub struct AccessService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    users: Arc<UR>,
    tokens: Arc<TR>,
    authenticator: Arc<Authenticator>,
    /// Throwaway hash verified when the username is unknown
    decoy_hash: OnceLock<Option<String>>,
}

impl<UR, TR> AccessService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    /// Create a new access service.
    ///
    /// # Arguments
    /// * `users` - User lookup
    /// * `tokens` - Issued token store
    /// * `authenticator` - Configured password and JWT handling
    pub fn new(users: Arc<UR>, tokens: Arc<TR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            users,
            tokens,
            authenticator,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Pay for one password verification so unknown usernames answer as
    /// slowly as wrong passwords.
    fn verify_decoy(&self, password: &str) {
        let decoy = self.decoy_hash.get_or_init(|| {
            self.authenticator
                .hash_password(&auth::PasswordHasher::generate_password())
                .ok()
        });

        if let Some(hash) = decoy {
            let _ = self.authenticator.verify_password(password, hash);
        }
    }

    async fn find_login_user(&self, username: String) -> Result<Option<User>, LoginError> {
        // A username that cannot exist is reported like any unknown user
        let Ok(username) = Username::new(username) else {
            return Ok(None);
        };

        Ok(self.users.find_active_by_username(&username).await?)
    }
}

#[async_trait]
impl<UR, TR> AccessServicePort for AccessService<UR, TR>
where
    UR: UserRepository,
    TR: TokenRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, LoginError> {
        let Some(user) = self.find_login_user(command.username).await? else {
            self.verify_decoy(&command.password);
            return Err(LoginError::InvalidCredentials);
        };

        let token_id = TokenId::new();
        let issued_at = Utc::now().trunc_subsecs(0);
        let expires_at = issued_at + self.authenticator.token_ttl().as_duration();
        let subject = TokenSubject::new(user.id, user.roles.clone());
        let claims = Claims::for_user(token_id, subject, issued_at, self.authenticator.token_ttl());

        let result = self
            .authenticator
            .authenticate(&command.password, &user.password_hash, &claims)
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => LoginError::InvalidCredentials,
                other => LoginError::TokenIssuance(other.to_string()),
            })?;

        self.tokens
            .save(TokenRecord {
                id: token_id,
                data: result.access_token.clone(),
                created_at: issued_at,
                expires_at,
                user_id: user.id,
            })
            .await?;

        tracing::info!(user_id = %user.id, token_id = %token_id, "Token issued");

        Ok(IssuedToken {
            token: result.access_token,
        })
    }

    async fn authenticate(&self, authorization: Option<&str>) -> Result<User, AccessError> {
        if !bearer::supports(authorization) {
            return Err(AccessError::AuthenticationRequired);
        }

        let subject = self.authenticator.verify_bearer(authorization)?;

        let user_id = UserId::from_string(&subject.id).map_err(|_| AccessError::UserNotFound)?;

        self.users
            .find_active_by_id(&user_id)
            .await?
            .ok_or(AccessError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use auth::JwtHandler;
    use auth::JwtSettings;
    use chrono::Duration;
    use mockall::mock;

    use super::*;
    use crate::domain::token::errors::TokenError;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;

    const SECRET: &str = "test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_active_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_active_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    mock! {
        pub TestTokenRepository {}

        #[async_trait]
        impl TokenRepository for TestTokenRepository {
            async fn save(&self, record: TokenRecord) -> Result<TokenRecord, TokenError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        let settings = JwtSettings::new(SECRET, "HS256", "+1 hour".parse().unwrap());
        Arc::new(Authenticator::new(&settings).unwrap())
    }

    fn user(password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new("admin".to_string()).unwrap(),
            email: EmailAddress::new("admin@example.com".to_string()).unwrap(),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            roles: vec!["ROLE_ADMIN".to_string()],
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn login_command(username: &str, password: &str) -> LoginCommand {
        LoginCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_and_records_token() {
        let mut users = MockTestUserRepository::new();
        let mut tokens = MockTestTokenRepository::new();
        let account = user("password123");
        let user_id = account.id;

        users
            .expect_find_active_by_username()
            .withf(|username| username.as_str() == "admin")
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));
        tokens
            .expect_save()
            .withf(move |record| {
                record.user_id == user_id
                    && record.expires_at - record.created_at == Duration::hours(1)
            })
            .times(1)
            .returning(|record| Ok(record));

        let authenticator = authenticator();
        let service = AccessService::new(Arc::new(users), Arc::new(tokens), authenticator.clone());

        let issued = service
            .login(login_command("admin", "password123"))
            .await
            .unwrap();

        let claims: Claims = authenticator.validate_token(&issued.token).unwrap();
        assert_eq!(claims.lifetime(), 3600);
        let subject = claims.subject().unwrap();
        assert_eq!(subject.id, user_id.to_string());
        assert_eq!(subject.roles, vec!["ROLE_ADMIN".to_string()]);
    }

    #[tokio::test]
    async fn test_login_rejections_are_indistinguishable() {
        let mut users = MockTestUserRepository::new();
        let mut tokens = MockTestTokenRepository::new();
        let account = user("password123");

        users
            .expect_find_active_by_username()
            .returning(move |username| {
                if username.as_str() == "admin" {
                    Ok(Some(account.clone()))
                } else {
                    Ok(None)
                }
            });
        tokens.expect_save().times(0);

        let service = AccessService::new(Arc::new(users), Arc::new(tokens), authenticator());

        let wrong_password = service
            .login(login_command("admin", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(login_command("nobody", "password123"))
            .await
            .unwrap_err();
        let impossible_user = service
            .login(login_command("a b", "password123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, LoginError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), "Invalid credentials.");
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert_eq!(wrong_password.to_string(), impossible_user.to_string());
    }

    #[tokio::test]
    async fn test_login_unknown_user_still_verifies_a_password() {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_active_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccessService::new(
            Arc::new(users),
            Arc::new(MockTestTokenRepository::new()),
            authenticator(),
        );
        assert!(service.decoy_hash.get().is_none());

        let error = service
            .login(login_command("nobody", "password123"))
            .await
            .unwrap_err();

        assert!(matches!(error, LoginError::InvalidCredentials));
        let decoy = service.decoy_hash.get().unwrap().as_deref().unwrap();
        assert!(decoy.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_login_token_store_failure() {
        let mut users = MockTestUserRepository::new();
        let mut tokens = MockTestTokenRepository::new();
        let account = user("password123");

        users
            .expect_find_active_by_username()
            .returning(move |_| Ok(Some(account.clone())));
        tokens
            .expect_save()
            .times(1)
            .returning(|_| Err(TokenError::DatabaseError("connection lost".to_string())));

        let service = AccessService::new(Arc::new(users), Arc::new(tokens), authenticator());

        let result = service.login(login_command("admin", "password123")).await;
        assert!(matches!(result, Err(LoginError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_authenticate_accepts_issued_token() {
        let mut users = MockTestUserRepository::new();
        let mut tokens = MockTestTokenRepository::new();
        let account = user("password123");
        let user_id = account.id;
        let by_name = account.clone();

        users
            .expect_find_active_by_username()
            .returning(move |_| Ok(Some(by_name.clone())));
        users
            .expect_find_active_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));
        tokens.expect_save().returning(|record| Ok(record));

        let service = AccessService::new(Arc::new(users), Arc::new(tokens), authenticator());

        let issued = service
            .login(login_command("admin", "password123"))
            .await
            .unwrap();
        let header = format!("Bearer {}", issued.token);

        let resolved = service.authenticate(Some(&header)).await.unwrap();
        assert_eq!(resolved.id, user_id);
    }

    #[tokio::test]
    async fn test_authenticate_without_header() {
        let service = AccessService::new(
            Arc::new(MockTestUserRepository::new()),
            Arc::new(MockTestTokenRepository::new()),
            authenticator(),
        );

        let error = service.authenticate(None).await.unwrap_err();
        assert!(matches!(error, AccessError::AuthenticationRequired));
        assert_eq!(error.to_string(), "Authentication Required");
    }

    #[tokio::test]
    async fn test_authenticate_malformed_header() {
        let service = AccessService::new(
            Arc::new(MockTestUserRepository::new()),
            Arc::new(MockTestTokenRepository::new()),
            authenticator(),
        );

        let error = service.authenticate(Some("Basic xyz")).await.unwrap_err();
        assert_eq!(error.to_string(), "Malformed Authorization Header");

        let error = service.authenticate(Some("Bearer garbage")).await.unwrap_err();
        assert_eq!(error.to_string(), "Malformed JWT");
    }

    #[tokio::test]
    async fn test_authenticate_expired_token() {
        let service = AccessService::new(
            Arc::new(MockTestUserRepository::new()),
            Arc::new(MockTestTokenRepository::new()),
            authenticator(),
        );

        let now = Utc::now().timestamp();
        let claims = Claims::new("token-1", now - 7200, now - 3600)
            .with_subject(TokenSubject::new(UserId::new(), vec![]));
        let token = JwtHandler::new(SECRET.as_bytes()).encode(&claims).unwrap();

        let error = service
            .authenticate(Some(&format!("Bearer {}", token)))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            AccessError::Rejected(AuthenticationError::ExpiredToken)
        ));
        assert_eq!(error.to_string(), "Expired JWT");
    }

    #[tokio::test]
    async fn test_authenticate_token_without_subject() {
        let service = AccessService::new(
            Arc::new(MockTestUserRepository::new()),
            Arc::new(MockTestTokenRepository::new()),
            authenticator(),
        );

        let now = Utc::now().timestamp();
        let claims = Claims::new("token-1", now, now + 3600);
        let token = JwtHandler::new(SECRET.as_bytes()).encode(&claims).unwrap();

        let error = service
            .authenticate(Some(&format!("Bearer {}", token)))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            AccessError::Rejected(AuthenticationError::InvalidToken)
        ));
        assert_eq!(error.to_string(), "Invalid JWT");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_subject() {
        let mut users = MockTestUserRepository::new();
        users
            .expect_find_active_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = AccessService::new(
            Arc::new(users),
            Arc::new(MockTestTokenRepository::new()),
            authenticator(),
        );

        let now = Utc::now().timestamp();
        let handler = JwtHandler::new(SECRET.as_bytes());

        let deleted_user = Claims::new("token-1", now, now + 3600)
            .with_subject(TokenSubject::new(UserId::new(), vec![]));
        let token = handler.encode(&deleted_user).unwrap();
        let error = service
            .authenticate(Some(&format!("Bearer {}", token)))
            .await
            .unwrap_err();
        assert!(matches!(error, AccessError::UserNotFound));
        assert_eq!(error.to_string(), "Invalid Credentials");

        // Subject that is not a user identifier at all
        let foreign_subject = Claims::new("token-2", now, now + 3600)
            .with_subject(TokenSubject::new("not-a-uuid", vec![]));
        let token = handler.encode(&foreign_subject).unwrap();
        let error = service
            .authenticate(Some(&format!("Bearer {}", token)))
            .await
            .unwrap_err();
        assert!(matches!(error, AccessError::UserNotFound));
    }
}
