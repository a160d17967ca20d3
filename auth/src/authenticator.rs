use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::bearer;
use crate::bearer::BearerError;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::JwtSettings;
use crate::jwt::TokenSubject;
use crate::jwt::TokenTtl;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT handling.
///
/// Built once from [`JwtSettings`] and shared for the lifetime of the process.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: TokenTtl,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
///
/// Display strings are the messages reported to API clients.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Missing Authorization Header")]
    MissingHeader,

    #[error("Malformed Authorization Header")]
    MalformedHeader,

    #[error("Expired JWT")]
    ExpiredToken,

    #[error("Malformed JWT")]
    MalformedToken,

    #[error("Invalid JWT")]
    InvalidToken,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(JwtError),
}

impl From<BearerError> for AuthenticationError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::MissingHeader => AuthenticationError::MissingHeader,
            BearerError::MalformedHeader => AuthenticationError::MalformedHeader,
        }
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Configured algorithm is not an HMAC algorithm
    pub fn new(settings: &JwtSettings) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::from_settings(settings)?,
            token_ttl: settings.ttl,
        })
    }

    /// Lifetime given to newly issued tokens.
    pub fn token_ttl(&self) -> TokenTtl {
        self.token_ttl
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash without issuing a token.
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self
            .jwt_handler
            .encode(claims)
            .map_err(AuthenticationError::JwtError)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate and decode JWT token.
    pub fn validate_token<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        self.jwt_handler.decode(token)
    }

    /// Verify the credentials carried by an `Authorization` header.
    ///
    /// Runs extraction, signature and expiry checks, then requires a subject
    /// in the payload. Resolving the subject to a live user is left to the
    /// caller.
    ///
    /// # Errors
    /// * `MissingHeader` / `MalformedHeader` - Header absent or not `Bearer <token>`
    /// * `ExpiredToken` - Signature valid but token expired
    /// * `MalformedToken` - Any other decoding failure
    /// * `InvalidToken` - Payload has no `user` field
    pub fn verify_bearer(
        &self,
        authorization: Option<&str>,
    ) -> Result<TokenSubject, AuthenticationError> {
        let token = bearer::extract(authorization)?;

        let claims: Claims = self.jwt_handler.decode(token).map_err(|e| match e {
            JwtError::TokenExpired => AuthenticationError::ExpiredToken,
            _ => AuthenticationError::MalformedToken,
        })?;

        claims.user.ok_or(AuthenticationError::InvalidToken)
    }
}
