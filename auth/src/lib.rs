//! Authentication utilities library
//!
//! Framework-free building blocks for token authentication:
//! - Password hashing (Argon2id) and random password generation
//! - JWT claims, signing and validation with a fixed HMAC algorithm
//! - Bearer credential extraction from `Authorization` header values
//! - Authentication coordination with a uniform failure taxonomy
//!
//! Services define their own persistence ports and adapt these pieces.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Issuing and verifying tokens
//! ```
//! use auth::{Authenticator, Claims, JwtSettings, TokenSubject};
//! use chrono::Utc;
//!
//! let settings = JwtSettings::new(
//!     "secret_key_at_least_32_bytes_long!",
//!     "HS256",
//!     "+1 hour".parse().unwrap(),
//! );
//! let auth = Authenticator::new(&settings).unwrap();
//!
//! // Registration: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and sign
//! let subject = TokenSubject::new("user-1", vec!["ROLE_USER".to_string()]);
//! let claims = Claims::for_user("token-1", subject, Utc::now(), auth.token_ttl());
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Request: verify the Authorization header
//! let header = format!("Bearer {}", result.access_token);
//! let verified = auth.verify_bearer(Some(&header)).unwrap();
//! assert_eq!(verified.id, "user-1");
//! ```

pub mod authenticator;
pub mod bearer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use bearer::BearerError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::JwtSettings;
pub use jwt::TokenSubject;
pub use jwt::TokenTtl;
pub use jwt::TtlError;
pub use password::PasswordError;
pub use password::PasswordHasher;
