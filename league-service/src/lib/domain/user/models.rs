use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::RoleError;
use crate::domain::user::errors::UserIdError;
use crate::domain::user::errors::UsernameError;

/// Role granted to every user created without explicit roles.
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// API user account.
///
/// Only active users can log in or be resolved from a token.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures username is 3-100 characters and contains only alphanumeric, underscore, and hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 100;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `TooShort` - Username shorter than 3 characters
    /// * `TooLong` - Username longer than 100 characters
    /// * `InvalidCharacters` - Contains non-alphanumeric characters (except _ and -)
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if length < Self::MIN_LENGTH {
            Err(UsernameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(username)
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Security role granted to a user, e.g. `ROLE_ADMIN`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    const PREFIX: &'static str = "ROLE_";

    /// Validate a role name.
    ///
    /// # Errors
    /// * `InvalidFormat` - Missing `ROLE_` prefix, empty suffix, or other characters
    pub fn new(role: String) -> Result<Self, RoleError> {
        let valid = role
            .strip_prefix(Self::PREFIX)
            .is_some_and(|name| {
                !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            });

        if valid {
            Ok(Self(role))
        } else {
            Err(RoleError::InvalidFormat(role))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self(DEFAULT_ROLE.to_string())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new user with domain types
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub roles: Vec<Role>,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// An empty role list falls back to [`DEFAULT_ROLE`].
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    /// * `roles` - Granted roles, in order
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        roles: Vec<Role>,
    ) -> Self {
        let roles = if roles.is_empty() {
            vec![Role::default()]
        } else {
            roles
        };

        Self {
            username,
            email,
            password,
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(Username::new("admin".to_string()).is_ok());
        assert!(Username::new("league_admin-2".to_string()).is_ok());
        assert_eq!(
            Username::new("ab".to_string()),
            Err(UsernameError::TooShort { min: 3, actual: 2 })
        );
        assert_eq!(
            Username::new("a".repeat(101)),
            Err(UsernameError::TooLong {
                max: 100,
                actual: 101
            })
        );
        assert_eq!(
            Username::new("admin user".to_string()),
            Err(UsernameError::InvalidCharacters)
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("admin@example.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_create_user_command_default_role() {
        let command = CreateUserCommand::new(
            Username::new("admin".to_string()).unwrap(),
            EmailAddress::new("admin@example.com".to_string()).unwrap(),
            "secret".to_string(),
            vec![],
        );
        assert_eq!(command.roles, vec![Role::default()]);
        assert_eq!(command.roles[0].as_str(), DEFAULT_ROLE);

        let command = CreateUserCommand::new(
            Username::new("admin".to_string()).unwrap(),
            EmailAddress::new("admin@example.com".to_string()).unwrap(),
            "secret".to_string(),
            vec![Role::new("ROLE_ADMIN".to_string()).unwrap()],
        );
        assert_eq!(command.roles[0].as_str(), "ROLE_ADMIN");
    }

    #[test]
    fn test_role_validation() {
        assert!(Role::new("ROLE_ADMIN".to_string()).is_ok());
        assert!(Role::new("ROLE_LEAGUE_EDITOR_2".to_string()).is_ok());

        for invalid in ["ADMIN", "ROLE_", "role_admin", "ROLE_admin", "ROLE-ADMIN"] {
            assert_eq!(
                Role::new(invalid.to_string()),
                Err(RoleError::InvalidFormat(invalid.to_string())),
                "{invalid} should be rejected"
            );
        }
    }
}
