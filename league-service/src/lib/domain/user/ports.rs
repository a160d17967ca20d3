use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Create new active user with a hashed password.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, password and roles
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `PasswordHashing` - Password could not be hashed
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve an active user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if missing or inactive)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_active_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve an active user by username.
    ///
    /// # Returns
    /// Optional user entity (None if missing or inactive)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_active_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserError>;
}
