use async_trait::async_trait;

use crate::domain::access::errors::AccessError;
use crate::domain::access::errors::LoginError;
use crate::domain::access::models::IssuedToken;
use crate::domain::access::models::LoginCommand;
use crate::domain::user::models::User;

/// Port for login and per-request authentication.
#[async_trait]
pub trait AccessServicePort: Send + Sync + 'static {
    /// Exchange a username and password for a signed token.
    ///
    /// # Arguments
    /// * `command` - Presented credentials
    ///
    /// # Returns
    /// Signed token, already recorded in the token store
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown or inactive user, or wrong password
    /// * `TokenIssuance` - Signing failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, LoginError>;

    /// Resolve the caller of a protected request.
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if any
    ///
    /// # Returns
    /// Active user named by the token subject
    ///
    /// # Errors
    /// * `AuthenticationRequired` - No header at all
    /// * `Rejected` - Header or token failed verification
    /// * `UserNotFound` - Subject is not an active user
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, authorization: Option<&str>) -> Result<User, AccessError>;
}
