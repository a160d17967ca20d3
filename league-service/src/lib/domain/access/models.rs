use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Username and password presented at login
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Token handed back by a successful login
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
}

/// Identity attached to a request once its bearer token is accepted
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub roles: Vec<String>,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.to_string(),
            roles: user.roles.clone(),
        }
    }
}
