use chrono::DateTime;
use chrono::Utc;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::ttl::TokenTtl;

/// Signed token payload.
///
/// Wire format is `{"id", "crt", "exp", "user": {"id", "roles"}}`; field
/// names are fixed so previously issued tokens keep validating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Unique token identifier
    pub id: String,

    /// Issued at (Unix timestamp)
    pub crt: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Authenticated subject
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "identified_subject"
    )]
    pub user: Option<TokenSubject>,
}

/// `user` value as found on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireSubject {
    Identified(TokenSubject),
    Unidentified(IgnoredAny),
}

/// A `user` without a string `id` (or with unreadable roles) carries no subject.
fn identified_subject<'de, D>(deserializer: D) -> Result<Option<TokenSubject>, D::Error>
where
    D: Deserializer<'de>,
{
    match WireSubject::deserialize(deserializer)? {
        WireSubject::Identified(subject) => Ok(Some(subject)),
        WireSubject::Unidentified(_) => Ok(None),
    }
}

/// Identity carried inside a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSubject {
    /// Stable user identifier
    pub id: String,

    /// Roles granted to the user, in stored order
    #[serde(default)]
    pub roles: Vec<String>,
}

impl TokenSubject {
    pub fn new(id: impl ToString, roles: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            roles,
        }
    }
}

impl Claims {
    /// Create claims without a subject.
    pub fn new(id: impl ToString, issued_at: i64, expires_at: i64) -> Self {
        Self {
            id: id.to_string(),
            crt: issued_at,
            exp: expires_at,
            user: None,
        }
    }

    /// Create claims for a user login.
    ///
    /// # Arguments
    /// * `token_id` - Fresh unique token identifier
    /// * `subject` - User identity to embed
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with `exp - crt == ttl` in seconds
    pub fn for_user(
        token_id: impl ToString,
        subject: TokenSubject,
        issued_at: DateTime<Utc>,
        ttl: TokenTtl,
    ) -> Self {
        let expires_at = issued_at + ttl.as_duration();

        Self::new(token_id, issued_at.timestamp(), expires_at.timestamp()).with_subject(subject)
    }

    /// Set subject.
    pub fn with_subject(mut self, subject: TokenSubject) -> Self {
        self.user = Some(subject);
        self
    }

    pub fn subject(&self) -> Option<&TokenSubject> {
        self.user.as_ref()
    }

    /// Seconds between issuance and expiry.
    pub fn lifetime(&self) -> i64 {
        self.exp - self.crt
    }
}
