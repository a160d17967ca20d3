use std::fmt;

use serde::Deserialize;

use super::ttl::TokenTtl;

/// Immutable signing configuration shared by token issuance and validation.
#[derive(Clone, Deserialize)]
pub struct JwtSettings {
    /// Shared HMAC secret
    pub secret: String,

    /// Signing algorithm identifier (`HS256`, `HS384` or `HS512`)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Lifetime of issued tokens
    pub ttl: TokenTtl,
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

impl JwtSettings {
    pub fn new(secret: impl Into<String>, algorithm: impl Into<String>, ttl: TokenTtl) -> Self {
        Self {
            secret: secret.into(),
            algorithm: algorithm.into(),
            ttl,
        }
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}
