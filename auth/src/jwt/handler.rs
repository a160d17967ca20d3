use std::str::FromStr;

use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;
use super::settings::JwtSettings;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. The secret and the signing algorithm are
/// fixed at construction; tokens announcing any other algorithm are rejected.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler signing with HS256.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Create a JWT handler for an explicit HMAC algorithm.
    ///
    /// # Arguments
    /// * `secret` - Shared secret
    /// * `algorithm` - Algorithm identifier (`HS256`, `HS384` or `HS512`)
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Identifier is unknown or not a symmetric algorithm
    pub fn with_algorithm(secret: &[u8], algorithm: &str) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(algorithm)
            .map_err(|_| JwtError::UnsupportedAlgorithm(algorithm.to_string()))?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(Self {
                algorithm,
                ..Self::new(secret)
            }),
            other => Err(JwtError::UnsupportedAlgorithm(format!("{:?}", other))),
        }
    }

    /// Create a JWT handler from signing settings.
    pub fn from_settings(settings: &JwtSettings) -> Result<Self, JwtError> {
        Self::with_algorithm(settings.secret.as_bytes(), &settings.algorithm)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// The signature is checked first, then expiry with no leeway: a token is
    /// expired once the current time is past its `exp` claim.
    ///
    /// # Errors
    /// * `TokenExpired` - Signature is valid but `exp` has passed
    /// * `MalformedToken` - Any other failure (structure, signature, algorithm, payload shape)
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<T>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::MalformedToken(e.to_string()),
            })
    }
}
