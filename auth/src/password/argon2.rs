use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Length in bytes of generated passwords before hex encoding.
pub const GENERATED_PASSWORD_BYTES: usize = 16;

/// Argon2id password hashing and verification.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Generate a random password from the operating system CSPRNG.
    ///
    /// # Returns
    /// Hex string of `2 * GENERATED_PASSWORD_BYTES` characters
    pub fn generate_password() -> String {
        let mut bytes = [0u8; GENERATED_PASSWORD_BYTES];
        OsRng.fill_bytes(&mut bytes);

        bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
