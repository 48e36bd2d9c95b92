//! Admin credential verification.

use argon2::{Argon2, PasswordHash, PasswordVerifier};

/// Verifier for the single administrator secret.
///
/// Holds the argon2 hash of the admin secret; the plaintext never leaves
/// the request that carries it.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    /// The argon2 hash of the admin secret.
    pub secret_hash: String,
}

impl AdminAuth {
    /// Create a new verifier from an argon2 hash string.
    pub fn new(secret_hash: String) -> Self {
        Self { secret_hash }
    }

    /// Verify a plaintext secret against the stored hash.
    ///
    /// Returns `false` for a malformed hash as well as for a mismatch.
    pub fn verify_secret(&self, plaintext: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.secret_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{
        Argon2, PasswordHasher,
        password_hash::{SaltString, rand_core::OsRng},
    };

    #[test]
    fn test_verify_secret() {
        let secret = "door-list";
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .unwrap()
            .to_string();

        let auth = AdminAuth::new(hash);

        assert!(auth.verify_secret("door-list"));
        assert!(!auth.verify_secret("stage-door"));
    }

    #[test]
    fn test_malformed_hash_rejects() {
        let auth = AdminAuth::new("not-an-argon2-hash".to_string());
        assert!(!auth.verify_secret("anything"));
    }
}
