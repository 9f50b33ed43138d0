//! Password hashing for user credentials

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::domain::{DomainError, DomainResult};

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> DomainResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| DomainError::Database(format!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// A malformed stored hash counts as a failed match, so login responds
/// with the same "Invalid credentials" either way.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hashed = hash_password("s3cret-pass").unwrap();
        assert_ne!(hashed, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &hashed));
    }

    #[test]
    fn wrong_password_fails() {
        let hashed = hash_password("s3cret-pass").unwrap();
        assert!(!verify_password("other-pass", &hashed));
    }

    #[test]
    fn malformed_hash_fails_instead_of_erroring() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
