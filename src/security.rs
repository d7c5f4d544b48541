use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// Returns the PHC-format hash string stored in the users table. Length
/// validation happens at the route layer before this is called.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::PasswordHash)?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored hash
///
/// Used by the session layer when signing a user in; registration only hashes.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::error!("Stored password hash has invalid format");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(!verify_password("wrong horse battery", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("password123").unwrap();
        let b = hash_password("password123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_rejected() {
        assert!(!verify_password("password123", "not-a-phc-string"));
    }
}
