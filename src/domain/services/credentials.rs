use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use rand::rngs::OsRng;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AppError::Internal)
}

/// Re-derives the hash from the submitted password and compares it against the
/// stored credential. A mismatch is `InvalidCredentials`; an unparsable stored
/// hash is `Internal`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<(), AppError> {
    let parsed_hash = PasswordHash::new(stored_hash).map_err(|_| AppError::Internal)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash).is_ok());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hash = hash_password("secret1").unwrap();
        assert!(matches!(
            verify_password("wrong", &hash),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn garbage_stored_hash_is_internal_error() {
        assert!(matches!(
            verify_password("secret1", "not-a-phc-string"),
            Err(AppError::Internal)
        ));
    }
}
