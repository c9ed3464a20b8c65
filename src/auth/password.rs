use crate::error::AppError;
use bcrypt::{hash, verify};

/// Lowest work factor bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest work factor bcrypt accepts.
pub const MAX_BCRYPT_COST: u32 = 31;
/// bcrypt only reads the first 72 bytes of its input; longer secrets are refused.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes `password` with a fresh salt at the given bcrypt cost.
///
/// Passwords longer than [`MAX_PASSWORD_BYTES`] are rejected with `InvalidInput`,
/// otherwise two secrets sharing their first 72 bytes would hash identically.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::InvalidInput(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }
    hash(password, cost)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Checks `password` against a stored bcrypt hash. The digest comparison is constant-time.
///
/// A password over [`MAX_PASSWORD_BYTES`] can never have been stored, so it never matches.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Ok(false);
    }
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing_and_verification() {
        let password = "pw1";
        let hashed = hash_password(password, MIN_BCRYPT_COST).unwrap();

        assert_ne!(hashed, password);
        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("pw2", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = hash_password("pw1", MIN_BCRYPT_COST).unwrap();
        let second = hash_password("pw1", MIN_BCRYPT_COST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_long_passwords_are_not_truncated() {
        let at_limit = "a".repeat(MAX_PASSWORD_BYTES);
        let hashed = hash_password(&at_limit, MIN_BCRYPT_COST).unwrap();
        assert!(verify_password(&at_limit, &hashed).unwrap());

        // Same first 72 bytes, one extra byte: must not match.
        let longer = format!("{}Y", at_limit);
        assert!(!verify_password(&longer, &hashed).unwrap());

        assert!(matches!(
            hash_password(&format!("{}X", at_limit), MIN_BCRYPT_COST),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_verify_with_invalid_hash() {
        match verify_password("pw1", "invalidhashformat") {
            Err(AppError::InternalServerError(msg)) => {
                assert!(msg.contains("Failed to verify password"));
            }
            Ok(false) => {}
            Ok(true) => panic!("Password verification should fail for invalid hash format"),
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }
}
