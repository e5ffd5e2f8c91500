//! bcrypt password hashing and verification.

use bcrypt::BcryptError;

use crate::constants::BCRYPT_COST;
use crate::error::{DomainResult, PasswordError, PasswordErrorKind};

/// Hashes `plaintext` with bcrypt at [`BCRYPT_COST`] and a fresh random salt.
///
/// The returned string is self-describing (`$2b$12$<salt><digest>`), so two
/// calls with the same plaintext never return the same value. Plaintext longer
/// than bcrypt's 72-byte input limit is rejected with `HashingFailure` rather
/// than silently truncated.
pub fn hash(plaintext: &str) -> DomainResult<String> {
    bcrypt::non_truncating_hash(plaintext, BCRYPT_COST).map_err(|e| {
        tracing::warn!(error = %e, "password hashing failed");
        PasswordError::with_source(PasswordErrorKind::HashingFailure, e)
    })
}

/// Compares `attempt` against a stored bcrypt hash.
///
/// Returns `Ok(true)` if the attempt matches, `Ok(false)` if not, and a
/// `CorruptCredential` error if `hashed` is not a valid bcrypt string.
pub fn compare(hashed: &str, attempt: &str) -> DomainResult<bool> {
    match bcrypt::non_truncating_verify(attempt, hashed) {
        Ok(matched) => Ok(matched),
        // Nothing over the input limit can have produced a stored hash
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => {
            tracing::warn!(error = %e, "stored password hash could not be parsed");
            Err(PasswordError::with_source(
                PasswordErrorKind::CorruptCredential,
                e,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_compare() {
        let hashed = hash("MySecure123!@").unwrap();

        assert!(hashed.starts_with("$2b$12$"));
        assert!(compare(&hashed, "MySecure123!@").unwrap());
        assert!(!compare(&hashed, "WrongPassword123!").unwrap());
    }

    #[test]
    fn test_same_plaintext_different_salts() {
        let h1 = hash("MySecure123!@").unwrap();
        let h2 = hash("MySecure123!@").unwrap();

        assert_ne!(h1, h2);
    }

    #[test]
    fn test_malformed_hash_is_distinct_from_mismatch() {
        let err = compare("not-a-bcrypt-hash", "MySecure123!@").unwrap_err();

        assert_eq!(err.kind(), PasswordErrorKind::CorruptCredential);
    }

    #[test]
    fn test_input_over_primitive_limit_fails_hashing() {
        // 52 code points, 78 bytes
        let plaintext = "Ää1!".repeat(13);
        let err = hash(&plaintext).unwrap_err();

        assert_eq!(err.kind(), PasswordErrorKind::HashingFailure);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_overlong_attempt_never_matches() {
        let hashed = hash("MySecure123!@").unwrap();
        let attempt = format!("MySecure123!@{}", "x".repeat(80));

        assert!(!compare(&hashed, &attempt).unwrap());
    }
}
