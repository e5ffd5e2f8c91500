//! Password value object - Domain layer password handling.
//!
//! DDD: Encapsulates policy validation and bcrypt hashing as a value object.
//! The plaintext only lives for the duration of the constructing call; the
//! bcrypt hash is the sole state a [`Password`] carries.

pub mod hasher;
pub mod patterns;
pub mod policy;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::REDACTED;
use crate::error::{DomainResult, PasswordError, PasswordErrorKind};

pub use patterns::{has_repeating_run, has_sequential_run};
pub use policy::{validate_password, DenyList, PasswordPolicy};

/// Password value object holding a policy-validated bcrypt hash.
///
/// DDD: Value object - immutable, compared by hash string. Two passwords
/// built from the same plaintext are *not* equal, their salts differ.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "PasswordRecord")]
pub struct Password {
    #[serde(rename = "hashedValue")]
    hash: String,
}

/// Persisted form as read back from storage, before the emptiness check.
#[derive(Deserialize)]
struct PasswordRecord {
    #[serde(rename = "hashedValue", default)]
    hashed_value: Option<String>,
}

impl TryFrom<PasswordRecord> for Password {
    type Error = PasswordError;

    fn try_from(record: PasswordRecord) -> Result<Self, Self::Error> {
        match record.hashed_value {
            Some(hash) if !hash.is_empty() => Ok(Self::from_hash(hash)),
            _ => Err(PasswordError::malformed_persisted_form()),
        }
    }
}

impl Password {
    /// Create a new password by validating and hashing the plain text.
    ///
    /// # Errors
    /// Returns the first policy rule that failed, or `HashingFailure` if bcrypt
    /// could not produce a hash.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        Self::with_policy(plain_text, PasswordPolicy::shared())
    }

    /// Same as [`Password::new`] with a caller-supplied policy.
    pub fn with_policy(plain_text: &str, policy: &PasswordPolicy) -> DomainResult<Self> {
        policy.validate(plain_text)?;
        let hash = hasher::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from storage).
    ///
    /// No validation or hashing takes place. A value that did not come from
    /// [`Password::new`] will fail every [`Password::verify`] call.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Rebuild a password from its JSON persistence form.
    pub fn from_json(data: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(data)
            .map_err(|e| PasswordError::with_source(PasswordErrorKind::MalformedPersistedForm, e))
    }

    /// Render the JSON persistence form, `{"hashedValue": "..."}`.
    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PasswordError::with_source(PasswordErrorKind::MalformedPersistedForm, e))
    }

    /// Get the hash string for storage.
    pub fn hashed_value(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text attempt against this hash.
    ///
    /// Wrong attempts, empty attempts and malformed stored hashes all return
    /// `VerifyFailed`. Use [`Password::check`] to tell the last case apart.
    pub fn verify(&self, attempt: &str) -> DomainResult<()> {
        match self.check(attempt) {
            Ok(true) => Ok(()),
            Ok(false) => Err(PasswordError::verify_failed()),
            Err(e) => Err(PasswordError::with_source(PasswordErrorKind::VerifyFailed, e)),
        }
    }

    /// Compare a plain text attempt against this hash.
    ///
    /// Returns `Ok(false)` on mismatch and `CorruptCredential` when the stored
    /// hash cannot be parsed.
    pub fn check(&self, attempt: &str) -> DomainResult<bool> {
        if attempt.is_empty() {
            return Ok(false);
        }
        hasher::compare(&self.hash, attempt)
    }

    /// Fixed placeholder for logs; never derived from the hash.
    pub fn redacted(&self) -> &'static str {
        REDACTED
    }
}

// Don't expose hash in display or debug output (security)
impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("hash", &REDACTED)
            .finish()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "MySecure123!@";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain).is_ok());
        assert_eq!(
            password.verify("WrongPassword123!").unwrap_err().kind(),
            PasswordErrorKind::VerifyFailed
        );
    }

    #[test]
    fn test_empty_attempt_fails_verification() {
        let password = Password::new("MySecure123!@").unwrap();

        assert_eq!(
            password.verify("").unwrap_err().kind(),
            PasswordErrorKind::VerifyFailed
        );
        assert!(!password.check("").unwrap());
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "MySecure123!@";
        let password = Password::new(plain).unwrap();
        let restored = Password::from_hash(password.hashed_value().to_string());

        assert_eq!(restored, password);
        assert!(restored.verify(plain).is_ok());
    }

    #[test]
    fn test_corrupt_hash_collapses_at_verify() {
        let password = Password::from_hash("$2b$12$garbage".to_string());

        let err = password.verify("MySecure123!@").unwrap_err();
        assert_eq!(err.kind(), PasswordErrorKind::VerifyFailed);
        assert_eq!(
            password.check("MySecure123!@").unwrap_err().kind(),
            PasswordErrorKind::CorruptCredential
        );
    }

    #[test]
    fn test_debug_and_display_are_redacted() {
        let password = Password::new("MySecure123!@").unwrap();

        assert_eq!(password.to_string(), "[PROTECTED]");
        assert_eq!(password.redacted(), "[PROTECTED]");
        let debug = format!("{:?}", password);
        assert!(!debug.contains(password.hashed_value()));
        assert!(debug.contains("[PROTECTED]"));
    }

    #[test]
    fn test_persisted_form_requires_hashed_value() {
        let cases: [&[u8]; 4] = [
            br#"{"invalid": "json"}"#,
            br#"{"hashedValue": ""}"#,
            br#"{"hashedValue": null}"#,
            b"not json",
        ];
        for data in cases {
            assert_eq!(
                Password::from_json(data).unwrap_err().kind(),
                PasswordErrorKind::MalformedPersistedForm
            );
        }
    }

    #[test]
    fn test_to_json_matches_serde_form() {
        let password = Password::from_hash("$2b$12$stored".to_string());

        let json = password.to_json().unwrap();
        assert_eq!(json, r#"{"hashedValue":"$2b$12$stored"}"#);
        assert_eq!(json, serde_json::to_string(&password).unwrap());
        assert_eq!(Password::from_json(json.as_bytes()).unwrap(), password);
    }

    #[test]
    fn test_persisted_form_skips_policy() {
        // Reconstitution trusts stored data, even if it could never pass policy
        let password = Password::from_json(br#"{"hashedValue": "short"}"#).unwrap();
        assert_eq!(password.hashed_value(), "short");
    }
}
