//! Domain-level errors.
//!
//! Every failure of the password value object is a normal, expected outcome of
//! user input. Errors carry a [`PasswordErrorKind`] that callers match on and an
//! optional cause for diagnostics. Messages are fixed per kind and never echo
//! the rejected plaintext.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// What went wrong, independent of any underlying cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordErrorKind {
    /// Fewer code points than the policy floor
    TooShort,
    /// More code points than the policy ceiling
    TooLong,
    /// Contains a control or otherwise non-printable code point
    InvalidChars,
    /// Missing an uppercase, lowercase, digit or special character
    TooWeak,
    /// Deny-listed, or a sequential/repeating run was detected
    Common,
    /// The hashing primitive could not produce a hash
    HashingFailure,
    /// The attempt did not verify against the stored hash
    VerifyFailed,
    /// The stored hash could not be parsed by the hashing primitive
    CorruptCredential,
    /// The persisted form was missing its hashed value
    MalformedPersistedForm,
}

impl PasswordErrorKind {
    /// True for the kinds produced by the policy pipeline.
    pub fn is_policy_violation(self) -> bool {
        matches!(
            self,
            Self::TooShort | Self::TooLong | Self::InvalidChars | Self::TooWeak | Self::Common
        )
    }

    fn message(self) -> String {
        match self {
            Self::TooShort => format!(
                "password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
            Self::TooLong => format!(
                "password cannot exceed {} characters",
                MAX_PASSWORD_LENGTH
            ),
            Self::InvalidChars => "password contains invalid characters".to_string(),
            Self::TooWeak => "password must contain at least one uppercase letter, \
                one lowercase letter, one number, and one special character"
                .to_string(),
            Self::Common => "password is too common or weak. Avoid common words \
                and sequential or repeating characters like \"1234\" or \"aaaa\""
                .to_string(),
            Self::HashingFailure => "failed to hash password".to_string(),
            Self::VerifyFailed => "failed to verify password".to_string(),
            Self::CorruptCredential => "stored password hash is malformed".to_string(),
            Self::MalformedPersistedForm => {
                "failed to build password: missing or empty hashedValue".to_string()
            }
        }
    }
}

impl fmt::Display for PasswordErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Error returned by every fallible password operation.
///
/// Equality compares kinds only, so `err == PasswordError::new(kind)` holds
/// regardless of the attached cause.
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct PasswordError {
    kind: PasswordErrorKind,
    #[source]
    source: Option<BoxError>,
}

impl PasswordError {
    /// Create an error with no underlying cause
    pub fn new(kind: PasswordErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create an error wrapping the cause that produced it
    pub fn with_source(kind: PasswordErrorKind, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    pub fn kind(&self) -> PasswordErrorKind {
        self.kind
    }

    pub fn is(&self, kind: PasswordErrorKind) -> bool {
        self.kind == kind
    }

    pub fn too_short() -> Self {
        Self::new(PasswordErrorKind::TooShort)
    }

    pub fn too_long() -> Self {
        Self::new(PasswordErrorKind::TooLong)
    }

    pub fn invalid_chars() -> Self {
        Self::new(PasswordErrorKind::InvalidChars)
    }

    pub fn too_weak() -> Self {
        Self::new(PasswordErrorKind::TooWeak)
    }

    pub fn common() -> Self {
        Self::new(PasswordErrorKind::Common)
    }

    pub fn verify_failed() -> Self {
        Self::new(PasswordErrorKind::VerifyFailed)
    }

    pub fn malformed_persisted_form() -> Self {
        Self::new(PasswordErrorKind::MalformedPersistedForm)
    }
}

impl From<PasswordErrorKind> for PasswordError {
    fn from(kind: PasswordErrorKind) -> Self {
        Self::new(kind)
    }
}

impl PartialEq for PasswordError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for PasswordError {}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, PasswordError>;
