//! Unified application error handling.
//!
//! Wraps domain errors with stable client codes and user-facing messages
//! that never contain plaintext or hash material.

use domain::{PasswordError, PasswordErrorKind};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain
    #[error(transparent)]
    Password(#[from] PasswordError),

    // Configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // I/O (reading plaintext from stdin, writing output)
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    // Blocking hash task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Join(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Password(e) => match e.kind() {
                PasswordErrorKind::TooShort => "PASSWORD_TOO_SHORT",
                PasswordErrorKind::TooLong => "PASSWORD_TOO_LONG",
                PasswordErrorKind::InvalidChars => "PASSWORD_INVALID_CHARS",
                PasswordErrorKind::TooWeak => "PASSWORD_TOO_WEAK",
                PasswordErrorKind::Common => "PASSWORD_COMMON",
                PasswordErrorKind::HashingFailure => "PASSWORD_HASHING_FAILED",
                PasswordErrorKind::VerifyFailed => "PASSWORD_VERIFY_FAILED",
                PasswordErrorKind::CorruptCredential => "PASSWORD_CORRUPT_CREDENTIAL",
                PasswordErrorKind::MalformedPersistedForm => "PASSWORD_MALFORMED",
            },
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Join(_) => "TASK_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Policy violations are caused by the input, everything else is not.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::Password(e) => {
                e.kind().is_policy_violation()
                    || matches!(
                        e.kind(),
                        PasswordErrorKind::VerifyFailed | PasswordErrorKind::MalformedPersistedForm
                    )
            }
            AppError::Config(_) => true,
            _ => false,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Domain messages are fixed per kind and safe to show
            AppError::Password(e) if e.kind() != PasswordErrorKind::HashingFailure => e.to_string(),
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),

            // Hide details for internal errors
            AppError::Password(e) => {
                tracing::error!("Hashing error: {:?}", e);
                "An internal error occurred while hashing the password".to_string()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An I/O error occurred".to_string()
            }
            AppError::Join(msg) => {
                tracing::error!("Background task error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Domain error kind, if this wraps one.
    pub fn password_kind(&self) -> Option<PasswordErrorKind> {
        match self {
            AppError::Password(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn join(msg: impl Into<String>) -> Self {
        AppError::Join(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
