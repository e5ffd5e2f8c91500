//! Credential service - Registers and verifies passwords off the async executor.
//!
//! bcrypt at cost 12 takes hundreds of milliseconds of CPU, so every hash and
//! comparison runs on tokio's blocking pool. Plaintext is moved into the
//! blocking task and dropped there.

use std::sync::Arc;

use async_trait::async_trait;
use common::{AppError, AppResult};
use domain::{Password, PasswordPolicy};
use tokio::task;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Run the policy without hashing
    async fn check(&self, plaintext: String) -> AppResult<()>;

    /// Validate and hash a new password
    async fn register(&self, plaintext: String) -> AppResult<Password>;

    /// Verify an attempt against a stored password
    async fn verify(&self, password: Password, attempt: String) -> AppResult<()>;
}

/// Concrete implementation of CredentialService.
pub struct Credentials {
    policy: Arc<PasswordPolicy>,
}

impl Credentials {
    /// Create new credential service with the given policy
    pub fn new(policy: Arc<PasswordPolicy>) -> Self {
        let deny_list = policy.deny_list();
        if deny_list.is_empty() {
            tracing::warn!("password policy has an empty deny-list");
        } else {
            tracing::debug!(entries = deny_list.len(), "password policy loaded");
        }
        Self { policy }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(Arc::new(PasswordPolicy::default()))
    }
}

#[async_trait]
impl CredentialService for Credentials {
    async fn check(&self, plaintext: String) -> AppResult<()> {
        self.policy.validate(&plaintext)?;
        tracing::debug!("password satisfies policy");
        Ok(())
    }

    async fn register(&self, plaintext: String) -> AppResult<Password> {
        let policy = self.policy.clone();
        let password = task::spawn_blocking(move || Password::with_policy(&plaintext, &policy))
            .await
            .map_err(|e| AppError::join(e.to_string()))?
            .inspect_err(|e| tracing::debug!(kind = ?e.kind(), "password rejected"))?;

        tracing::info!(password = %password, "password registered");
        Ok(password)
    }

    async fn verify(&self, password: Password, attempt: String) -> AppResult<()> {
        task::spawn_blocking(move || password.verify(&attempt))
            .await
            .map_err(|e| AppError::join(e.to_string()))??;

        tracing::debug!("password verified");
        Ok(())
    }
}
