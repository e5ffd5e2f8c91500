//! Credential service business logic.

mod credential_service;

pub use credential_service::{CredentialService, Credentials};

#[cfg(any(test, feature = "test-utils"))]
pub use credential_service::MockCredentialService;
