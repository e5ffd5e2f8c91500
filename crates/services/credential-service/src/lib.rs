//! Credential Service Library
//!
//! Async wrapper around the `Password` value object. Hashing and verification
//! are CPU-bound, so they run on tokio's blocking pool, sized from
//! [`common::HasherConfig`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod service;

use common::{AppError, AppResult, HasherConfig};
use tokio::runtime::{Builder, Runtime};

pub use service::{CredentialService, Credentials};

/// Build the multi-threaded runtime with a bounded blocking pool.
pub fn build_runtime(config: &HasherConfig) -> AppResult<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(config.max_blocking_threads)
        .thread_name("credential-worker")
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build runtime: {}", e)))
}
