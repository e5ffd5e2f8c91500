//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration structures
//! - Tracing initialisation

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult};
pub use logging::init_tracing;
