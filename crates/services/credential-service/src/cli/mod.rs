//! CLI module - Command-line interface for the credential service.
//!
//! Provides commands for:
//! - `check` - Run the password policy without hashing
//! - `hash` - Validate and hash a password, print its persisted form
//! - `verify` - Verify a password against a stored hash

pub mod args;

pub use args::{Cli, Commands, VerifyArgs};
