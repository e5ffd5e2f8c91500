//! CLI argument definitions.
//!
//! Plaintext is always read from stdin, never from arguments, so it stays out
//! of shell history and process listings.

use clap::{Parser, Subcommand};

/// Credential service - validate, hash and verify passwords
#[derive(Parser, Debug)]
#[command(name = "credential-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a password from stdin against the policy
    Check,

    /// Hash a password from stdin and print `{"hashedValue": ...}`
    Hash,

    /// Verify a password from stdin against a stored hash
    Verify(VerifyArgs),
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Stored bcrypt hash, or its JSON persisted form
    #[arg(long, env = "CREDENTIAL_HASH")]
    pub hash: String,
}
