//! Commands module - CLI command implementations.
//!
//! Each command reads its plaintext from `input` and writes results to
//! `output`, so they run the same against stdin/stdout and in-memory buffers.

pub mod check;
pub mod hash;
pub mod verify;

use std::io::{BufRead, Write};

use common::AppResult;

use crate::cli::Commands;
use crate::service::CredentialService;

/// Execute a parsed command
pub async fn execute<R: BufRead, W: Write>(
    command: Commands,
    service: &dyn CredentialService,
    input: R,
    output: W,
) -> AppResult<()> {
    match command {
        Commands::Check => check::execute(service, input, output).await,
        Commands::Hash => hash::execute(service, input, output).await,
        Commands::Verify(args) => verify::execute(args, service, input, output).await,
    }
}

/// Read one line of plaintext, without its line terminator.
///
/// Only the terminator is stripped; surrounding spaces are part of the secret.
pub fn read_secret<R: BufRead>(mut input: R) -> AppResult<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
