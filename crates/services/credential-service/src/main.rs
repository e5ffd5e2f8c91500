//! Credential Service - validate, hash and verify passwords from the command line.

use std::io;

use clap::Parser;

use common::init_tracing;
use credential_service_lib::{
    build_runtime,
    cli::Cli,
    commands,
    config::CredentialServiceConfig,
    Credentials,
};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = match CredentialServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error[{}]: {}", e.code(), e.user_message());
            std::process::exit(1);
        }
    };

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(&config.log, cli.verbose);
    tracing::debug!(?config, "Configuration loaded");

    let result = build_runtime(&config.hasher).and_then(|runtime| {
        let service = Credentials::default();
        runtime.block_on(commands::execute(
            cli.command,
            &service,
            io::stdin().lock(),
            io::stdout().lock(),
        ))
    });

    // Handle errors
    if let Err(e) = result {
        if e.is_client_error() {
            tracing::warn!(code = e.code(), "Command rejected: {}", e);
        } else {
            tracing::error!(code = e.code(), "Command failed: {}", e);
        }
        eprintln!("error[{}]: {}", e.code(), e.user_message());
        std::process::exit(1);
    }
}
