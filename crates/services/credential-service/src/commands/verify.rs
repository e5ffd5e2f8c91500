//! Verify command - Checks a password against a stored hash.

use std::io::{BufRead, Write};

use common::AppResult;
use domain::Password;

use super::read_secret;
use crate::cli::VerifyArgs;
use crate::service::CredentialService;

/// Execute the verify command
pub async fn execute<R: BufRead, W: Write>(
    args: VerifyArgs,
    service: &dyn CredentialService,
    input: R,
    mut output: W,
) -> AppResult<()> {
    let stored = parse_stored(&args.hash)?;
    let attempt = read_secret(input)?;
    service.verify(stored, attempt).await?;

    writeln!(output, "verified")?;
    Ok(())
}

/// Accept either the raw bcrypt string or its JSON persisted form.
fn parse_stored(raw: &str) -> AppResult<Password> {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') {
        Ok(Password::from_json(trimmed.as_bytes())?)
    } else {
        Ok(Password::from_hash(trimmed.to_string()))
    }
}
