//! Check command - Runs the password policy without hashing.

use std::io::{BufRead, Write};

use common::AppResult;

use super::read_secret;
use crate::service::CredentialService;

/// Execute the check command
pub async fn execute<R: BufRead, W: Write>(
    service: &dyn CredentialService,
    input: R,
    mut output: W,
) -> AppResult<()> {
    let plaintext = read_secret(input)?;
    service.check(plaintext).await?;

    writeln!(output, "ok")?;
    Ok(())
}
