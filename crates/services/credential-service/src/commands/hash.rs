//! Hash command - Validates and hashes a password, prints its persisted form.

use std::io::{BufRead, Write};

use common::AppResult;

use super::read_secret;
use crate::service::CredentialService;

/// Execute the hash command
pub async fn execute<R: BufRead, W: Write>(
    service: &dyn CredentialService,
    input: R,
    mut output: W,
) -> AppResult<()> {
    let plaintext = read_secret(input)?;
    let password = service.register(plaintext).await?;

    writeln!(output, "{}", password.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockCredentialService;
    use domain::Password;

    #[tokio::test]
    async fn test_hash_prints_persisted_form() {
        let mut service = MockCredentialService::new();
        service
            .expect_register()
            .times(1)
            .returning(|_| Ok(Password::from_hash("$2b$12$stored".to_string())));

        let mut out = Vec::new();
        execute(&service, &b"MySecure123!@\n"[..], &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "{\"hashedValue\":\"$2b$12$stored\"}\n");
        assert!(!printed.contains("MySecure123!@"));
    }
}
