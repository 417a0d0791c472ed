//! Ask command implementation.

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{CredentialOverrides, Settings};
use crate::vectara::VectaraClient;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    overrides: &CredentialOverrides,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    let credentials = preflight::credentials(overrides, &settings)
        .and_then(|credentials| {
            preflight::check(Operation::Ask, &settings).map(|_| credentials)
        })
        .inspect_err(|e| Output::error(&format!("{}", e)))?;

    let client = VectaraClient::new(credentials, &settings.vectara)?;

    let spinner = Output::spinner("Searching corpus...");
    let result = client.ask(question).await;
    spinner.finish_and_clear();

    match result {
        Ok(answer) => {
            Output::answer(&answer);
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to get an answer: {}", e));
            Err(e.into())
        }
    }
}
