//! Talk command: index a video, then answer questions about it.

use super::with_min_section_length;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{CredentialOverrides, Settings};
use crate::orchestrator::{Orchestrator, QUIT_COMMAND};
use anyhow::Result;
use std::io;

/// Run the talk command.
pub async fn run_talk(
    video_url: &str,
    min_section_length: Option<usize>,
    overrides: &CredentialOverrides,
    settings: Settings,
) -> Result<()> {
    let settings = with_min_section_length(settings, min_section_length);

    // Pre-flight checks
    let credentials = preflight::credentials(overrides, &settings)
        .and_then(|credentials| {
            preflight::check(Operation::FetchSubtitles, &settings).map(|_| credentials)
        })
        .inspect_err(|e| Output::error(&format!("{}", e)))?;

    let orchestrator = Orchestrator::new(&settings, credentials)?;

    Output::info(&format!("Fetching and indexing subtitles for {}", video_url));
    Output::info(&format!("Type a question, or '{}' to exit.", QUIT_COMMAND));

    let stdin = io::stdin();
    let stdout = io::stdout();
    orchestrator.talk(video_url, stdin.lock(), stdout.lock()).await?;

    Output::info("Goodbye!");
    Ok(())
}
