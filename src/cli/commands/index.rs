//! Index command implementation.

use super::with_min_section_length;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{CredentialOverrides, Settings};
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the index command.
pub async fn run_index(
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

    let spinner = Output::spinner("Fetching and indexing subtitles...");
    let result = orchestrator.index_video(video_url).await;
    spinner.finish_and_clear();

    match result {
        Ok(result) => {
            Output::success(&format!(
                "Indexed {} sections as {}",
                result.sections_indexed, result.document_id
            ));
            Ok(())
        }
        Err(e) => {
            Output::error(&format!("Failed to index {}: {}", video_url, e));
            Err(e.into())
        }
    }
}
