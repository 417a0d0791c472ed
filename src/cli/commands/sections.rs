//! Sections command: show how a video's subtitles would be indexed.

use super::with_min_section_length;
use crate::chunking::SectionMerger;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::subtitles::{fetch_segments, YtDlpProvider};
use crate::vectara::DocumentPart;
use anyhow::Result;

/// Run the sections command.
pub async fn run_sections(
    video_url: &str,
    min_section_length: Option<usize>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let settings = with_min_section_length(settings, min_section_length);

    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::FetchSubtitles, &settings) {
        Output::error(&format!("{}", e));
        return Err(e.into());
    }

    let provider = YtDlpProvider::with_binary(&settings.subtitles.ytdlp_path);
    let merger = SectionMerger::new(settings.subtitles.min_section_length);

    let spinner = Output::spinner("Fetching subtitles...");
    let result = fetch_segments(&provider, video_url, &settings.temp_dir()).await;
    spinner.finish_and_clear();

    let segments = result.inspect_err(|e| Output::error(&format!("{}", e)))?;
    let segment_count = segments.len();
    let sections = merger.merge(segments);

    if sections.is_empty() {
        Output::warning(&format!("No subtitle cues found for {}", video_url));
    }

    if json {
        // Same text and metadata that would be sent for indexing.
        let parts = sections
            .iter()
            .map(DocumentPart::from_section)
            .collect::<crate::Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }

    Output::header(&format!(
        "{} segments merged into {} sections (min {} chars)",
        segment_count,
        sections.len(),
        merger.min_length()
    ));
    for (i, section) in sections.iter().enumerate() {
        Output::section(i, section);
    }

    Ok(())
}
