//! End-to-end subtitle retrieval: list, select, download, parse.

use super::{select_best_track, timed_text, Diagnostics, SubtitleProvider, TimedTextSegment};
use crate::error::{Result, TubeTalkError};
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

/// Download the best English track of a video and parse it.
///
/// The track is written to a scratch directory under `work_root` that is
/// removed before returning.
#[instrument(skip(provider, work_root))]
pub async fn fetch_segments(
    provider: &dyn SubtitleProvider,
    video_url: &str,
    work_root: &Path,
) -> Result<Vec<TimedTextSegment>> {
    if video_url.trim().is_empty() {
        return Err(TubeTalkError::InvalidInput("video URL is empty".into()));
    }

    let mut diagnostics = Diagnostics::new();
    let catalogue = match provider.list_tracks(video_url, &mut diagnostics).await {
        Ok(catalogue) => catalogue,
        Err(e) => {
            log_diagnostics(&diagnostics);
            return Err(e);
        }
    };

    let Some(track) = select_best_track(&catalogue) else {
        error!("Error finding subtitles for {}", video_url);
        log_diagnostics(&diagnostics);
        let reason = if catalogue.is_empty() {
            "no subtitles or captions"
        } else {
            "no English subtitles or captions"
        };
        return Err(TubeTalkError::SubtitleUnavailable(format!(
            "{} for {}",
            reason, video_url
        )));
    };
    info!("Selected {} track {}", track.kind, track.language_code);

    std::fs::create_dir_all(work_root)?;
    let workdir = tempfile::Builder::new().prefix("subs-").tempdir_in(work_root)?;

    let mut diagnostics = Diagnostics::new();
    let path = match provider
        .download_track(video_url, &track, workdir.path(), &mut diagnostics)
        .await
    {
        Ok(path) => path,
        Err(e) => {
            error!("Error downloading subtitles for {}", video_url);
            log_diagnostics(&diagnostics);
            return Err(e);
        }
    };

    let segments = timed_text::parse_file(&path)?;
    info!("Parsed {} subtitle segments", segments.len());
    Ok(segments)
}

fn log_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        return;
    }
    for line in diagnostics.debug_lines() {
        debug!("{}", line);
    }
    for line in diagnostics.warnings() {
        warn!("{}", line);
    }
    if !diagnostics.errors().is_empty() {
        error!("{}", diagnostics.error_summary());
    }
}
