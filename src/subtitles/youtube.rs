//! yt-dlp backed subtitle provider.

use super::{CaptionCatalogue, CaptionKind, CaptionTrack, Diagnostics, SubtitleProvider};
use crate::error::{Result, TubeTalkError};
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Subtitle provider that shells out to yt-dlp.
pub struct YtDlpProvider {
    binary: String,
    video_id_regex: Regex,
}

impl YtDlpProvider {
    pub fn new() -> Self {
        Self::with_binary("yt-dlp")
    }

    /// Use a specific yt-dlp executable.
    pub fn with_binary(binary: &str) -> Self {
        // Matches various YouTube URL formats and bare video IDs
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                (?:https?://)?
                (?:www\.|m\.)?
                (?:youtube\.com/watch\?(?:.*&)?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/shorts/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Self {
            binary: binary.to_string(),
            video_id_regex,
        }
    }

    /// Extract the video ID from a YouTube URL or bare ID.
    pub fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    async fn run(&self, args: &[&str]) -> Result<Output> {
        debug!("Running {} {}", self.binary, args.join(" "));

        Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TubeTalkError::ToolNotFound(self.binary.clone())
                } else {
                    TubeTalkError::ToolFailed(format!("Failed to run {}: {}", self.binary, e))
                }
            })
    }
}

impl Default for YtDlpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubtitleProvider for YtDlpProvider {
    #[instrument(skip(self, diagnostics))]
    async fn list_tracks(
        &self,
        video_url: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<CaptionCatalogue> {
        let output = self
            .run(&["--dump-json", "--skip-download", "--no-playlist", video_url])
            .await?;
        diagnostics.absorb(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(TubeTalkError::SubtitleUnavailable(format!(
                "yt-dlp could not read {}",
                video_url
            )));
        }

        let info: serde_json::Value = serde_json::from_slice(&output.stdout).map_err(|e| {
            TubeTalkError::SubtitleUnavailable(format!("Failed to parse yt-dlp output: {}", e))
        })?;

        let catalogue = catalogue_from_info(&info);
        info!("Found {} caption tracks", catalogue.track_count());
        Ok(catalogue)
    }

    #[instrument(
        skip(self, output_dir, diagnostics),
        fields(lang = %track.language_code, auto = track.is_auto())
    )]
    async fn download_track(
        &self,
        video_url: &str,
        track: &CaptionTrack,
        output_dir: &Path,
        diagnostics: &mut Diagnostics,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let stem = self
            .extract_video_id(video_url)
            .unwrap_or_else(|| "subtitles".to_string());
        let template = output_dir.join(format!("{}.%(ext)s", stem));
        let template = template.to_string_lossy().into_owned();

        let write_flag = if track.is_auto() { "--write-auto-subs" } else { "--write-subs" };

        let output = self
            .run(&[
                "--skip-download",
                "--no-playlist",
                write_flag,
                "--sub-langs",
                track.language_code.as_str(),
                "--sub-format",
                "vtt",
                "--output",
                template.as_str(),
                video_url,
            ])
            .await?;
        diagnostics.absorb(&String::from_utf8_lossy(&output.stdout));
        diagnostics.absorb(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(TubeTalkError::SubtitleUnavailable(format!(
                "yt-dlp failed to download {} subtitles",
                track.language_code
            )));
        }

        find_subtitle_file(output_dir, &stem)
    }
}

/// Build a catalogue from yt-dlp's info JSON.
///
/// Automatic captions come first, then subtitles, the order `--list-subs`
/// prints them in.
pub fn catalogue_from_info(info: &serde_json::Value) -> CaptionCatalogue {
    let mut catalogue = CaptionCatalogue::new();

    for (field, kind) in [
        ("automatic_captions", CaptionKind::Auto),
        ("subtitles", CaptionKind::Human),
    ] {
        let Some(tracks) = info[field].as_object().filter(|m| !m.is_empty()) else {
            continue;
        };

        catalogue.push_header(kind);
        for language_code in tracks.keys() {
            catalogue.push_track(language_code.as_str());
        }
    }

    catalogue
}

/// Locate the subtitle file yt-dlp wrote for `stem`.
fn find_subtitle_file(dir: &Path, stem: &str) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| TubeTalkError::SubtitleUnavailable(format!("Cannot read directory: {e}")))?;

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let is_subtitle = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("vtt") | Some("srt")
        );

        if is_subtitle && name.to_string_lossy().starts_with(stem) {
            return Ok(path);
        }
    }

    Err(TubeTalkError::SubtitleUnavailable(
        "Subtitle file not found after download".into(),
    ))
}
