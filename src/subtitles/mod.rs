//! Subtitle acquisition for TubeTalk.
//!
//! Lists the caption tracks a video offers, picks the best English one,
//! downloads it and parses it into timed segments.

mod diagnostics;
mod fetch;
mod models;
mod selector;
pub mod timed_text;
mod youtube;

pub use diagnostics::Diagnostics;
pub use fetch::fetch_segments;
pub use models::{
    format_timestamp, CaptionCatalogue, CaptionKind, CaptionTrack, CatalogueEntry, TimedTextSegment,
};
pub use selector::{select_best_track, ENGLISH_PREFIX};
pub use timed_text::parse_timed_text;
pub use youtube::{catalogue_from_info, YtDlpProvider};

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A source of subtitle tracks for online videos.
#[async_trait]
pub trait SubtitleProvider: Send + Sync {
    /// List the caption tracks available for a video.
    async fn list_tracks(
        &self,
        video_url: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<CaptionCatalogue>;

    /// Download one track into `output_dir` and return the written file.
    async fn download_track(
        &self,
        video_url: &str,
        track: &CaptionTrack,
        output_dir: &Path,
        diagnostics: &mut Diagnostics,
    ) -> Result<PathBuf>;
}
