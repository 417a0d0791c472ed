//! Data models for subtitles.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Who produced a caption track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionKind {
    /// Uploaded by the video creator ("subtitles").
    Human,
    /// Machine generated ("automatic captions").
    Auto,
}

impl std::fmt::Display for CaptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionKind::Human => write!(f, "subtitles"),
            CaptionKind::Auto => write!(f, "automatic captions"),
        }
    }
}

/// One downloadable caption track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTrack {
    pub language_code: String,
    pub kind: CaptionKind,
}

impl CaptionTrack {
    pub fn new(language_code: impl Into<String>, kind: CaptionKind) -> Self {
        Self {
            language_code: language_code.into(),
            kind,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.kind == CaptionKind::Auto
    }
}

/// A line of the catalogue as the provider reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueEntry {
    /// Every track until the next header belongs to this section.
    Header(CaptionKind),
    /// A track listed under the most recent header.
    Track { language_code: String },
}

/// Ordered listing of the caption tracks available for a video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionCatalogue {
    entries: Vec<CatalogueEntry>,
}

impl CaptionCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new section.
    pub fn push_header(&mut self, kind: CaptionKind) {
        self.entries.push(CatalogueEntry::Header(kind));
    }

    /// List a track under the current section.
    pub fn push_track(&mut self, language_code: impl Into<String>) {
        self.entries.push(CatalogueEntry::Track {
            language_code: language_code.into(),
        });
    }

    /// Append a header followed by its tracks.
    pub fn with_section<I, S>(mut self, kind: CaptionKind, language_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_header(kind);
        for code in language_codes {
            self.push_track(code);
        }
        self
    }

    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of listed tracks, headers excluded.
    pub fn track_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, CatalogueEntry::Track { .. }))
            .count()
    }
}

/// A single timed span of subtitle text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedTextSegment {
    /// Offset from the start of the video.
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}

impl TimedTextSegment {
    pub fn new(start: Duration, end: Duration, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Render a duration as `H:MM:SS`, adding `.ffffff` when microseconds are present.
pub fn format_timestamp(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let micros = duration.subsec_micros();

    if micros > 0 {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, secs, micros)
    } else {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Duration::ZERO), "0:00:00");
        assert_eq!(format_timestamp(Duration::from_secs(65)), "0:01:05");
        assert_eq!(format_timestamp(Duration::from_millis(3_661_500)), "1:01:01.500000");
        assert_eq!(format_timestamp(Duration::from_secs(36_000)), "10:00:00");
    }

    #[test]
    fn test_catalogue_builder() {
        let catalogue = CaptionCatalogue::new()
            .with_section(CaptionKind::Auto, ["en", "fr"])
            .with_section(CaptionKind::Human, ["de"]);

        assert_eq!(catalogue.entries().len(), 5);
        assert_eq!(catalogue.track_count(), 3);
        assert_eq!(catalogue.entries()[0], CatalogueEntry::Header(CaptionKind::Auto));
    }

    #[test]
    fn test_track_is_auto() {
        assert!(CaptionTrack::new("en", CaptionKind::Auto).is_auto());
        assert!(!CaptionTrack::new("en", CaptionKind::Human).is_auto());
    }
}
