//! Caption track selection.
//!
//! Walks the catalogue once, remembering which section is active and the
//! last English track seen. The last eligible track wins regardless of its
//! section: an automatic caption listed after a human subtitle replaces it.
//! That matches how the catalogue has always been read and is pinned by the
//! tests below; whether subtitles should instead always win is an open
//! product question.

use super::{CaptionCatalogue, CaptionKind, CaptionTrack, CatalogueEntry};
use tracing::debug;

/// Language codes eligible for download start with this prefix.
pub const ENGLISH_PREFIX: &str = "en";

/// Section currently governing the tracks being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Auto,
    Subtitles,
}

impl From<CaptionKind> for Section {
    fn from(kind: CaptionKind) -> Self {
        match kind {
            CaptionKind::Auto => Section::Auto,
            CaptionKind::Human => Section::Subtitles,
        }
    }
}

#[derive(Debug)]
struct Match<'a> {
    language_code: &'a str,
    section: Section,
}

/// Pick the track to download, or `None` when no English track exists.
pub fn select_best_track(catalogue: &CaptionCatalogue) -> Option<CaptionTrack> {
    let mut current = Section::None;
    let mut best: Option<Match<'_>> = None;

    for entry in catalogue.entries() {
        match entry {
            CatalogueEntry::Header(kind) => current = Section::from(*kind),
            CatalogueEntry::Track { language_code }
                if language_code.starts_with(ENGLISH_PREFIX) =>
            {
                best = Some(Match {
                    language_code,
                    section: current,
                });
            }
            CatalogueEntry::Track { .. } => {}
        }
    }

    debug!(?best, "Caption scan finished");

    let best = best?;
    let kind = match best.section {
        Section::Auto => CaptionKind::Auto,
        Section::Subtitles => CaptionKind::Human,
        // A track seen before any header cannot be classified.
        Section::None => return None,
    };

    Some(CaptionTrack::new(best.language_code, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_english_track() {
        let catalogue = CaptionCatalogue::new()
            .with_section(CaptionKind::Auto, ["fr", "de", "es"])
            .with_section(CaptionKind::Human, ["pt-BR"]);

        assert_eq!(select_best_track(&catalogue), None);
    }

    #[test]
    fn test_empty_catalogue() {
        assert_eq!(select_best_track(&CaptionCatalogue::new()), None);
    }

    #[test]
    fn test_single_auto_track() {
        let catalogue = CaptionCatalogue::new().with_section(CaptionKind::Auto, ["fr", "en"]);
        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("en", CaptionKind::Auto))
        );
    }

    #[test]
    fn test_single_human_track() {
        let catalogue = CaptionCatalogue::new()
            .with_section(CaptionKind::Auto, ["fr"])
            .with_section(CaptionKind::Human, ["en-GB"]);

        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("en-GB", CaptionKind::Human))
        );
    }

    #[test]
    fn test_prefix_match_is_literal() {
        // Case-sensitive, and anything after the prefix is accepted.
        let catalogue = CaptionCatalogue::new().with_section(CaptionKind::Human, ["EN", "eng"]);
        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("eng", CaptionKind::Human))
        );
    }

    #[test]
    fn test_subtitles_listed_after_auto_win() {
        let catalogue = CaptionCatalogue::new()
            .with_section(CaptionKind::Auto, ["en"])
            .with_section(CaptionKind::Human, ["en"]);

        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("en", CaptionKind::Human))
        );
    }

    #[test]
    fn test_auto_listed_after_subtitles_overwrites() {
        let catalogue = CaptionCatalogue::new()
            .with_section(CaptionKind::Human, ["en-US"])
            .with_section(CaptionKind::Auto, ["en"]);

        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("en", CaptionKind::Auto))
        );
    }

    #[test]
    fn test_last_eligible_in_section_wins() {
        let catalogue = CaptionCatalogue::new()
            .with_section(CaptionKind::Human, ["en", "fr", "en-GB", "de"]);

        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("en-GB", CaptionKind::Human))
        );
    }

    #[test]
    fn test_track_before_any_header_is_not_found() {
        let mut catalogue = CaptionCatalogue::new();
        catalogue.push_track("en");
        assert_eq!(select_best_track(&catalogue), None);
    }

    #[test]
    fn test_unclassified_track_is_replaced_by_later_one() {
        let mut catalogue = CaptionCatalogue::new();
        catalogue.push_track("en");
        catalogue.push_header(CaptionKind::Auto);
        catalogue.push_track("en-US");

        assert_eq!(
            select_best_track(&catalogue),
            Some(CaptionTrack::new("en-US", CaptionKind::Auto))
        );
    }
}
