//! Timed-text parsing (WebVTT and SubRip).
//!
//! Both formats are cue blocks separated by blank lines, with a
//! `start --> end` timing line followed by the cue text. WebVTT uses `.`
//! before the milliseconds, SubRip uses `,`; both are accepted here.

use super::TimedTextSegment;
use crate::error::{Result, TubeTalkError};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, instrument};

static TIMING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S+)\s+-->\s+(\S+)").expect("Invalid regex")
});

static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+):)?(\d{1,2}):(\d{2})[.,](\d{1,3})$").expect("Invalid regex")
});

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

/// Read and parse a subtitle file.
#[instrument]
pub fn parse_file(path: &Path) -> Result<Vec<TimedTextSegment>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        TubeTalkError::SubtitleUnavailable(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_timed_text(&content)
}

/// Parse WebVTT or SubRip content into segments, in file order.
pub fn parse_timed_text(content: &str) -> Result<Vec<TimedTextSegment>> {
    let content = content.trim_start_matches('\u{feff}').replace("\r\n", "\n").replace('\r', "\n");

    let mut segments = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    // Only a truly empty line ends a cue; whitespace-only lines are cue text.
    for line in content.split('\n').chain(std::iter::once("")) {
        if line.is_empty() {
            if !block.is_empty() {
                if let Some(segment) = parse_block(&block)? {
                    segments.push(segment);
                }
                block.clear();
            }
        } else {
            block.push(line);
        }
    }

    debug!("Parsed {} subtitle cues", segments.len());
    Ok(segments)
}

/// Parse one cue block. Header, comment and style blocks yield `None`.
fn parse_block(block: &[&str]) -> Result<Option<TimedTextSegment>> {
    let first = block[0].trim_start();
    if first.starts_with("WEBVTT")
        || first.starts_with("NOTE")
        || first.starts_with("STYLE")
        || first.starts_with("REGION")
    {
        return Ok(None);
    }

    // The timing line is first, or second after a cue identifier.
    let Some(timing_idx) = block.iter().take(2).position(|l| l.contains("-->")) else {
        debug!("Skipping block without timing: {:?}", first);
        return Ok(None);
    };

    let timing = block[timing_idx];
    let caps = TIMING_LINE
        .captures(timing)
        .ok_or_else(|| malformed(timing))?;
    let start = parse_timestamp(&caps[1]).ok_or_else(|| malformed(timing))?;
    let end = parse_timestamp(&caps[2]).ok_or_else(|| malformed(timing))?;

    let text = block[timing_idx + 1..]
        .iter()
        .map(|l| clean_text(l))
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Some(TimedTextSegment::new(start, end, text)))
}

fn malformed(line: &str) -> TubeTalkError {
    TubeTalkError::SubtitleUnavailable(format!("Malformed timing line: {}", line.trim()))
}

/// Parse `HH:MM:SS.mmm`, `MM:SS.mmm` or the SubRip `HH:MM:SS,mmm`.
pub fn parse_timestamp(raw: &str) -> Option<Duration> {
    let caps = TIMESTAMP.captures(raw.trim())?;

    let hours: u64 = caps.get(1).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    // "5" after the separator means 500ms.
    let fraction = &caps[4];
    let millis: u64 = format!("{:0<3}", fraction).parse().ok()?;

    let total_secs = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
    Duration::from_secs(total_secs).checked_add(Duration::from_millis(millis))
}

/// Strip inline markup and decode the common entities.
fn clean_text(line: &str) -> String {
    MARKUP
        .replace_all(line, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&lrm;", "")
        .replace("&rlm;", "")
        .replace("&amp;", "&")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_parse_vtt() {
        let vtt = "WEBVTT\nKind: captions\nLanguage: en\n\n\
                   00:00:01.000 --> 00:00:04.500 align:start position:0%\n\
                   Hello world\n\n\
                   intro\n\
                   00:00:05.000 --> 00:00:08.000\n\
                   Second cue\nwith two lines\n";

        let segments = parse_timed_text(vtt).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, secs(1.0));
        assert_eq!(segments[0].end, secs(4.5));
        assert_eq!(segments[0].text, "Hello world");
        assert_eq!(segments[1].text, "Second cue\nwith two lines");
    }

    #[test]
    fn test_parse_srt() {
        let srt = "1\r\n00:00:01,000 --> 00:00:04,000\r\nHello world\r\n\r\n\
                   2\r\n00:00:05,000 --> 00:00:08,000\r\nTest subtitle\r\n";

        let segments = parse_timed_text(srt).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].start, secs(5.0));
        assert_eq!(segments[1].text, "Test subtitle");
    }

    #[test]
    fn test_strips_inline_markup() {
        let vtt = "WEBVTT\n\n\
                   00:00:00.000 --> 00:00:02.000\n\
                   so<00:00:00.500><c> this</c><c> is</c> &amp; &lt;b&gt;\n";

        let segments = parse_timed_text(vtt).unwrap();
        assert_eq!(segments[0].text, "so this is & <b>");
    }

    #[test]
    fn test_skips_note_and_style_blocks() {
        let vtt = "WEBVTT\n\nNOTE this is a comment\n\nSTYLE\n::cue { color: red }\n\n\
                   00:01.000 --> 00:02.000\nshort form\n";

        let segments = parse_timed_text(vtt).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, secs(1.0));
        assert_eq!(segments[0].text, "short form");
    }

    #[test]
    fn test_empty_cue_text() {
        let vtt = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n\n00:00:02.000 --> 00:00:03.000\nafter\n";

        let segments = parse_timed_text(vtt).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "");
        assert_eq!(segments[1].text, "after");
    }

    #[test]
    fn test_auto_caption_blank_line_keeps_text() {
        let vtt = "WEBVTT\nKind: captions\nLanguage: en\n\n\
                   00:00:00.719 --> 00:00:03.070 align:start position:0%\n \n\
                   hey<00:00:00.960><c> guys</c>\n\n\
                   00:00:03.070 --> 00:00:03.080 align:start position:0%\n\
                   hey guys\n \n\n";

        let segments = parse_timed_text(vtt).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Duration::from_millis(719));
        assert_eq!(segments[0].end, Duration::from_millis(3070));
        assert_eq!(segments[0].text, "hey guys");
        assert_eq!(segments[1].text, "hey guys");
    }

    #[test]
    fn test_oversized_hours_is_an_error() {
        assert_eq!(
            parse_timestamp("99999999999999:00:00.000"),
            Some(Duration::from_secs(99_999_999_999_999 * 3600))
        );
        assert_eq!(parse_timestamp("99999999999999999:00:00.000"), None);

        let vtt = "WEBVTT\n\n99999999999999999:00:00.000 --> 99999999999999999:00:01.000\ntext\n";
        assert!(matches!(
            parse_timed_text(vtt),
            Err(TubeTalkError::SubtitleUnavailable(_))
        ));
    }

    #[test]
    fn test_malformed_timing_is_an_error() {
        let vtt = "WEBVTT\n\n00:00:xx.000 --> 00:00:02.000\ntext\n";
        assert!(matches!(
            parse_timed_text(vtt),
            Err(TubeTalkError::SubtitleUnavailable(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_timed_text("").unwrap().is_empty());
        assert!(parse_timed_text("WEBVTT\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("01:02:03.004"), Some(Duration::from_millis(3_723_004)));
        assert_eq!(parse_timestamp("02:03,5"), Some(Duration::from_millis(123_500)));
        assert_eq!(parse_timestamp("00:61.000"), None);
        assert_eq!(parse_timestamp("nonsense"), None);
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.en.vtt");
        std::fs::write(&path, "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nhi\n").unwrap();

        let segments = parse_file(&path).unwrap();
        assert_eq!(segments, vec![TimedTextSegment::new(Duration::ZERO, secs(1.0), "hi")]);

        assert!(parse_file(&dir.path().join("missing.vtt")).is_err());
    }
}
