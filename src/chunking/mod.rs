//! Sectioning of subtitles into searchable units.
//!
//! Subtitle cues are usually a few words long. They are merged into sections
//! of at least a minimum length before indexing.

mod merge;

pub use merge::{merge_segments, SectionMerger};

use crate::subtitles::{format_timestamp, TimedTextSegment};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One or more consecutive subtitle segments joined together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedSection {
    /// Start of the first merged segment.
    pub start: Duration,
    /// End of the last merged segment.
    pub end: Duration,
    /// Segment texts joined by single spaces.
    pub text: String,
}

impl MergedSection {
    pub fn new(start: Duration, end: Duration, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Length in characters, the unit the minimum section length is measured in.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a later segment, keeping this section's start.
    fn absorb(&mut self, next: TimedTextSegment) {
        self.end = next.end;
        self.text.push(' ');
        self.text.push_str(&next.text);
    }

    pub fn start_time(&self) -> String {
        format_timestamp(self.start)
    }

    pub fn end_time(&self) -> String {
        format_timestamp(self.end)
    }
}

impl From<TimedTextSegment> for MergedSection {
    fn from(segment: TimedTextSegment) -> Self {
        Self::new(segment.start, segment.end, segment.text)
    }
}
