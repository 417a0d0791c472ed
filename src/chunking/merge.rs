//! Length-based merging of adjacent subtitle segments.

use super::MergedSection;
use crate::subtitles::TimedTextSegment;
use tracing::debug;

/// Merges short subtitle segments into sections of a minimum length.
#[derive(Debug, Clone)]
pub struct SectionMerger {
    min_length: usize,
}

impl SectionMerger {
    /// Sections shorter than `min_length` characters absorb the next segment.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn merge(&self, segments: Vec<TimedTextSegment>) -> Vec<MergedSection> {
        merge_segments(segments, self.min_length)
    }
}

impl Default for SectionMerger {
    fn default() -> Self {
        Self::new(256)
    }
}

/// Merge segments in order.
///
/// The buffered section absorbs the next segment while its own length is
/// below `min_length`; otherwise it is emitted and the next segment starts a
/// new buffer. The last buffer is always emitted, however short.
pub fn merge_segments(segments: Vec<TimedTextSegment>, min_length: usize) -> Vec<MergedSection> {
    let mut iter = segments.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut buffer = MergedSection::from(first);

    for segment in iter {
        if buffer.len() < min_length {
            buffer.absorb(segment);
        } else {
            merged.push(std::mem::replace(&mut buffer, MergedSection::from(segment)));
        }
    }
    merged.push(buffer);

    debug!("Merged subtitles into {} sections", merged.len());
    merged
}
