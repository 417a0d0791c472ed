//! CLI command implementations.

mod ask;
mod config;
mod index;
mod sections;
mod talk;

pub use ask::run_ask;
pub use config::run_config;
pub use index::run_index;
pub use sections::run_sections;
pub use talk::run_talk;

use crate::config::Settings;

/// Apply a `--min-section-length` override.
fn with_min_section_length(mut settings: Settings, min_section_length: Option<usize>) -> Settings {
    if let Some(len) = min_section_length {
        settings.subtitles.min_section_length = len;
    }
    settings
}
