//! Configuration settings for TubeTalk.

use crate::error::TubeTalkError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub subtitles: SubtitleSettings,
    pub vectara: VectaraSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for temporary subtitle downloads.
    pub temp_dir: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            temp_dir: "/tmp/tubetalk".to_string(),
        }
    }
}

/// Subtitle download and sectioning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleSettings {
    /// Path or name of the yt-dlp binary.
    pub ytdlp_path: String,
    /// Sections shorter than this many characters absorb the next subtitle.
    pub min_section_length: usize,
}

impl Default for SubtitleSettings {
    fn default() -> Self {
        Self {
            ytdlp_path: "yt-dlp".to_string(),
            min_section_length: 256,
        }
    }
}

/// Vectara account and endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectaraSettings {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Per-request ceiling in seconds. Requests are never retried.
    pub timeout_seconds: u64,
    /// Customer (account) id. `CUSTOMER_ID` takes precedence.
    pub customer_id: Option<String>,
    /// Corpus id. `CORPUS_ID` takes precedence.
    pub corpus_id: Option<String>,
    /// API key. `API_KEY` takes precedence.
    pub api_key: Option<String>,
}

impl Default for VectaraSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.vectara.io".to_string(),
            timeout_seconds: 30,
            customer_id: None,
            corpus_id: None,
            api_key: None,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            settings.validate()?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.vectara.base_url.trim().is_empty() {
            return Err(TubeTalkError::Config("vectara.base_url is empty".into()));
        }
        if self.vectara.timeout_seconds == 0 {
            return Err(TubeTalkError::Config(
                "vectara.timeout_seconds must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubetalk")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded temp directory path.
    pub fn temp_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.temp_dir)
    }
}
