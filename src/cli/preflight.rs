//! Pre-flight checks before network and subprocess work.
//!
//! Validates that credentials and tools are available before starting
//! operations that would otherwise fail midway.

use crate::config::{CredentialOverrides, Credentials, Settings};
use crate::error::{Result, TubeTalkError};
use std::process::Command;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Fetching subtitles requires yt-dlp.
    FetchSubtitles,
    /// Asking only talks to Vectara.
    Ask,
}

/// Run pre-flight tool checks for the given operation.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::FetchSubtitles => check_tool(&settings.subtitles.ytdlp_path)?,
        Operation::Ask => {
            // No external tools needed
        }
    }
    Ok(())
}

/// Resolve the Vectara credentials, reporting every missing value.
pub fn credentials(overrides: &CredentialOverrides, settings: &Settings) -> Result<Credentials> {
    Credentials::resolve(overrides, settings)
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    match Command::new(name).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(TubeTalkError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(TubeTalkError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(TubeTalkError::ToolNotFound(format!("{}: {}", name, e))),
    }
}
