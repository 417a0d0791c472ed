//! Configuration module for TubeTalk.
//!
//! Handles loading application settings and resolving Vectara credentials.

mod credentials;
mod settings;

pub use credentials::{CredentialOverrides, Credentials};
pub use settings::{GeneralSettings, Settings, SubtitleSettings, VectaraSettings};
