//! TubeTalk - talk to a YouTube video
//!
//! Downloads the English subtitles of a video, merges them into sections,
//! indexes them into a Vectara corpus and answers questions about them.
//!
//! # Architecture
//!
//! - `config` - Configuration and credential resolution
//! - `subtitles` - Caption track listing, selection, download and parsing
//! - `chunking` - Merging short subtitle segments into sections
//! - `vectara` - Index and query client for the Vectara API
//! - `orchestrator` - Pipeline coordination and the interactive session
//!
//! # Example
//!
//! ```rust,no_run
//! use tubetalk::config::{CredentialOverrides, Credentials, Settings};
//! use tubetalk::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let credentials = Credentials::resolve(&CredentialOverrides::default(), &settings)?;
//!     let orchestrator = Orchestrator::new(&settings, credentials)?;
//!
//!     let result = orchestrator.index_video("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//!     println!("Indexed {} sections", result.sections_indexed);
//!
//!     let answer = orchestrator.ask("What is the video about?").await?;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```

pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod subtitles;
pub mod vectara;

pub use error::{Result, TubeTalkError};
