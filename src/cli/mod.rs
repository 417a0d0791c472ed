//! CLI module for TubeTalk.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use crate::config::CredentialOverrides;
use clap::{Args, Parser, Subcommand};

/// TubeTalk - ask questions about a YouTube video
///
/// Downloads the video's English subtitles, indexes them into a Vectara
/// corpus and answers questions with a summary and cited passages.
#[derive(Parser, Debug)]
#[command(name = "tubetalk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(flatten)]
    pub account: AccountArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Vectara account identifiers, usually taken from the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct AccountArgs {
    /// Vectara customer id
    #[arg(long, env = "CUSTOMER_ID", global = true)]
    pub customer_id: Option<String>,

    /// Vectara corpus id
    #[arg(long, env = "CORPUS_ID", global = true)]
    pub corpus_id: Option<String>,

    /// Vectara API key
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,
}

impl From<&AccountArgs> for CredentialOverrides {
    fn from(args: &AccountArgs) -> Self {
        Self {
            customer_id: args.customer_id.clone(),
            corpus_id: args.corpus_id.clone(),
            api_key: args.api_key.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a video's subtitles, then answer questions until 'quit'
    Talk {
        /// URL of the video to talk to
        #[arg(long)]
        video_url: String,

        /// Minimum section length in characters (overrides config)
        #[arg(long)]
        min_section_length: Option<usize>,
    },

    /// Index a video's subtitles without starting a session
    Index {
        /// URL of the video to index
        #[arg(long)]
        video_url: String,

        /// Minimum section length in characters (overrides config)
        #[arg(long)]
        min_section_length: Option<usize>,
    },

    /// Ask a single question against the corpus
    Ask {
        /// The question to ask
        question: String,
    },

    /// Print the merged subtitle sections of a video
    Sections {
        /// URL of the video
        #[arg(long)]
        video_url: String,

        /// Minimum section length in characters (overrides config)
        #[arg(long)]
        min_section_length: Option<usize>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
