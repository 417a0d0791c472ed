//! TubeTalk CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tubetalk::cli::{commands, Cli, Commands};
use tubetalk::config::{CredentialOverrides, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("tubetalk={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    let overrides = CredentialOverrides::from(&cli.account);

    // Execute command
    let result = match &cli.command {
        Commands::Talk { video_url, min_section_length } => {
            commands::run_talk(video_url, *min_section_length, &overrides, settings).await
        }

        Commands::Index { video_url, min_section_length } => {
            commands::run_index(video_url, *min_section_length, &overrides, settings).await
        }

        Commands::Ask { question } => commands::run_ask(question, &overrides, settings).await,

        Commands::Sections { video_url, min_section_length, json } => {
            commands::run_sections(video_url, *min_section_length, *json, settings).await
        }

        Commands::Config { action } => commands::run_config(action, settings),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
