//! CLI output formatting utilities.

use crate::chunking::MergedSection;
use crate::vectara::Answer;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a summary and its numbered sources.
    pub fn answer(answer: &Answer) {
        Output::header("Summary");
        println!("\n{}", answer.summary);

        Output::header("Sources");
        for citation in &answer.citations {
            println!(
                "\n{} {}",
                style(format!("[{}]", citation.index)).green().bold(),
                citation.text
            );
            for (name, value) in &citation.metadata {
                println!("    {}: {}", style(name).dim(), value);
            }
        }
        println!();
    }

    /// Print one merged section with its time range.
    pub fn section(index: usize, section: &MergedSection) {
        println!(
            "\n{} {} - {}",
            style(format!("#{}", index + 1)).cyan().bold(),
            style(section.start_time()).dim(),
            style(section.end_time()).dim()
        );
        println!("   {}", section.text.replace('\n', " "));
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
