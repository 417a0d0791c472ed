//! Workflow driver for TubeTalk.
//!
//! Fetches a video's subtitles, merges them into sections, indexes them and
//! then answers questions until the user quits.

use crate::chunking::{MergedSection, SectionMerger};
use crate::config::{Credentials, Settings};
use crate::error::{Result, TubeTalkError};
use crate::subtitles::{fetch_segments, SubtitleProvider, TimedTextSegment, YtDlpProvider};
use crate::vectara::{Answer, VectaraClient};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Typing this (any case) ends the query loop.
pub const QUIT_COMMAND: &str = "quit";

const PROMPT: &str = "Enter a query (or 'quit' to exit): ";

/// Steps of a talk session. There is no way back to an earlier step.
#[derive(Debug)]
enum Step {
    Start,
    FetchSubtitles,
    Index(Vec<MergedSection>),
    QueryLoop,
    Done,
    Failed(TubeTalkError),
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::FetchSubtitles => "fetch_subtitles",
            Step::Index(_) => "index",
            Step::QueryLoop => "query_loop",
            Step::Done => "done",
            Step::Failed(_) => "failed",
        }
    }
}

/// Result of indexing one video.
#[derive(Debug, Clone)]
pub struct IndexResult {
    pub document_id: String,
    pub sections_indexed: usize,
}

/// Coordinates the subtitle provider, the merger and the Vectara client.
pub struct Orchestrator {
    provider: Arc<dyn SubtitleProvider>,
    client: VectaraClient,
    merger: SectionMerger,
    temp_dir: PathBuf,
}

impl Orchestrator {
    /// Create an orchestrator backed by yt-dlp.
    pub fn new(settings: &Settings, credentials: Credentials) -> Result<Self> {
        let provider = Arc::new(YtDlpProvider::with_binary(&settings.subtitles.ytdlp_path));
        let client = VectaraClient::new(credentials, &settings.vectara)?;
        Self::with_components(settings, provider, client)
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        settings: &Settings,
        provider: Arc<dyn SubtitleProvider>,
        client: VectaraClient,
    ) -> Result<Self> {
        let temp_dir = settings.temp_dir();
        std::fs::create_dir_all(&temp_dir)?;

        Ok(Self {
            provider,
            client,
            merger: SectionMerger::new(settings.subtitles.min_section_length),
            temp_dir,
        })
    }

    /// Download the best English track and parse it.
    pub async fn fetch_segments(&self, video_url: &str) -> Result<Vec<TimedTextSegment>> {
        fetch_segments(self.provider.as_ref(), video_url, &self.temp_dir).await
    }

    /// Fetch subtitles and merge them into sections.
    pub async fn fetch_sections(&self, video_url: &str) -> Result<Vec<MergedSection>> {
        let segments = self.fetch_segments(video_url).await?;
        Ok(self.merger.merge(segments))
    }

    /// Fetch, merge and index a video. The URL is the document id.
    pub async fn index_video(&self, video_url: &str) -> Result<IndexResult> {
        let sections = self.fetch_sections(video_url).await?;
        self.index_sections(video_url, &sections).await
    }

    async fn index_sections(
        &self,
        video_url: &str,
        sections: &[MergedSection],
    ) -> Result<IndexResult> {
        self.client.index_sections(video_url, sections).await?;
        Ok(IndexResult {
            document_id: video_url.to_string(),
            sections_indexed: sections.len(),
        })
    }

    /// Ask one question against the corpus.
    pub async fn ask(&self, question: &str) -> Result<Answer> {
        self.client.ask(question).await
    }

    /// Run the whole session: fetch, index, then answer questions read from
    /// `input` until `quit` or end of input.
    ///
    /// Failing to obtain subtitles ends the session before any question is
    /// read. A failed index or query is reported and the session carries on.
    pub async fn talk<R: BufRead, W: Write>(
        &self,
        video_url: &str,
        mut input: R,
        mut output: W,
    ) -> Result<()> {
        let mut step = Step::Start;

        loop {
            debug!(step = step.name(), "Workflow step");

            step = match step {
                Step::Start => Step::FetchSubtitles,
                Step::FetchSubtitles => match self.fetch_sections(video_url).await {
                    Ok(sections) => Step::Index(sections),
                    Err(e) => Step::Failed(e),
                },
                Step::Index(sections) => {
                    match self.index_sections(video_url, &sections).await {
                        Ok(result) => info!("Indexed {} sections", result.sections_indexed),
                        Err(e) => {
                            error!("{}", e);
                            writeln!(output, "Indexing failed: {}", e)?;
                        }
                    }
                    Step::QueryLoop
                }
                Step::QueryLoop => {
                    self.query_loop(&mut input, &mut output).await?;
                    Step::Done
                }
                Step::Done => return Ok(()),
                Step::Failed(e) => return Err(e),
            };
        }
    }

    async fn query_loop<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                return Ok(());
            }

            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            if question.eq_ignore_ascii_case(QUIT_COMMAND) {
                return Ok(());
            }

            match self.ask(question).await {
                Ok(answer) => writeln!(output, "{}", answer)?,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(output, "Query failed: {}", e)?;
                }
            }
        }
    }
}
