//! Vectara indexing and query client.
//!
//! Requests are JSON over HTTPS with `x-api-key` and `customer-id` headers.
//! Each call waits at most the configured timeout and is never retried.

mod index;
mod query;
mod response;

pub use index::{build_index_request, DocumentPart, IndexDocument, IndexRequest, PartMetadata};
pub use query::{build_query_request, QueryRequest};
pub use response::{Answer, Citation, QueryResponse};

use crate::chunking::MergedSection;
use crate::config::{Credentials, VectaraSettings};
use crate::error::{Result, TubeTalkError};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

const INDEX_PATH: &str = "/v1/core/index";
const QUERY_PATH: &str = "/v1/query";

/// HTTP client bound to one Vectara account and corpus.
pub struct VectaraClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl VectaraClient {
    /// Create a client using the endpoint and timeout from settings.
    pub fn new(credentials: Credentials, settings: &VectaraSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Index merged sections as one document.
    #[instrument(skip(self, sections), fields(sections = sections.len()))]
    pub async fn index_sections(
        &self,
        document_id: &str,
        sections: &[MergedSection],
    ) -> Result<()> {
        let request = build_index_request(&self.credentials, document_id, sections)?;
        let (status, body) = self.post(INDEX_PATH, &request).await?;

        if status != StatusCode::OK {
            return Err(TubeTalkError::IndexingFailed {
                status: status.as_u16(),
                reason: reason(status),
                body,
            });
        }

        info!("Indexed {} sections into corpus {}", sections.len(), self.credentials.corpus_id);
        Ok(())
    }

    /// Run a question against the corpus and return the raw response.
    #[instrument(skip(self))]
    pub async fn query(&self, question: &str) -> Result<QueryResponse> {
        let request = build_query_request(&self.credentials, question);
        let (status, body) = self.post(QUERY_PATH, &request).await?;

        if status != StatusCode::OK {
            return Err(TubeTalkError::QueryFailed {
                status: status.as_u16(),
                reason: reason(status),
                body,
            });
        }

        QueryResponse::from_body(&body)
    }

    /// Run a question and shape the response for display.
    pub async fn ask(&self, question: &str) -> Result<Answer> {
        let response = self.query(question).await?;
        Answer::from_response(&response)
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<(StatusCode, String)> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.credentials.api_key)
            .header("customer-id", &self.credentials.customer_id)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}
