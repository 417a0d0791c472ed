//! Query request construction.
//!
//! Every query has the same shape; only the question text varies.

use crate::config::Credentials;
use serde::{Deserialize, Serialize};

pub const NUM_RESULTS: u32 = 5;
pub const LEXICAL_INTERPOLATION: f64 = 0.002;
pub const SENTENCES_AROUND: u32 = 2;
pub const SUMMARIZER: &str = "vectara-summary-ext-v1.2.0";
pub const RESPONSE_LANG: &str = "en";
pub const MAX_SUMMARIZED_RESULTS: u32 = 5;

/// Body of a `POST /v1/query` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: Vec<QueryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryItem {
    pub query: String,
    pub num_results: u32,
    pub context_config: ContextConfig,
    pub corpus_key: Vec<CorpusKey>,
    pub summary: Vec<SummaryRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    pub sentences_before: u32,
    pub sentences_after: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusKey {
    pub customer_id: String,
    pub corpus_id: String,
    pub lexical_interpolation_config: LexicalInterpolation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalInterpolation {
    pub lambda: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub summarizer_prompt_name: String,
    pub response_lang: String,
    pub max_summarized_results: u32,
}

/// Build the request for `question` against the configured corpus.
pub fn build_query_request(credentials: &Credentials, question: &str) -> QueryRequest {
    QueryRequest {
        query: vec![QueryItem {
            query: question.to_string(),
            num_results: NUM_RESULTS,
            context_config: ContextConfig {
                sentences_before: SENTENCES_AROUND,
                sentences_after: SENTENCES_AROUND,
            },
            corpus_key: vec![CorpusKey {
                customer_id: credentials.customer_id.clone(),
                corpus_id: credentials.corpus_id.clone(),
                lexical_interpolation_config: LexicalInterpolation {
                    lambda: LEXICAL_INTERPOLATION,
                },
            }],
            summary: vec![SummaryRequest {
                summarizer_prompt_name: SUMMARIZER.to_string(),
                response_lang: RESPONSE_LANG.to_string(),
                max_summarized_results: MAX_SUMMARIZED_RESULTS,
            }],
        }],
    }
}
