//! Query response parsing and rendering.

use crate::error::{Result, TubeTalkError};
use serde::{Deserialize, Serialize};

/// The parts of a query response that get displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "responseSet")]
    pub response_set: Vec<ResponseSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSet {
    pub response: Vec<SourcePassage>,
    pub summary: Vec<Summary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcePassage {
    pub text: String,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
}

impl QueryResponse {
    /// Parse a raw response body.
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| {
            TubeTalkError::MalformedResponse(format!("unexpected query response: {}", e))
        })
    }
}

/// A summary with its numbered sources, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub summary: String,
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// 1-based position in the response.
    pub index: usize,
    /// Passage text on a single line.
    pub text: String,
    pub metadata: Vec<(String, String)>,
}

impl Answer {
    /// Take the first summary and the first response set's passages.
    pub fn from_response(response: &QueryResponse) -> Result<Self> {
        let set = response
            .response_set
            .first()
            .ok_or_else(|| TubeTalkError::MalformedResponse("response has no responseSet".into()))?;

        let summary = set
            .summary
            .first()
            .ok_or_else(|| TubeTalkError::MalformedResponse("response has no summary".into()))?
            .text
            .clone();

        let citations = set
            .response
            .iter()
            .enumerate()
            .map(|(i, passage)| Citation {
                index: i + 1,
                text: flatten(&passage.text),
                metadata: passage
                    .metadata
                    .iter()
                    .map(|m| (m.name.clone(), m.value.clone()))
                    .collect(),
            })
            .collect();

        Ok(Self { summary, citations })
    }
}

fn flatten(text: &str) -> String {
    text.replace('\n', " ").replace('\r', "")
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Summary:\n")?;
        writeln!(f, "{}\n\n", self.summary)?;
        writeln!(f, "Sources:\n")?;
        for citation in &self.citations {
            writeln!(f, "[{}] {}", citation.index, citation.text)?;
            for (name, value) in &citation.metadata {
                writeln!(f, "{}: {}", name, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "responseSet": [{
            "response": [
                {
                    "text": "Rust is a systems\nlanguage.\r",
                    "score": 0.9,
                    "metadata": [
                        {"name": "start_time", "value": "0:00:01"},
                        {"name": "end_time", "value": "0:00:09.500000"}
                    ]
                },
                {"text": "Second passage", "metadata": []}
            ],
            "summary": [{"text": "Rust is a language [1]."}],
            "status": []
        }],
        "status": []
    }"#;

    #[test]
    fn test_answer_from_response() {
        let response = QueryResponse::from_body(BODY).unwrap();
        let answer = Answer::from_response(&response).unwrap();

        assert_eq!(answer.summary, "Rust is a language [1].");
        assert_eq!(answer.citations.len(), 2);
        assert_eq!(answer.citations[0].index, 1);
        assert_eq!(answer.citations[0].text, "Rust is a systems language.");
        assert_eq!(
            answer.citations[0].metadata,
            vec![
                ("start_time".to_string(), "0:00:01".to_string()),
                ("end_time".to_string(), "0:00:09.500000".to_string()),
            ]
        );
        assert_eq!(answer.citations[1].index, 2);
    }

    #[test]
    fn test_display() {
        let answer = Answer::from_response(&QueryResponse::from_body(BODY).unwrap()).unwrap();
        let rendered = answer.to_string();

        assert!(rendered.starts_with("Summary:\n\nRust is a language [1].\n"));
        assert!(rendered.contains("[1] Rust is a systems language.\nstart_time: 0:00:01\nend_time: 0:00:09.500000\n"));
        assert!(rendered.contains("[2] Second passage\n"));
    }

    #[test]
    fn test_missing_response_set() {
        let response = QueryResponse::from_body(r#"{"responseSet": []}"#).unwrap();
        assert!(matches!(
            Answer::from_response(&response),
            Err(TubeTalkError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_summary() {
        let response =
            QueryResponse::from_body(r#"{"responseSet": [{"response": [], "summary": []}]}"#).unwrap();
        assert!(matches!(
            Answer::from_response(&response),
            Err(TubeTalkError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        assert!(matches!(
            QueryResponse::from_body(r#"{"status": [{"code": "BAD_REQUEST"}]}"#),
            Err(TubeTalkError::MalformedResponse(_))
        ));
        assert!(matches!(
            QueryResponse::from_body("not json"),
            Err(TubeTalkError::MalformedResponse(_))
        ));
    }
}
