//! Index request construction.

use crate::chunking::MergedSection;
use crate::config::Credentials;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Body of a `POST /v1/core/index` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexRequest {
    pub customer_id: String,
    pub corpus_id: String,
    pub document: IndexDocument,
}

/// A whole video, one part per merged section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexDocument {
    pub document_id: String,
    pub parts: Vec<DocumentPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPart {
    pub text: String,
    /// JSON-encoded [`PartMetadata`], as the API expects a string here.
    pub metadata_json: String,
}

/// Timing metadata attached to each part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartMetadata {
    pub start_time: String,
    pub end_time: String,
}

impl DocumentPart {
    pub fn from_section(section: &MergedSection) -> Result<Self> {
        let metadata = PartMetadata {
            start_time: section.start_time(),
            end_time: section.end_time(),
        };

        Ok(Self {
            text: section.text.clone(),
            metadata_json: serde_json::to_string(&metadata)?,
        })
    }

    pub fn metadata(&self) -> Result<PartMetadata> {
        Ok(serde_json::from_str(&self.metadata_json)?)
    }
}

/// Build the request indexing `sections` as document `document_id`.
pub fn build_index_request(
    credentials: &Credentials,
    document_id: &str,
    sections: &[MergedSection],
) -> Result<IndexRequest> {
    let parts = sections
        .iter()
        .map(DocumentPart::from_section)
        .collect::<Result<Vec<_>>>()?;

    Ok(IndexRequest {
        customer_id: credentials.customer_id.clone(),
        corpus_id: credentials.corpus_id.clone(),
        document: IndexDocument {
            document_id: document_id.to_string(),
            parts,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn credentials() -> Credentials {
        Credentials {
            customer_id: "1234".into(),
            corpus_id: "5".into(),
            api_key: "key".into(),
        }
    }

    fn sections() -> Vec<MergedSection> {
        vec![
            MergedSection::new(Duration::from_secs(0), Duration::from_millis(2500), "first part"),
            MergedSection::new(Duration::from_millis(2500), Duration::from_secs(61), "second part"),
            MergedSection::new(Duration::from_secs(61), Duration::from_secs(3600), "third part"),
        ]
    }

    #[test]
    fn test_one_part_per_section() {
        let request = build_index_request(&credentials(), "https://youtu.be/abc", &sections()).unwrap();

        assert_eq!(request.customer_id, "1234");
        assert_eq!(request.corpus_id, "5");
        assert_eq!(request.document.document_id, "https://youtu.be/abc");
        assert_eq!(request.document.parts.len(), 3);
        assert_eq!(request.document.parts[1].text, "second part");

        for part in &request.document.parts {
            let meta = part.metadata().unwrap();
            assert!(!meta.start_time.is_empty());
            assert!(!meta.end_time.is_empty());
            assert_ne!(meta.start_time, meta.end_time);
        }
    }

    #[test]
    fn test_metadata_encoding() {
        let request = build_index_request(&credentials(), "vid", &sections()).unwrap();
        assert_eq!(
            request.document.parts[0].metadata_json,
            r#"{"start_time":"0:00:00","end_time":"0:00:02.500000"}"#
        );
        assert_eq!(
            request.document.parts[2].metadata().unwrap(),
            PartMetadata {
                start_time: "0:01:01".into(),
                end_time: "1:00:00".into(),
            }
        );
    }

    #[test]
    fn test_wire_shape() {
        let request = build_index_request(&credentials(), "vid", &sections()[..1]).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["customer_id"], "1234");
        assert_eq!(json["corpus_id"], "5");
        assert_eq!(json["document"]["document_id"], "vid");
        assert_eq!(json["document"]["parts"][0]["text"], "first part");
        assert!(json["document"]["parts"][0]["metadata_json"].is_string());
    }

    #[test]
    fn test_no_sections() {
        let request = build_index_request(&credentials(), "vid", &[]).unwrap();
        assert!(request.document.parts.is_empty());
    }
}
