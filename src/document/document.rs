use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::metadata::Metadata;
use super::parser::{self, Section};
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One FAQ source file: front-matter metadata plus a markdown body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub source: String,
    /// Full raw text, front-matter included.
    pub content: String,
    /// Text following the front-matter block.
    pub body: String,
    pub metadata: Metadata,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// This is the ONLY way to construct a Document. The version hashes the
    /// raw content, so metadata supplied by the caller never changes it.
    /// Caller metadata overrides keys read from the front-matter.
    pub fn ingest(
        id: DocumentId,
        source: String,
        raw_content: Vec<u8>,
        metadata: Metadata,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        let version = DocumentVersion::from_content(content.as_bytes());

        let (mut extracted, body) = parser::split_front_matter(&content);
        let body = body.to_string();
        extracted.merge(metadata);

        Ok(Document {
            id,
            version,
            source,
            content,
            body,
            metadata: extracted,
        })
    }

    /// Sections of the body in textual order.
    pub fn sections(&self) -> Vec<Section> {
        parser::split_sections(&self.body)
    }
}
