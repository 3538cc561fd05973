use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use thiserror::Error;

/// Path of an FAQ document relative to the content root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error)]
pub enum DocumentIdError {
    #[error("Source path is outside the content root")]
    OutsideRoot,
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl DocumentId {
    /// Create a DocumentId from a source path and the content root it was found in.
    pub fn from_path(root: &Path, source: &Path) -> Result<Self, DocumentIdError> {
        let rel = source
            .strip_prefix(root)
            .map_err(|_| DocumentIdError::OutsideRoot)?;

        let normalized = normalize_path(rel)?;

        Ok(DocumentId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn normalize_path(path: &Path) -> Result<String, DocumentIdError> {
    let s = path.to_str().ok_or(DocumentIdError::InvalidUtf8)?;

    let normalized = s
        .replace('\\', "/")
        .trim_start_matches("./")
        .to_lowercase();

    Ok(normalized)
}

/// Content hash of a single document's raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        DocumentVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fingerprint of a whole corpus.
///
/// Hashes every record's question, answer, category and source in corpus
/// order, so two corpora share a version exactly when they hold the same
/// records in the same order. Reformatting a document without changing its
/// records keeps the version. Callers that keep a corpus across requests can
/// key their cache on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusVersion(String);

impl CorpusVersion {
    pub(crate) fn from_hasher(hasher: Sha256) -> Self {
        CorpusVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
