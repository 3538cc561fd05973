use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::corpus::record::DEFAULT_CATEGORY;
use crate::types::identifiers::{CorpusVersion, DocumentId, DocumentVersion};

/// What the loader does with a content file it cannot read or decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreadablePolicy {
    /// Log, record the file in the manifest, keep loading.
    #[default]
    Skip,
    /// Abort the whole load.
    Fail,
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub version: String,
    /// File name suffixes accepted as content files, matched case-sensitively.
    pub extensions: Vec<String>,
    pub default_category: String,
    #[serde(default)]
    pub on_unreadable: UnreadablePolicy,
}

impl LoaderConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            extensions: vec![".md".into(), ".mdx".into()],
            default_category: DEFAULT_CATEGORY.into(),
            on_unreadable: UnreadablePolicy::Skip,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocumentEntry {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub file: String,
    pub reason: String,
}

/// Account of one directory load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusManifest {
    pub corpus_version: CorpusVersion,
    pub loader_config: LoaderConfig,
    pub loaded_at: DateTime<Utc>, // informational only
    pub document_count: usize,
    pub record_count: usize,
    pub documents: Vec<ManifestDocumentEntry>,
    pub skipped: Vec<SkippedDocument>,
}
