use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::corpus::corpus::{document_records, Corpus};
use crate::corpus::versioning::{
    CorpusManifest, LoaderConfig, ManifestDocumentEntry, SkippedDocument, UnreadablePolicy,
};
use crate::document::{Document, Metadata};
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read content directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot load document {}: {reason}", .path.display())]
    Document { path: PathBuf, reason: String },
    #[error("Invalid loader configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// A corpus together with the account of how it was loaded.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub manifest: CorpusManifest,
}

/// Reads a directory of FAQ documents into a [`Corpus`].
///
/// Single-threaded, read-only, and stateless between calls: every load
/// rebuilds the corpus from disk.
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader {
    config: LoaderConfig,
}

impl CorpusLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn from_config_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self::new(LoaderConfig::from_json(json)?))
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn load(&self, dir: &Path) -> Result<Corpus, LoadError> {
        self.load_with_manifest(dir).map(|loaded| loaded.corpus)
    }

    pub fn load_with_manifest(&self, dir: &Path) -> Result<LoadedCorpus, LoadError> {
        // No content directory means no knowledge base is configured.
        if !dir.exists() {
            debug!(dir = %dir.display(), "content directory missing, using empty corpus");
            return Ok(self.finish(Vec::new(), Vec::new()));
        }

        // 1. Enumerate candidate files, sorted by name so listing order is stable
        let mut files = Vec::new();
        let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| LoadError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.accepts(&name) || !path.is_file() {
                continue;
            }
            files.push((name, path));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        // 2. Ingest each file, applying the unreadable-file policy
        let mut documents = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();
        for (name, path) in files {
            match ingest_file(dir, &path) {
                Ok(doc) => documents.push(doc),
                Err(reason) => match self.config.on_unreadable {
                    UnreadablePolicy::Fail => {
                        return Err(LoadError::Document { path, reason });
                    }
                    UnreadablePolicy::Skip => {
                        warn!(file = %name, %reason, "skipping unreadable FAQ document");
                        skipped.push(SkippedDocument { file: name, reason });
                    }
                },
            }
        }

        Ok(self.finish(documents, skipped))
    }

    /// Index already-ingested documents under this loader's configuration.
    pub fn index(&self, documents: &[Document]) -> Corpus {
        crate::corpus::corpus::index_with_category(documents, &self.config.default_category)
    }

    fn finish(&self, documents: Vec<Document>, skipped: Vec<SkippedDocument>) -> LoadedCorpus {
        let mut records = Vec::new();
        let mut entries = Vec::with_capacity(documents.len());

        for doc in &documents {
            let doc_records = document_records(doc, &self.config.default_category);
            debug!(
                document = doc.id.as_str(),
                records = doc_records.len(),
                "indexed FAQ document"
            );
            entries.push(ManifestDocumentEntry {
                id: doc.id.clone(),
                version: doc.version.clone(),
                records: doc_records.len(),
            });
            records.extend(doc_records);
        }

        let corpus = Corpus::from_records(records);

        // Note: loaded_at is strictly informational
        let manifest = CorpusManifest {
            corpus_version: corpus.version().clone(),
            loader_config: self.config.clone(),
            loaded_at: Utc::now(),
            document_count: entries.len(),
            record_count: corpus.len(),
            documents: entries,
            skipped,
        };

        debug!(
            corpus_version = manifest.corpus_version.as_str(),
            documents = manifest.document_count,
            records = manifest.record_count,
            skipped = manifest.skipped.len(),
            "corpus loaded"
        );

        LoadedCorpus { corpus, manifest }
    }
}

fn ingest_file(root: &Path, path: &Path) -> Result<Document, String> {
    let id = DocumentId::from_path(root, path).map_err(|e| e.to_string())?;
    let raw = fs::read(path).map_err(|e| e.to_string())?;

    Document::ingest(
        id,
        path.display().to_string(),
        raw,
        Metadata::default(),
    )
    .map_err(|e| e.to_string())
}
