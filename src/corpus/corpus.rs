// Immutable once built:
// no mutation
// no "update" methods
// rebuilt per load

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::corpus::record::{FaqRecord, DEFAULT_CATEGORY};
use crate::document::Document;
use crate::types::identifiers::CorpusVersion;

/// Ordered FAQ records available to one query.
///
/// Order is document order, then section order within a document. The
/// matcher relies on it as the tie-break between equal scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Corpus {
    records: Vec<FaqRecord>,
    version: CorpusVersion,
}

impl Corpus {
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn from_records(records: Vec<FaqRecord>) -> Self {
        let version = fingerprint(&records);
        Self { records, version }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> &CorpusVersion {
        &self.version
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a FaqRecord;
    type IntoIter = std::slice::Iter<'a, FaqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Index in-memory documents into a corpus, `General` as the fallback category.
pub fn index(documents: &[Document]) -> Corpus {
    index_with_category(documents, DEFAULT_CATEGORY)
}

pub(crate) fn index_with_category(documents: &[Document], default_category: &str) -> Corpus {
    let records = documents
        .iter()
        .flat_map(|doc| document_records(doc, default_category))
        .collect();

    Corpus::from_records(records)
}

/// Records contributed by one document, in section order.
/// Sections with an empty heading or body contribute nothing.
pub(crate) fn document_records(doc: &Document, default_category: &str) -> Vec<FaqRecord> {
    let category = doc
        .metadata
        .category()
        .unwrap_or_else(|| default_category.to_string());

    doc.sections()
        .into_iter()
        .filter_map(|section| FaqRecord::new(&section.heading, &section.body))
        .map(|record| {
            record
                .with_category(category.clone())
                .with_source(doc.id.clone())
        })
        .collect()
}

// Hash every field the matcher output can depend on, in corpus order.
fn fingerprint(records: &[FaqRecord]) -> CorpusVersion {
    let mut hasher = Sha256::new();

    for record in records {
        hasher.update(record.question().as_bytes());
        hasher.update([0u8]);
        hasher.update(record.answer().as_bytes());
        hasher.update([0u8]);
        hasher.update(record.category().as_bytes());
        hasher.update([0u8]);
        if let Some(source) = record.source() {
            hasher.update(source.as_str().as_bytes());
        }
        hasher.update(b"\n");
    }

    CorpusVersion::from_hasher(hasher)
}
