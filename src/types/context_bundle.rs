use serde::Serialize;

use crate::corpus::FaqRecord;

/// A normalized query.
/// Normalization rules:
/// - Lowercase
/// - Split on single spaces (empty terms are kept; the scorer decides)
/// - No punctuation stripping, no stemming
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub normalized: String,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.to_lowercase();
        let terms = normalized.split(' ').map(|s| s.to_string()).collect();

        Self {
            raw,
            normalized,
            terms,
        }
    }

    /// True when the query carries no searchable text at all.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// A record chosen for the context block.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct SelectedRecord {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub source: String,

    pub score: f32,

    pub why: SelectionWhy,
}

impl SelectedRecord {
    /// `Q: <question>\nA: <answer>`
    pub fn to_block(&self) -> String {
        format!("Q: {}\nA: {}", self.question, self.answer)
    }
}

/// Explanation for why a record received its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct SelectionWhy {
    pub query_terms: Vec<String>,
    pub phrase_in_question: bool,
    pub phrase_in_answer: bool,
    pub question_term_matches: usize,
    pub answer_term_matches: usize,
}

/// Metadata describing the outcome of the selection process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct SelectionMetadata {
    pub query: String,

    pub records_considered: usize,
    pub records_above_threshold: usize,
    pub records_selected: usize,
}

/// The final result of a context resolution operation.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct SelectionResult {
    pub records: Vec<SelectedRecord>,
    pub selection: SelectionMetadata,
}

/// What the answering collaborator should do with a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grounding {
    /// Answer strictly from this context block.
    Context(String),
    /// Nothing relevant is known; offer the human handoff.
    Fallback,
}

impl SelectionResult {
    /// Render the selected records as one context block, blank-line separated.
    /// Empty when nothing cleared the noise threshold.
    pub fn context(&self) -> String {
        self.records
            .iter()
            .map(SelectedRecord::to_block)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn grounding(&self) -> Grounding {
        if self.is_empty() {
            Grounding::Fallback
        } else {
            Grounding::Context(self.context())
        }
    }
}

/// Internal: A record that has been scored but not yet selected.
/// Borrows the corpus record to avoid cloning text prematurely.
#[derive(Debug, Clone)]
pub struct ScoredRecord<'a> {
    pub record: &'a FaqRecord,

    pub score: f32,
    pub score_details: ScoreDetails,
}

/// Internal: Detailed scoring components before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDetails {
    pub query_terms: Vec<String>,
    pub phrase_in_question: bool,
    pub phrase_in_answer: bool,
    pub question_term_matches: usize,
    pub answer_term_matches: usize,
}
