use serde::Serialize;

use crate::types::identifiers::DocumentId;

/// Category given to records whose document declares none.
pub const DEFAULT_CATEGORY: &str = "General";

/// One question/answer pair.
///
/// Question and answer are trimmed and never empty: the constructor refuses
/// to build a record that would violate that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqRecord {
    question: String,
    answer: String,
    category: String,
    source: Option<DocumentId>,
}

impl FaqRecord {
    pub fn new(question: impl AsRef<str>, answer: impl AsRef<str>) -> Option<Self> {
        let question = question.as_ref().trim();
        let answer = answer.as_ref().trim();

        if question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            source: None,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_source(mut self, source: DocumentId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn source(&self) -> Option<&DocumentId> {
        self.source.as_ref()
    }
}
