pub mod context_bundle;
pub mod identifiers;

pub use context_bundle::{
    Grounding, Query, ScoreDetails, ScoredRecord, SelectedRecord, SelectionMetadata,
    SelectionResult, SelectionWhy,
};
pub use identifiers::{CorpusVersion, DocumentId, DocumentIdError, DocumentVersion};
