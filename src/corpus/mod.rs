pub mod corpus;
pub mod loader;
pub mod record;
pub mod versioning;

pub use corpus::{index, Corpus};
pub use loader::{CorpusLoader, LoadError, LoadedCorpus};
pub use record::{FaqRecord, DEFAULT_CATEGORY};
pub use versioning::{
    CorpusManifest, LoaderConfig, ManifestDocumentEntry, SkippedDocument, UnreadablePolicy,
};
