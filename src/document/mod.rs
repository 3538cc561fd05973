pub mod document;
pub mod metadata;
pub mod parser;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::{Document, DocumentError};
pub use metadata::{Metadata, MetadataValue};
pub use parser::Section;
