//! Deterministic FAQ retrieval for grounding LLM answers.
//!
//! `faq-context` loads a directory of markdown FAQ documents into an in-memory
//! corpus of question/answer records, scores those records against a
//! natural-language query with a small lexical heuristic, and renders the top
//! matches as a context block. Identical inputs always produce identical
//! outputs.
//!
//! ```no_run
//! use std::path::Path;
//! use faq_context::corpus::CorpusLoader;
//!
//! let corpus = CorpusLoader::default().load(Path::new("src/content/faqs"))?;
//! let context = faq_context::query(&corpus, "reset password");
//! if context.is_empty() {
//!     // offer the human handoff
//! }
//! # Ok::<(), faq_context::corpus::LoadError>(())
//! ```

pub mod corpus;
pub mod document;
pub mod selection;
pub mod types;

pub use corpus::{index, Corpus, CorpusLoader, FaqRecord};
pub use selection::{query, ContextSelector, Grounding};
