pub mod cutoff;
pub mod ranking;

use std::cmp::Ordering;

use tracing::debug;

use crate::corpus::Corpus;
use crate::types::context_bundle::{Query, ScoredRecord, SelectionMetadata, SelectionResult};
pub use crate::types::context_bundle::Grounding;
pub use cutoff::{apply_cutoff, CutoffResult, NOISE_THRESHOLD, TOP_K};
pub use ranking::{LexicalScorer, Scorer};

pub struct ContextSelector<S> {
	scorer: S,
}

impl Default for ContextSelector<LexicalScorer> {
	fn default() -> Self {
		Self {
			scorer: LexicalScorer::default(),
		}
	}
}

impl<S> ContextSelector<S>
where
	S: Scorer,
{
	pub fn new(scorer: S) -> Self {
		Self { scorer }
	}

	pub fn select(&self, corpus: &Corpus, query: Query) -> SelectionResult {
		// 0. A blank query carries nothing to match; it never produces context
		if query.is_blank() {
			debug!(records = corpus.len(), "blank query, no context");
			return SelectionResult {
				records: Vec::new(),
				selection: SelectionMetadata {
					query: query.raw,
					records_considered: corpus.len(),
					records_above_threshold: 0,
					records_selected: 0,
				},
			};
		}

		// 1. Scoring Phase
		let mut scored: Vec<ScoredRecord> = corpus
			.iter()
			.map(|record| {
				let details = self.scorer.score(record, &query);
				let score = self.scorer.score_value(&details);
				ScoredRecord {
					record,
					score,
					score_details: details,
				}
			})
			.collect();

		// 2. Ordering Phase
		// Score descending; sort_by is stable, so corpus order breaks ties
		scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

		debug_assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

		// 3. Cutoff Phase
		let CutoffResult {
			selected,
			records_above_threshold,
		} = apply_cutoff(scored, NOISE_THRESHOLD, TOP_K);

		let metadata = SelectionMetadata {
			query: query.raw,
			records_considered: corpus.len(),
			records_above_threshold,
			records_selected: selected.len(),
		};

		debug!(
			considered = metadata.records_considered,
			above_threshold = metadata.records_above_threshold,
			selected = metadata.records_selected,
			"context selected"
		);

		SelectionResult {
			records: selected,
			selection: metadata,
		}
	}
}

/// Score `text` against `corpus` with the v0 heuristic and render the context
/// block. An empty string means nothing relevant was found.
pub fn query(corpus: &Corpus, text: &str) -> String {
	ContextSelector::<LexicalScorer>::default()
		.select(corpus, Query::new(text))
		.context()
}
