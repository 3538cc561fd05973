use crate::types::context_bundle::{ScoredRecord, SelectedRecord, SelectionWhy};

/// Exclusive minimum score a record needs to count as relevant.
pub const NOISE_THRESHOLD: f32 = 1.0;
/// Maximum number of records in one context block.
pub const TOP_K: usize = 3;

pub struct CutoffResult {
    pub selected: Vec<SelectedRecord>,
    pub records_above_threshold: usize,
}

/// Keep records scoring strictly above `threshold`, then the first `top_k`
/// of those. Input must already be in final rank order.
pub fn apply_cutoff(scored: Vec<ScoredRecord>, threshold: f32, top_k: usize) -> CutoffResult {
    let relevant: Vec<ScoredRecord> = scored
        .into_iter()
        .filter(|srec| srec.score > threshold)
        .collect();
    let records_above_threshold = relevant.len();

    let selected = relevant
        .into_iter()
        .take(top_k)
        .map(|srec| SelectedRecord {
            question: srec.record.question().to_string(),
            answer: srec.record.answer().to_string(),
            category: srec.record.category().to_string(),
            source: srec
                .record
                .source()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
            score: srec.score,
            why: SelectionWhy {
                query_terms: srec.score_details.query_terms,
                phrase_in_question: srec.score_details.phrase_in_question,
                phrase_in_answer: srec.score_details.phrase_in_answer,
                question_term_matches: srec.score_details.question_term_matches,
                answer_term_matches: srec.score_details.answer_term_matches,
            },
        })
        .collect();

    CutoffResult {
        selected,
        records_above_threshold,
    }
}
