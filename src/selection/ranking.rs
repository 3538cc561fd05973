use crate::corpus::FaqRecord;
use crate::types::context_bundle::{Query, ScoreDetails};

/// Whole query found in the question.
pub const PHRASE_IN_QUESTION_WEIGHT: f32 = 10.0;
/// Whole query found in the answer.
pub const PHRASE_IN_ANSWER_WEIGHT: f32 = 5.0;
/// Per query term found in the question.
pub const TERM_IN_QUESTION_WEIGHT: f32 = 1.0;
/// Per query term found in the answer.
pub const TERM_IN_ANSWER_WEIGHT: f32 = 0.5;

pub trait Scorer {
    fn score(&self, record: &FaqRecord, query: &Query) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f32 {
        let mut score = 0.0;
        if details.phrase_in_question {
            score += PHRASE_IN_QUESTION_WEIGHT;
        }
        if details.phrase_in_answer {
            score += PHRASE_IN_ANSWER_WEIGHT;
        }
        score += details.question_term_matches as f32 * TERM_IN_QUESTION_WEIGHT;
        score += details.answer_term_matches as f32 * TERM_IN_ANSWER_WEIGHT;
        debug_assert!(score >= 0.0, "score {score} is negative");
        score
    }
}

/// v0: lower-cased substring matching of the whole query and of each term.
///
/// Terms come from splitting the query on single spaces, so repeated,
/// leading or trailing spaces yield empty terms. An empty term is a
/// substring of everything; the default scorer skips them, while
/// [`LexicalScorer::faithful`] counts them like any other term.
#[derive(Debug, Clone, Copy)]
pub struct LexicalScorer {
    skip_empty_terms: bool,
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self {
            skip_empty_terms: true,
        }
    }
}

impl LexicalScorer {
    /// Scores empty terms as matches, as the heuristic did before the guard.
    pub fn faithful() -> Self {
        Self {
            skip_empty_terms: false,
        }
    }

    pub fn skips_empty_terms(&self) -> bool {
        self.skip_empty_terms
    }
}

impl Scorer for LexicalScorer {
    fn score(&self, record: &FaqRecord, query: &Query) -> ScoreDetails {
        let question = record.question().to_lowercase();
        let answer = record.answer().to_lowercase();

        let mut question_term_matches = 0;
        let mut answer_term_matches = 0;
        // Repeated terms count once per repetition.
        for term in &query.terms {
            if self.skip_empty_terms && term.is_empty() {
                continue;
            }
            if question.contains(term.as_str()) {
                question_term_matches += 1;
            }
            if answer.contains(term.as_str()) {
                answer_term_matches += 1;
            }
        }

        let phrase = query.normalized.as_str();
        let check_phrase = !(self.skip_empty_terms && phrase.is_empty());

        ScoreDetails {
            query_terms: query.terms.clone(),
            phrase_in_question: check_phrase && question.contains(phrase),
            phrase_in_answer: check_phrase && answer.contains(phrase),
            question_term_matches,
            answer_term_matches,
        }
    }
}
