use crate::evaluators::{AnalysisContext, Evaluator};
use crate::parsers::text::word_count;
use crate::results::{Category, Checks, RuleResult, Status};
use crate::utils::round_to;

/// Flesch Reading Ease at or above this is "good"
const GOOD_READING_EASE: f64 = 70.0;

/// Paragraphs longer than this many words are flagged
const MAX_PARAGRAPH_WORDS: usize = 150;

/// Sentences longer than this many words are flagged
const MAX_SENTENCE_WORDS: usize = 25;

/// Scores how easy the content is to read
pub struct ReadabilityEvaluator;

impl Evaluator for ReadabilityEvaluator {
    fn category(&self) -> Category {
        Category::Readability
    }

    fn description(&self) -> &str {
        "Computes Flesch Reading Ease and flags long paragraphs and sentences"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks> {
        let snapshot = ctx.snapshot;
        let words_per_sentence = snapshot.words_per_sentence();
        let syllables_per_word = snapshot.syllables_per_word();

        let mut checks = Checks::new();
        checks.insert(
            "score".to_string(),
            check_reading_ease(
                words_per_sentence,
                syllables_per_word,
                ctx.settings.min_readability_score,
            ),
        );

        let long_paragraphs = snapshot
            .paragraphs
            .iter()
            .filter(|p| word_count(p) > MAX_PARAGRAPH_WORDS)
            .count();
        checks.insert(
            "paragraph_length".to_string(),
            check_paragraph_length(long_paragraphs),
        );

        let long_sentences = snapshot
            .sentences
            .iter()
            .filter(|s| word_count(s) > MAX_SENTENCE_WORDS)
            .count();
        checks.insert(
            "sentence_length".to_string(),
            check_sentence_length(long_sentences),
        );

        Some(checks)
    }
}

/// Flesch Reading Ease, clamped to `[0, 100]`
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    (206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word).clamp(0.0, 100.0)
}

/// Flesch-Kincaid grade level, never below zero
pub fn flesch_kincaid_grade(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    (0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59).max(0.0)
}

fn check_reading_ease(
    words_per_sentence: f64,
    syllables_per_word: f64,
    min_readability_score: f64,
) -> RuleResult {
    let score = flesch_reading_ease(words_per_sentence, syllables_per_word);
    let grade = flesch_kincaid_grade(words_per_sentence, syllables_per_word);

    let result = if score < min_readability_score {
        RuleResult::new(
            Status::Warning,
            format!(
                "The Flesch Reading Ease score is {:.1}, which is difficult to read. Use shorter sentences and simpler words.",
                score
            ),
        )
    } else if score >= GOOD_READING_EASE {
        RuleResult::new(
            Status::Good,
            format!(
                "The Flesch Reading Ease score is {:.1}, which is easy to read.",
                score
            ),
        )
    } else {
        RuleResult::new(
            Status::Ok,
            format!(
                "The Flesch Reading Ease score is {:.1}, which is fairly readable.",
                score
            ),
        )
    };

    result
        .with("score", round_to(score, 1))
        .with("grade_level", round_to(grade, 1))
        .with("words_per_sentence", round_to(words_per_sentence, 2))
        .with("syllables_per_word", round_to(syllables_per_word, 2))
}

fn check_paragraph_length(long_paragraphs: usize) -> RuleResult {
    let result = if long_paragraphs > 0 {
        RuleResult::new(
            Status::Warning,
            format!(
                "{} paragraph(s) are longer than {} words. Break them up.",
                long_paragraphs, MAX_PARAGRAPH_WORDS
            ),
        )
    } else {
        RuleResult::new(Status::Good, "Paragraph lengths are fine.")
    };
    result.with("count", long_paragraphs)
}

fn check_sentence_length(long_sentences: usize) -> RuleResult {
    let result = if long_sentences > 0 {
        RuleResult::new(
            Status::Warning,
            format!(
                "{} sentence(s) are longer than {} words. Consider shortening them.",
                long_sentences, MAX_SENTENCE_WORDS
            ),
        )
    } else {
        RuleResult::new(Status::Good, "Sentence lengths are fine.")
    };
    result.with("count", long_sentences)
}
