use crate::evaluators::{AnalysisContext, Evaluator};
use crate::results::{Category, Checks, RuleResult, Status};

/// Checks the content against the minimum recommended word count
pub struct ContentLengthEvaluator;

impl Evaluator for ContentLengthEvaluator {
    fn category(&self) -> Category {
        Category::Content
    }

    fn description(&self) -> &str {
        "Checks that the content meets the recommended word count"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks> {
        let mut checks = Checks::new();
        checks.insert(
            "length".to_string(),
            check_length(ctx.snapshot.word_count, ctx.settings.min_content_length),
        );
        Some(checks)
    }
}

/// Warning below the minimum, good at or above it.
///
/// At one and a half times the minimum the message says so, the status
/// stays good.
pub fn check_length(word_count: usize, min_content_length: usize) -> RuleResult {
    let result = if word_count < min_content_length {
        RuleResult::new(
            Status::Warning,
            format!(
                "The content is {} words long, below the recommended minimum of {} words. Add more content.",
                word_count, min_content_length
            ),
        )
    } else if word_count as f64 >= min_content_length as f64 * 1.5 {
        RuleResult::new(
            Status::Good,
            format!(
                "Excellent! The content is {} words long, well above the recommended minimum of {} words.",
                word_count, min_content_length
            ),
        )
    } else {
        RuleResult::new(
            Status::Good,
            format!(
                "The content is {} words long, meeting the recommended minimum of {} words.",
                word_count, min_content_length
            ),
        )
    };

    result
        .with("word_count", word_count)
        .with("recommended", min_content_length)
}
