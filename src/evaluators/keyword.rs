use crate::evaluators::{AnalysisContext, Evaluator};
use crate::results::{Category, Checks, RuleResult, Status};
use crate::utils::{contains_ignore_case, count_occurrences, round_to, safe_ratio};

/// Checks placement and density of the focus keyword.
///
/// Only applies when a focus keyword is set.
pub struct KeywordEvaluator;

impl Evaluator for KeywordEvaluator {
    fn category(&self) -> Category {
        Category::Keyword
    }

    fn description(&self) -> &str {
        "Checks focus keyword placement in title, intro, excerpt, URL and headings, and its density"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks> {
        let keyword = ctx.input.keyword()?;
        let snapshot = ctx.snapshot;
        let mut checks = Checks::new();

        checks.insert("title".to_string(), check_title(&ctx.input.title, keyword));

        checks.insert(
            "first_paragraph".to_string(),
            check_first_paragraph(snapshot.first_paragraph(), keyword),
        );

        if let Some(excerpt) = ctx.input.excerpt() {
            checks.insert("excerpt".to_string(), check_excerpt(excerpt, keyword));
        }

        checks.insert("url".to_string(), check_slug(&ctx.input.slug(), keyword));

        let occurrences = count_occurrences(&snapshot.plain_text, keyword);
        checks.insert(
            "density".to_string(),
            check_density(
                occurrences,
                snapshot.word_count,
                ctx.settings.min_keyword_density,
                ctx.settings.max_keyword_density,
            ),
        );

        let in_headings = snapshot
            .headings
            .iter()
            .filter(|h| contains_ignore_case(&h.text, keyword))
            .count();
        checks.insert("headings".to_string(), check_headings(in_headings));

        Some(checks)
    }
}

fn check_title(title: &str, keyword: &str) -> RuleResult {
    if contains_ignore_case(title, keyword) {
        RuleResult::new(Status::Good, "The focus keyword appears in the title.")
    } else {
        RuleResult::new(
            Status::Warning,
            "The focus keyword does not appear in the title. Consider adding it.",
        )
    }
}

fn check_first_paragraph(paragraph: Option<&str>, keyword: &str) -> RuleResult {
    if paragraph.is_some_and(|p| contains_ignore_case(p, keyword)) {
        RuleResult::new(Status::Good, "The focus keyword appears in the first paragraph.")
    } else {
        RuleResult::new(
            Status::Warning,
            "The focus keyword does not appear in the first paragraph. Mention it early in the content.",
        )
    }
}

fn check_excerpt(excerpt: &str, keyword: &str) -> RuleResult {
    if contains_ignore_case(excerpt, keyword) {
        RuleResult::new(Status::Good, "The focus keyword appears in the excerpt.")
    } else {
        RuleResult::new(
            Status::Warning,
            "The focus keyword does not appear in the excerpt.",
        )
    }
}

/// The slug must contain the keyword with spaces turned into hyphens
fn check_slug(slug: &str, keyword: &str) -> RuleResult {
    let keyword_slug = keyword.to_lowercase().replace(' ', "-");
    if slug.to_lowercase().contains(&keyword_slug) {
        RuleResult::new(Status::Good, "The focus keyword appears in the URL.")
    } else {
        RuleResult::new(
            Status::Warning,
            "The focus keyword does not appear in the URL. Consider including it in the slug.",
        )
    }
}

/// Occurrences per hundred words, zero for empty content
pub fn keyword_density(occurrences: usize, word_count: usize) -> f64 {
    safe_ratio(100.0 * occurrences as f64, word_count as f64)
}

pub fn check_density(occurrences: usize, word_count: usize, min: f64, max: f64) -> RuleResult {
    let density = keyword_density(occurrences, word_count);

    let result = if density < min {
        RuleResult::new(
            Status::Warning,
            format!(
                "The keyword density is {:.2}%, below the recommended minimum of {}%. Use the focus keyword more often.",
                density, min
            ),
        )
    } else if density > max {
        RuleResult::new(
            Status::Warning,
            format!(
                "The keyword density is {:.2}%, above the recommended maximum of {}%. Avoid keyword stuffing.",
                density, max
            ),
        )
    } else {
        RuleResult::new(
            Status::Good,
            format!(
                "The keyword density is {:.2}%, within the recommended range of {}% to {}%.",
                density, min, max
            ),
        )
    };

    result
        .with("density", round_to(density, 2))
        .with("occurrences", occurrences)
}

fn check_headings(count: usize) -> RuleResult {
    if count > 0 {
        RuleResult::new(
            Status::Good,
            format!("The focus keyword appears in {} heading(s).", count),
        )
        .with("count", count)
    } else {
        RuleResult::new(
            Status::Warning,
            "The focus keyword does not appear in any heading. Use it in at least one subheading.",
        )
        .with("count", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisSettings;
    use crate::evaluators::run_single;
    use crate::input::AnalysisInput;

    #[test]
    fn test_no_keyword_means_no_category() {
        let input = AnalysisInput::new("<p>Some text.</p>", "Title");
        assert!(run_single(&KeywordEvaluator, &input, &AnalysisSettings::default()).is_none());

        let input = input.with_focus_keyword("  ");
        assert!(run_single(&KeywordEvaluator, &input, &AnalysisSettings::default()).is_none());
    }

    #[test]
    fn test_placement_checks() {
        let input = AnalysisInput::new(
            "<p>Rust tooling is great.</p>\n<h2>Why rust tooling wins</h2>\n<p>More text.</p>",
            "A Guide to Rust Tooling",
        )
        .with_focus_keyword("rust tooling");
        let checks = run_single(&KeywordEvaluator, &input, &AnalysisSettings::default()).unwrap();

        assert_eq!(checks["title"].status, Status::Good);
        assert_eq!(checks["first_paragraph"].status, Status::Good);
        assert_eq!(checks["url"].status, Status::Good);
        assert_eq!(checks["headings"].status, Status::Good);
        assert_eq!(checks["headings"].detail("count"), Some(&1.into()));
        // No excerpt, no excerpt check
        assert!(!checks.contains_key("excerpt"));
    }

    #[test]
    fn test_missing_placements_warn() {
        let input = AnalysisInput::new("<p>Nothing relevant.</p>", "Unrelated")
            .with_excerpt("Also unrelated")
            .with_slug("unrelated")
            .with_focus_keyword("rust");
        let checks = run_single(&KeywordEvaluator, &input, &AnalysisSettings::default()).unwrap();

        assert_eq!(checks["title"].status, Status::Warning);
        assert_eq!(checks["first_paragraph"].status, Status::Warning);
        assert_eq!(checks["excerpt"].status, Status::Warning);
        assert_eq!(checks["url"].status, Status::Warning);
        assert_eq!(checks["headings"].status, Status::Warning);
        assert_eq!(checks["density"].status, Status::Warning);
    }

    #[test]
    fn test_density_bounds() {
        assert_eq!(check_density(3, 300, 1.0, 3.0).status, Status::Good);
        assert_eq!(check_density(2, 300, 1.0, 3.0).status, Status::Warning);
        assert_eq!(check_density(9, 300, 1.0, 3.0).status, Status::Good);
        assert_eq!(check_density(10, 300, 1.0, 3.0).status, Status::Warning);

        let result = check_density(2, 300, 1.0, 3.0);
        assert_eq!(result.detail("density"), Some(&0.67.into()));
        assert_eq!(result.detail("occurrences"), Some(&2.into()));
    }

    #[test]
    fn test_density_zero_words() {
        assert_eq!(keyword_density(0, 0), 0.0);
        assert_eq!(keyword_density(5, 0), 0.0);
        assert_eq!(check_density(0, 0, 1.0, 3.0).detail("density"), Some(&0.0.into()));
    }
}
