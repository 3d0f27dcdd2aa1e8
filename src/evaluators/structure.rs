use crate::evaluators::{AnalysisContext, Evaluator};
use crate::parsers::{HeadingInfo, MetricSnapshot};
use crate::results::{Category, Checks, RuleResult, Status};

/// Fewer `<p>` tags than this is a warning
const MIN_PARAGRAPH_TAGS: usize = 3;

/// Checks headings, paragraph markup and lists
pub struct StructureEvaluator;

impl Evaluator for StructureEvaluator {
    fn category(&self) -> Category {
        Category::Structure
    }

    fn description(&self) -> &str {
        "Checks heading hierarchy, paragraph markup and use of lists"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks> {
        let snapshot = ctx.snapshot;
        let mut checks = Checks::new();
        checks.insert("headings".to_string(), check_headings(&snapshot.headings));
        checks.insert("paragraphs".to_string(), check_paragraphs(snapshot));
        checks.insert("lists".to_string(), check_lists(snapshot.has_lists));
        Some(checks)
    }
}

/// No heading may go more than one level deeper than the one before it
pub fn has_proper_hierarchy(headings: &[HeadingInfo]) -> bool {
    headings
        .windows(2)
        .all(|pair| pair[1].level <= pair[0].level + 1)
}

fn check_headings(headings: &[HeadingInfo]) -> RuleResult {
    if headings.is_empty() {
        return RuleResult::new(
            Status::Warning,
            "No headings found. Use subheadings to structure the content.",
        )
        .with("count", 0);
    }

    let has_h1 = headings.iter().any(|h| h.level == 1);
    let has_h2 = headings.iter().any(|h| h.level == 2);
    let proper = has_proper_hierarchy(headings);

    let mut problems = Vec::new();
    if has_h1 {
        problems.push("The content contains an H1 heading; the post title is already the H1.");
    }
    if !has_h2 {
        problems.push("No H2 headings found.");
    }
    if !proper {
        problems.push("Heading levels are skipped (for example H2 followed by H4).");
    }

    let result = if problems.is_empty() {
        RuleResult::new(
            Status::Good,
            format!("The content uses {} heading(s) in a proper hierarchy.", headings.len()),
        )
    } else {
        RuleResult::new(Status::Warning, problems.join(" "))
    };

    result
        .with("count", headings.len())
        .with("has_h1", has_h1)
        .with("has_h2", has_h2)
        .with("has_proper_hierarchy", proper)
}

fn check_paragraphs(snapshot: &MetricSnapshot) -> RuleResult {
    let count = snapshot.paragraph_tag_count;
    let result = if count < MIN_PARAGRAPH_TAGS {
        RuleResult::new(
            Status::Warning,
            format!(
                "The content has only {} paragraph(s). Split it into more paragraphs.",
                count
            ),
        )
    } else {
        RuleResult::new(
            Status::Good,
            format!("The content is split into {} paragraphs.", count),
        )
    };
    result.with("count", count)
}

/// Lists are a bonus, so their absence is only "ok"
fn check_lists(has_lists: bool) -> RuleResult {
    if has_lists {
        RuleResult::new(Status::Good, "The content uses lists.")
    } else {
        RuleResult::new(
            Status::Ok,
            "The content has no lists. Bullet or numbered lists can improve scannability.",
        )
    }
}
