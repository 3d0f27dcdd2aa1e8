use crate::evaluators::{AnalysisContext, Evaluator};
use crate::parsers::LinkInfo;
use crate::results::{Category, Checks, RuleResult, Status};

/// Checks internal/external linking, nofollow usage and anchor text
pub struct LinksEvaluator;

impl Evaluator for LinksEvaluator {
    fn category(&self) -> Category {
        Category::Links
    }

    fn description(&self) -> &str {
        "Checks internal and external links, nofollow on external links and anchor text"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks> {
        let links = &ctx.snapshot.links;
        let mut checks = Checks::new();

        if links.is_empty() {
            checks.insert(
                "count".to_string(),
                RuleResult::new(
                    Status::Warning,
                    "No links found. Add internal and external links.",
                )
                .with("total", 0)
                .with("internal", 0)
                .with("external", 0),
            );
            return Some(checks);
        }

        checks.insert("count".to_string(), check_count(links));
        checks.insert("nofollow".to_string(), check_nofollow(links));
        checks.insert("anchor_text".to_string(), check_anchor_text(links));
        Some(checks)
    }
}

fn check_count(links: &[LinkInfo]) -> RuleResult {
    let internal = links.iter().filter(|l| l.is_internal).count();
    let external = links.len() - internal;

    let result = if internal == 0 {
        RuleResult::new(
            Status::Warning,
            format!(
                "The content has {} link(s) but no internal links. Link to related content on this site.",
                links.len()
            ),
        )
    } else if external == 0 {
        RuleResult::new(
            Status::Warning,
            format!(
                "The content has {} link(s) but no external links. Link to authoritative sources.",
                links.len()
            ),
        )
    } else {
        RuleResult::new(
            Status::Good,
            format!(
                "The content has {} internal and {} external link(s).",
                internal, external
            ),
        )
    };

    result
        .with("total", links.len())
        .with("internal", internal)
        .with("external", external)
}

fn check_nofollow(links: &[LinkInfo]) -> RuleResult {
    let missing = links
        .iter()
        .filter(|l| !l.is_internal && !l.is_nofollow)
        .count();

    let result = if missing > 0 {
        RuleResult::new(
            Status::Warning,
            format!(
                "{} external link(s) do not have rel=\"nofollow\".",
                missing
            ),
        )
    } else {
        RuleResult::new(Status::Good, "All external links use rel=\"nofollow\".")
    };
    result.with("missing", missing)
}

fn check_anchor_text(links: &[LinkInfo]) -> RuleResult {
    let empty = links
        .iter()
        .filter(|l| l.anchor_text.trim().is_empty())
        .count();

    let result = if empty > 0 {
        RuleResult::new(
            Status::Warning,
            format!("{} link(s) have empty anchor text.", empty),
        )
    } else {
        RuleResult::new(Status::Good, "All links have descriptive anchor text.")
    };
    result.with("empty", empty)
}
