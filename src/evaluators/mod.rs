//! Rule evaluators.
//!
//! Each evaluator owns one report category and turns the extracted
//! metrics into a set of named checks. Evaluators are pure: they read
//! the snapshot, the input and the settings and nothing else.

pub mod content;
pub mod images;
pub mod keyword;
pub mod links;
pub mod readability;
pub mod structure;

use crate::config::AnalysisSettings;
use crate::input::AnalysisInput;
use crate::parsers::MetricSnapshot;
use crate::results::{AnalysisReport, Category, Checks};

/// Everything an evaluator may look at during a run
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub snapshot: &'a MetricSnapshot,
    pub input: &'a AnalysisInput,
    pub settings: &'a AnalysisSettings,
}

/// Trait implemented by all evaluators
pub trait Evaluator {
    /// Report category this evaluator fills
    fn category(&self) -> Category;

    /// Short description of what this evaluator checks
    fn description(&self) -> &str;

    /// Run the checks; `None` when the category does not apply to this input
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks>;
}

/// All evaluators, in report order
pub fn all() -> Vec<Box<dyn Evaluator>> {
    vec![
        Box::new(content::ContentLengthEvaluator),
        Box::new(keyword::KeywordEvaluator),
        Box::new(readability::ReadabilityEvaluator),
        Box::new(structure::StructureEvaluator),
        Box::new(links::LinksEvaluator),
        Box::new(images::ImagesEvaluator),
    ]
}

/// Run every enabled evaluator and collect their checks into a report
pub fn evaluate_all(ctx: &AnalysisContext<'_>) -> AnalysisReport {
    let mut report = AnalysisReport::new();

    for evaluator in all() {
        let category = evaluator.category();
        if !ctx.settings.is_enabled(category) {
            ::log::debug!("Skipping disabled category: {}", category);
            continue;
        }

        ::log::debug!("Running {} evaluator: {}", category, evaluator.description());
        match evaluator.evaluate(ctx) {
            Some(checks) => {
                ::log::debug!("{} produced {} checks", category, checks.len());
                report.insert(category, checks);
            }
            None => ::log::debug!("Category {} does not apply, omitted", category),
        }
    }

    report
}

/// Extract metrics from the input's content and run a single evaluator
#[cfg(test)]
pub(crate) fn run_single(
    evaluator: &dyn Evaluator,
    input: &AnalysisInput,
    settings: &AnalysisSettings,
) -> Option<Checks> {
    let classifier = crate::filter::LinkClassifier::new(settings.site_url.as_deref());
    let snapshot = MetricSnapshot::extract(&input.content, &classifier);
    evaluator.evaluate(&AnalysisContext {
        snapshot: &snapshot,
        input,
        settings,
    })
}
