use crate::evaluators::{AnalysisContext, Evaluator};
use crate::parsers::ImageInfo;
use crate::results::{Category, Checks, RuleResult, Status};
use crate::utils::contains_ignore_case;

/// Images wider or taller than this are considered oversized
const MAX_IMAGE_DIMENSION: u32 = 1200;

/// Checks image presence, alt text and declared dimensions
pub struct ImagesEvaluator;

impl Evaluator for ImagesEvaluator {
    fn category(&self) -> Category {
        Category::Images
    }

    fn description(&self) -> &str {
        "Checks for images, alt text, the focus keyword in alt text and oversized images"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Checks> {
        let images = &ctx.snapshot.images;
        let mut checks = Checks::new();

        if images.is_empty() {
            checks.insert(
                "count".to_string(),
                RuleResult::new(
                    Status::Warning,
                    "No images found. Add at least one relevant image.",
                )
                .with("count", 0),
            );
            return Some(checks);
        }

        checks.insert(
            "count".to_string(),
            RuleResult::new(
                Status::Good,
                format!("The content contains {} image(s).", images.len()),
            )
            .with("count", images.len()),
        );
        checks.insert("alt".to_string(), check_alt(images));
        if let Some(keyword) = ctx.input.keyword() {
            checks.insert(
                "keyword_in_alt".to_string(),
                check_keyword_in_alt(images, keyword),
            );
        }
        checks.insert("size".to_string(), check_size(images));

        Some(checks)
    }
}

fn check_alt(images: &[ImageInfo]) -> RuleResult {
    let missing = images.iter().filter(|i| !i.has_alt).count();
    let result = if missing > 0 {
        RuleResult::new(
            Status::Warning,
            format!("{} image(s) are missing alt text.", missing),
        )
    } else {
        RuleResult::new(Status::Good, "All images have alt text.")
    };
    result.with("missing", missing)
}

fn check_keyword_in_alt(images: &[ImageInfo], keyword: &str) -> RuleResult {
    if images
        .iter()
        .any(|i| contains_ignore_case(&i.alt_text, keyword))
    {
        RuleResult::new(
            Status::Good,
            "The focus keyword appears in at least one image's alt text.",
        )
    } else {
        RuleResult::new(
            Status::Warning,
            "The focus keyword does not appear in any image alt text.",
        )
    }
}

/// Only images declaring both width and height are measured
pub fn is_oversized(image: &ImageInfo) -> bool {
    match (image.width, image.height) {
        (Some(w), Some(h)) => w > MAX_IMAGE_DIMENSION || h > MAX_IMAGE_DIMENSION,
        _ => false,
    }
}

fn check_size(images: &[ImageInfo]) -> RuleResult {
    let oversized = images.iter().filter(|i| is_oversized(i)).count();
    let result = if oversized > 0 {
        RuleResult::new(
            Status::Warning,
            format!(
                "{} image(s) are larger than {}px. Resize them to improve page speed.",
                oversized, MAX_IMAGE_DIMENSION
            ),
        )
    } else {
        RuleResult::new(Status::Good, "Image dimensions look fine.")
    };
    result.with("oversized", oversized)
}
