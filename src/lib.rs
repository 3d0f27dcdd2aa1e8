pub mod config;
pub mod evaluators;
pub mod filter;
pub mod input;
pub mod parsers;
pub mod results;
pub mod score;
pub mod utils;


// Re-export commonly used types for convenience
pub use config::AnalysisSettings;
pub use input::AnalysisInput;
pub use parsers::MetricSnapshot;
pub use results::{AnalysisReport, AnalysisResponse, Category, RuleResult, Status};
pub use score::{Score, ScoreLabel};

use evaluators::AnalysisContext;
use filter::LinkClassifier;

/// Analyze a post and return the per-category check results.
///
/// The run is pure: no I/O, no state kept between calls.
pub fn analyze(input: &AnalysisInput, settings: &AnalysisSettings) -> AnalysisReport {
    let classifier = LinkClassifier::new(settings.site_url.as_deref());
    let snapshot = MetricSnapshot::extract(&input.content, &classifier);

    evaluators::evaluate_all(&AnalysisContext {
        snapshot: &snapshot,
        input,
        settings,
    })
}

/// Builder for configuring and running a content analysis
pub struct ContentAnalysis {
    input: AnalysisInput,
    settings: AnalysisSettings,
}

impl ContentAnalysis {
    /// Create a new analysis of the given post with default settings
    pub fn new(input: AnalysisInput) -> Self {
        Self {
            input,
            settings: AnalysisSettings::default(),
        }
    }

    /// Apply settings
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Load settings from a JSON file
    pub fn with_settings_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = AnalysisSettings::from_file(path)?;
        Ok(self.with_settings(settings))
    }

    /// Load settings from a JSON string
    pub fn with_settings_str(self, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = AnalysisSettings::from_json(json)?;
        Ok(self.with_settings(settings))
    }

    /// Override the site URL used to classify links
    pub fn with_site_url(mut self, site_url: &str) -> Self {
        self.settings.site_url = Some(site_url.to_string());
        self
    }

    /// Skip a category
    pub fn without(mut self, category: Category) -> Self {
        self.settings = self.settings.disable(category);
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Run the analysis and return the report
    pub fn run(&self) -> AnalysisReport {
        analyze(&self.input, &self.settings)
    }

    /// Run the analysis and wrap the report, with its score, in a response
    pub fn respond(&self) -> AnalysisResponse {
        AnalysisResponse::from_report(self.run())
    }
}
