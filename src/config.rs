use crate::results::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Thresholds and switches for a content analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Minimum recommended word count
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,

    /// Lowest acceptable keyword density, in percent
    #[serde(default = "default_min_keyword_density")]
    pub min_keyword_density: f64,

    /// Highest acceptable keyword density, in percent
    #[serde(default = "default_max_keyword_density")]
    pub max_keyword_density: f64,

    /// Flesch Reading Ease below which readability is a warning
    #[serde(default = "default_min_readability_score")]
    pub min_readability_score: f64,

    /// Categories that are skipped entirely
    #[serde(default)]
    pub disabled_features: BTreeSet<Category>,

    /// Public URL of the site, used to tell internal links from external ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_content_length: default_min_content_length(),
            min_keyword_density: default_min_keyword_density(),
            max_keyword_density: default_max_keyword_density(),
            min_readability_score: default_min_readability_score(),
            disabled_features: BTreeSet::new(),
            site_url: None,
        }
    }
}

/// Default value for min_content_length
fn default_min_content_length() -> usize {
    300
}

/// Default value for min_keyword_density
fn default_min_keyword_density() -> f64 {
    1.0
}

/// Default value for max_keyword_density
fn default_max_keyword_density() -> f64 {
    3.0
}

/// Default value for min_readability_score
fn default_min_readability_score() -> f64 {
    60.0
}

impl AnalysisSettings {
    /// Load settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject thresholds that cannot describe a usable range
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.min_keyword_density < 0.0 || self.max_keyword_density < 0.0 {
            return Err("keyword density thresholds must not be negative".into());
        }
        if self.min_keyword_density > self.max_keyword_density {
            return Err(format!(
                "min_keyword_density ({}) is greater than max_keyword_density ({})",
                self.min_keyword_density, self.max_keyword_density
            )
            .into());
        }
        if !(0.0..=100.0).contains(&self.min_readability_score) {
            return Err(format!(
                "min_readability_score must be between 0 and 100, got {}",
                self.min_readability_score
            )
            .into());
        }
        Ok(())
    }

    /// Whether the given category should run
    pub fn is_enabled(&self, category: Category) -> bool {
        !self.disabled_features.contains(&category)
    }

    /// Disable a category
    pub fn disable(mut self, category: Category) -> Self {
        self.disabled_features.insert(category);
        self
    }

    /// Set the site URL used for link classification
    pub fn with_site_url(mut self, site_url: &str) -> Self {
        self.site_url = Some(site_url.to_string());
        self
    }
}
