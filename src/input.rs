use crate::utils::slugify;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The post being analyzed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Raw post content as stored (HTML, possibly with shortcodes)
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub excerpt: String,

    /// Search term the post is optimized for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,

    /// URL slug; derived from the title when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl AnalysisInput {
    /// Create an input from content and title
    pub fn new(content: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_focus_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.focus_keyword = Some(keyword.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Load a post from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let input: Self = serde_json::from_str(&contents)?;
        Ok(input)
    }

    /// The focus keyword, trimmed; `None` when missing or blank
    pub fn keyword(&self) -> Option<&str> {
        self.focus_keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// The excerpt, `None` when blank
    pub fn excerpt(&self) -> Option<&str> {
        Some(self.excerpt.trim()).filter(|e| !e.is_empty())
    }

    /// The explicit slug, or one derived from the title
    pub fn slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_lowercase(),
            _ => slugify(&self.title),
        }
    }
}
