use crate::score::Score;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Outcome of a single check, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Warning,
    Ok,
    Good,
}

impl Status {
    /// Points this status contributes to the overall score (out of 3)
    pub fn points(self) -> u32 {
        match self {
            Status::Good => 3,
            Status::Ok => 2,
            Status::Warning => 1,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Status::Good => "good",
            Status::Ok => "ok",
            Status::Warning => "warning",
        })
    }
}

/// Evaluator categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Content,
    Keyword,
    Readability,
    Structure,
    Links,
    Images,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Content,
        Category::Keyword,
        Category::Readability,
        Category::Structure,
        Category::Links,
        Category::Images,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Content => "content",
            Category::Keyword => "keyword",
            Category::Readability => "readability",
            Category::Structure => "structure",
            Category::Links => "links",
            Category::Images => "images",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown analysis category: {}", s))
    }
}

/// Result of one check: a status, a human-readable message and
/// check-specific details flattened next to them when serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub status: Status,
    pub message: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl RuleResult {
    /// Create a result with no details
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Attach a detail field (counts, ratios, flags)
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// Look up a detail field
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }
}

/// Check name to result, for one category
pub type Checks = BTreeMap<String, RuleResult>;

/// Full output of an analysis run, keyed by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisReport {
    categories: BTreeMap<Category, Checks>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the checks of a category, replacing any previous entry
    pub fn insert(&mut self, category: Category, checks: Checks) {
        self.categories.insert(category, checks);
    }

    pub fn category(&self, category: Category) -> Option<&Checks> {
        self.categories.get(&category)
    }

    pub fn check(&self, category: Category, name: &str) -> Option<&RuleResult> {
        self.categories.get(&category).and_then(|c| c.get(name))
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&Category, &Checks)> {
        self.categories.iter()
    }

    /// Every check result in the report, across all categories
    pub fn results(&self) -> impl Iterator<Item = &RuleResult> {
        self.categories.values().flat_map(|checks| checks.values())
    }

    pub fn is_empty(&self) -> bool {
        self.results().next().is_none()
    }
}

/// Payload of the admin UI response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseData {
    pub score: u8,
    pub score_label: String,
    pub score_color: String,
    pub results: AnalysisReport,
    pub message: String,
}

/// `{success, data}` envelope returned to the admin UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub data: ResponseData,
}

impl AnalysisResponse {
    /// Wrap a report and its score into a successful response
    pub fn from_report(report: AnalysisReport) -> Self {
        let score = Score::from_report(&report);
        Self {
            success: true,
            data: ResponseData {
                score: score.value,
                score_label: score.label.to_string(),
                score_color: score.color,
                results: report,
                message: "Content analysis completed successfully.".to_string(),
            },
        }
    }
}
