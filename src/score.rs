use crate::results::AnalysisReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most points a single check can earn
const MAX_POINTS_PER_CHECK: u32 = 3;

/// Categorical label for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

impl ScoreLabel {
    pub fn for_value(value: u8) -> Self {
        match value {
            80.. => ScoreLabel::Excellent,
            60..=79 => ScoreLabel::Good,
            40..=59 => ScoreLabel::NeedsImprovement,
            _ => ScoreLabel::Poor,
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreLabel::Excellent => write!(f, "Excellent"),
            ScoreLabel::Good => write!(f, "Good"),
            ScoreLabel::NeedsImprovement => write!(f, "Needs Improvement"),
            ScoreLabel::Poor => write!(f, "Poor"),
        }
    }
}

/// Display color for a score, as an RGB hex string
pub fn score_color(value: u8) -> &'static str {
    match value {
        80.. => "#27ae60",
        60..=79 => "#2ecc71",
        40..=59 => "#f39c12",
        _ => "#e74c3c",
    }
}

/// Overall score of an analysis report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// 0 to 100
    pub value: u8,
    pub label: ScoreLabel,
    pub color: String,
}

impl Score {
    /// Reduce a report to a single percentage.
    ///
    /// Every check present counts for 3 possible points, so the scale is
    /// relative to the checks that actually ran. An empty report scores 0.
    pub fn from_report(report: &AnalysisReport) -> Self {
        let (total, max) = report.results().fold((0u32, 0u32), |(total, max), result| {
            (total + result.status.points(), max + MAX_POINTS_PER_CHECK)
        });

        let value = if max == 0 {
            0
        } else {
            (100.0 * f64::from(total) / f64::from(max)).round() as u8
        };

        ::log::debug!("Score {}/{} points => {}", total, max, value);

        Self {
            value,
            label: ScoreLabel::for_value(value),
            color: score_color(value).to_string(),
        }
    }
}
