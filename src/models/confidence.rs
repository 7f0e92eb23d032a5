//! Confidence tiers
//!
//! Service-reported scores in [0, 1] mapped to a qualitative label for display.

use serde::Serialize;

/// Minimum score for [`ConfidenceTier::High`]
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// Minimum score for [`ConfidenceTier::Medium`]
pub const MEDIUM_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_score(score: f64) -> Self {
        let score = clamp_score(score);
        if score >= HIGH_CONFIDENCE {
            ConfidenceTier::High
        } else if score >= MEDIUM_CONFIDENCE {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }

    /// Indonesian label shown on the result badge
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "Tinggi",
            ConfidenceTier::Medium => "Sedang",
            ConfidenceTier::Low => "Rendah",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clamp a reported score into [0, 1]; NaN counts as 0
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Score as a percentage with one decimal, e.g. `85.0%`
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", clamp_score(score) * 100.0)
}
