//! Structured assessment returned by the advisory service.

use serde::{Deserialize, Serialize};

/// Overall mission risk grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

/// Tactical assessment for the command display. Replaced wholesale on each
/// scan, never merged with a prior value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub summary: String,
    #[serde(rename = "immediateActions")]
    pub immediate_actions: Vec<String>,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

impl RiskAssessment {
    /// Fixed substitute shown when the service cannot be reached or its
    /// reply fails validation.
    pub fn fallback() -> Self {
        Self {
            summary: "AI Connection failed. Proceed with manual protocol.".to_string(),
            immediate_actions: vec![
                "Check communication lines".to_string(),
                "Monitor vitals manually".to_string(),
            ],
            risk_level: RiskLevel::Moderate,
        }
    }
}
