use serde::Serialize;

/// Binary risk bucket derived from the predicted class label.
/// Label 1 is the positive ("disease present") class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn from_label(label: u8) -> Self {
        match label {
            1 => RiskLevel::High,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Low => "Low",
        }
    }

    /// Static advisory shown alongside the risk level.
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLevel::High => "Consult a cardiologist immediately.",
            RiskLevel::Low => "Maintain a healthy lifestyle.",
        }
    }
}

/// Response payload for `/predict`. Built fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub risk: &'static str,
    pub confidence: f64,
    pub message: &'static str,
}

/// Converts a positive-class probability into a percentage rounded to two
/// decimal places. Ties round half away from zero (`f64::round` semantics).
pub fn confidence_pct(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
