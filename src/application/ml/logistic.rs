use super::classifier::Classifier;
use crate::domain::errors::ArtifactError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_threshold() -> f64 {
    0.5
}

/// Serialized logistic-regression artifact.
///
/// The training side exports one weight per feature (in the same order as
/// the feature-order artifact), an intercept, and optionally the decision
/// threshold. The struct is the artifact format: it is deserialized directly
/// from the JSON file written at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModel {
    pub fn from_file(path: &Path) -> Result<Self, ArtifactError> {
        if !path.exists() {
            return Err(ArtifactError::NotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| ArtifactError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Number of features the model was trained on.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn decision(&self, features: &[f64]) -> Result<f64, String> {
        if features.len() != self.weights.len() {
            return Err(format!(
                "expected {} features, got {}",
                self.weights.len(),
                features.len()
            ));
        }

        let z: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl Classifier for LogisticModel {
    fn predict_label(&self, features: &[f64]) -> Result<i64, String> {
        let p = self.decision(features)?;
        Ok(if p >= self.threshold { 1 } else { 0 })
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, String> {
        self.decision(features)
    }

    fn name(&self) -> &str {
        "Logistic Regression"
    }
}
