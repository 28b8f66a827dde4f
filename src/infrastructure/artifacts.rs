use crate::application::ml::classifier::Classifier;
use crate::application::ml::logistic::LogisticModel;
use crate::config::Config;
use crate::domain::errors::ArtifactError;
use crate::domain::patient::FIELD_NAMES;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Immutable model state shared by every request handler.
///
/// Loaded exactly once at startup; nothing mutates it afterwards, so
/// concurrent reads need no locking. Cloning is cheap (two `Arc`s).
#[derive(Clone)]
pub struct ModelContext {
    pub model: Arc<dyn Classifier>,
    pub feature_order: Arc<Vec<String>>,
}

impl std::fmt::Debug for ModelContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelContext")
            .field("model", &self.model.name())
            .field("feature_order", &self.feature_order)
            .finish()
    }
}

impl ModelContext {
    pub fn new(model: Arc<dyn Classifier>, feature_order: Vec<String>) -> Self {
        Self {
            model,
            feature_order: Arc::new(feature_order),
        }
    }

    /// Loads both artifacts and validates them against the patient schema.
    ///
    /// Any failure here is fatal: the caller propagates the error and the
    /// process exits before binding the listener. A mismatched feature list
    /// does not fail at request time, it silently produces wrong
    /// predictions, so the permutation check MUST run before serving.
    pub fn load(config: &Config) -> Result<Self, ArtifactError> {
        let model = LogisticModel::from_file(&config.model_path)?;
        info!(
            model = model.name(),
            weights = model.dimension(),
            "Loaded classifier artifact from {:?}",
            config.model_path
        );

        let feature_order = load_feature_order(&config.features_path)?;
        info!(
            features = feature_order.len(),
            "Loaded feature order from {:?}", config.features_path
        );

        validate_feature_order(&feature_order)?;
        if model.dimension() != feature_order.len() {
            return Err(ArtifactError::ArityMismatch {
                model_dim: model.dimension(),
                order_dim: feature_order.len(),
            });
        }

        Ok(Self::new(Arc::new(model), feature_order))
    }
}

fn load_feature_order(path: &Path) -> Result<Vec<String>, ArtifactError> {
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

/// Checks that the loaded feature order is a permutation of exactly the
/// patient schema's field names.
fn validate_feature_order(order: &[String]) -> Result<(), ArtifactError> {
    let mut loaded: BTreeSet<&str> = BTreeSet::new();
    for name in order {
        if !loaded.insert(name.as_str()) {
            return Err(ArtifactError::DuplicateFeature { name: name.clone() });
        }
    }

    let expected: BTreeSet<&str> = FIELD_NAMES.iter().copied().collect();
    let missing: Vec<String> = expected
        .difference(&loaded)
        .map(|s| s.to_string())
        .collect();
    let unexpected: Vec<String> = loaded
        .difference(&expected)
        .map(|s| s.to_string())
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        Ok(())
    } else {
        Err(ArtifactError::FeatureMismatch {
            missing,
            unexpected,
        })
    }
}
