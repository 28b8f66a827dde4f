use thiserror::Error;

/// Errors raised while loading and validating the model artifacts at startup.
/// Any of these is fatal: the process refuses to serve without a usable model.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to decode artifact {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Feature order does not match the patient schema: missing {missing:?}, unexpected {unexpected:?}")]
    FeatureMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Feature order lists '{name}' more than once")]
    DuplicateFeature { name: String },

    #[error("Model carries {model_dim} weights but the feature order lists {order_dim} names")]
    ArityMismatch { model_dim: usize, order_dim: usize },
}

/// Errors raised while turning one validated record into a prediction.
/// These map to a server error; the same input deterministically fails
/// again, so no retry is attempted.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Feature '{name}' is not part of the patient schema")]
    UnknownFeature { name: String },

    #[error("Model returned label {value}, expected 0 or 1")]
    InvalidLabel { value: i64 },

    #[error("Model returned probability {value} outside [0, 1]")]
    ProbabilityOutOfRange { value: f64 },

    #[error("Model evaluation failed: {reason}")]
    Model { reason: String },
}
