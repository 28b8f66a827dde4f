/// Interface for binary classifiers over a fixed-order feature vector.
///
/// Implementations must be safe for concurrent read-only use: both
/// operations take `&self` and the server shares one instance across all
/// request handlers.
pub trait Classifier: Send + Sync {
    /// Predicted class label for one feature vector (0 or 1).
    fn predict_label(&self, features: &[f64]) -> Result<i64, String>;

    /// Probability assigned to the positive class (0.0 to 1.0).
    fn predict_proba(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type.
    fn name(&self) -> &str;
}
