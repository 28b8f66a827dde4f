use crate::application::ml::classifier::Classifier;
use crate::domain::errors::InferenceError;
use crate::domain::patient::PatientRecord;
use crate::domain::prediction::{PredictionResult, RiskLevel, confidence_pct};

/// Runs one validated record through the classifier.
///
/// The record is projected into a vector ordered by `feature_order` (the
/// order the model was trained on), then the label and the positive-class
/// probability are read off the model and mapped into the response payload.
/// Pure and deterministic: same record + same model = same result.
pub fn predict_one(
    record: &PatientRecord,
    model: &dyn Classifier,
    feature_order: &[String],
) -> Result<PredictionResult, InferenceError> {
    let mut input = Vec::with_capacity(feature_order.len());
    for name in feature_order {
        let value = record
            .feature(name)
            .ok_or_else(|| InferenceError::UnknownFeature { name: name.clone() })?;
        input.push(value);
    }

    let label = model
        .predict_label(&input)
        .map_err(|reason| InferenceError::Model { reason })?;
    if label != 0 && label != 1 {
        return Err(InferenceError::InvalidLabel { value: label });
    }

    let probability = model
        .predict_proba(&input)
        .map_err(|reason| InferenceError::Model { reason })?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(InferenceError::ProbabilityOutOfRange { value: probability });
    }

    let risk = RiskLevel::from_label(label as u8);
    Ok(PredictionResult {
        prediction: label as u8,
        risk: risk.as_str(),
        confidence: confidence_pct(probability),
        message: risk.advisory(),
    })
}
