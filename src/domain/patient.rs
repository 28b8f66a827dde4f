use serde::Deserialize;

/// Field names of [`PatientRecord`], in declaration order.
/// The feature-order artifact must be a permutation of exactly this set;
/// the check runs at startup, before the first request is served.
pub const FIELD_NAMES: &[&str] = &[
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// One patient record as submitted to `/predict`.
///
/// All 13 fields are required. `oldpeak` is the only floating-point field;
/// a fractional value in any of the integer fields is a type error and
/// rejects the request. No range validation is performed: out-of-domain but
/// type-valid values (e.g. `sex: 7`) pass through to the model.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientRecord {
    pub age: i64,
    pub sex: i64,
    pub cp: i64,
    pub trestbps: i64,
    pub chol: i64,
    pub fbs: i64,
    pub restecg: i64,
    pub thalach: i64,
    pub exang: i64,
    pub oldpeak: f64,
    pub slope: i64,
    pub ca: i64,
    pub thal: i64,
}

impl PatientRecord {
    /// Looks up a field value by its wire name, widened to `f64`.
    /// Returns `None` for names outside [`FIELD_NAMES`].
    pub fn feature(&self, name: &str) -> Option<f64> {
        let value = match name {
            "age" => self.age as f64,
            "sex" => self.sex as f64,
            "cp" => self.cp as f64,
            "trestbps" => self.trestbps as f64,
            "chol" => self.chol as f64,
            "fbs" => self.fbs as f64,
            "restecg" => self.restecg as f64,
            "thalach" => self.thalach as f64,
            "exang" => self.exang as f64,
            "oldpeak" => self.oldpeak,
            "slope" => self.slope as f64,
            "ca" => self.ca as f64,
            "thal" => self.thal as f64,
            _ => return None,
        };
        Some(value)
    }
}
