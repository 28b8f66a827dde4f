use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use cardioserve::application::ml::classifier::Classifier;
use cardioserve::domain::patient::FIELD_NAMES;
use cardioserve::infrastructure::artifacts::ModelContext;
use cardioserve::interfaces::http::router;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

/// Classifier stub with fixed outputs, wired in through the same trait seam
/// the real model uses.
struct FixedClassifier {
    label: i64,
    probability: f64,
}

impl Classifier for FixedClassifier {
    fn predict_label(&self, _features: &[f64]) -> Result<i64, String> {
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<f64, String> {
        Ok(self.probability)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

fn test_app(label: i64, probability: f64) -> Router {
    let ctx = ModelContext::new(
        Arc::new(FixedClassifier { label, probability }),
        FIELD_NAMES.iter().map(|s| s.to_string()).collect(),
    );
    router(ctx)
}

fn sample_payload() -> Value {
    json!({
        "age": 63, "sex": 1, "cp": 3, "trestbps": 145, "chol": 233,
        "fbs": 1, "restecg": 0, "thalach": 150, "exang": 0,
        "oldpeak": 2.3, "slope": 0, "ca": 0, "thal": 1
    })
}

async fn post_predict(app: Router, payload: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app(0, 0.5)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({ "status": "API is running" }));
}

#[tokio::test]
async fn test_predict_high_risk() {
    let (status, value) = post_predict(test_app(1, 0.87), &sample_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "prediction": 1,
            "risk": "High",
            "confidence": 87.0,
            "message": "Consult a cardiologist immediately."
        })
    );
}

#[tokio::test]
async fn test_predict_low_risk() {
    let (status, value) = post_predict(test_app(0, 0.25), &sample_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["prediction"], 0);
    assert_eq!(value["risk"], "Low");
    assert_eq!(value["confidence"], 25.0);
    assert_eq!(value["message"], "Maintain a healthy lifestyle.");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let mut payload = sample_payload();
    payload.as_object_mut().unwrap().remove("thal");

    let (status, value) = post_predict(test_app(1, 0.87), &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(value.get("error").is_some());
}

#[tokio::test]
async fn test_mistyped_field_is_rejected() {
    let mut payload = sample_payload();
    payload["age"] = json!("sixty-three");

    let (status, value) = post_predict(test_app(1, 0.87), &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(value.get("error").is_some());
}

#[tokio::test]
async fn test_float_in_integer_field_is_rejected() {
    let mut payload = sample_payload();
    payload["age"] = json!(63.5);

    let (status, _) = post_predict(test_app(1, 0.87), &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_extra_field_is_ignored() {
    let mut payload = sample_payload();
    payload["bmi"] = json!(27);

    let (status, value) = post_predict(test_app(1, 0.87), &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["prediction"], 1);
}

#[tokio::test]
async fn test_inference_failure_is_server_error() {
    // probability outside [0,1] trips the pipeline's range check
    let (status, value) = post_predict(test_app(1, 1.5), &sample_payload()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(value.get("error").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = test_app(0, 0.5)
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
