use crate::application::inference::predict_one;
use crate::domain::patient::PatientRecord;
use crate::domain::prediction::PredictionResult;
use crate::infrastructure::artifacts::ModelContext;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Builds the application router.
///
/// CORS is fully open (any origin/method/header); the API is consumed
/// directly from browsers.
pub fn router(ctx: ModelContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .layer(cors)
        .with_state(ctx)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "API is running" }))
}

async fn predict(
    State(ctx): State<ModelContext>,
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<Json<PredictionResult>, (StatusCode, Json<Value>)> {
    let Json(record) = payload.map_err(|rejection| {
        (
            rejection.status(),
            Json(json!({ "error": rejection.body_text() })),
        )
    })?;

    match predict_one(&record, ctx.model.as_ref(), &ctx.feature_order) {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            error!("Inference failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            ))
        }
    }
}
