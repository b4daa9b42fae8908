use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use retina_core::models::evaluation::{EvaluationRecord, EvaluationSubmission};
use retina_core::models::metric::GenerationMetric;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn list_metrics(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<GenerationMetric>>, ApiError> {
    let session = state.session(id).await?;
    let session = session.lock().await;
    Ok(Json(session.store.metrics().to_vec()))
}

pub async fn list_evaluations(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Vec<EvaluationRecord>>, ApiError> {
    let session = state.session(id).await?;
    let session = session.lock().await;
    Ok(Json(session.store.evaluations().to_vec()))
}

pub async fn submit_evaluation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(submission): ApiJson<EvaluationSubmission>,
) -> Result<(StatusCode, Json<EvaluationRecord>), ApiError> {
    let session = state.session(id).await?;
    let mut session = session.lock().await;
    let record = state
        .controller
        .submit_evaluation(&mut session.store, submission);
    Ok((StatusCode::CREATED, Json(record)))
}
