use axum::Json;
use axum::extract::State;
use axum::response::Response;
use jiff::Zoned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use retina_core::models::clinical::ClinicalInput;
use retina_core::models::metric::GenerationMetric;
use retina_core::models::patient::PatientInput;

use crate::controller::download_filename;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::routes::{TEXT_CONTENT_TYPE, attachment};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub patient: PatientInput,
    pub clinical: ClinicalInput,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub content: String,
    pub metric: GenerationMetric,
    pub download_filename: String,
}

/// Run the generate flow in a session.
///
/// The session stays locked until the generator answers, so flows within
/// one session run strictly one after another.
pub async fn generate(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let session = state.session(id).await?;
    let mut session = session.lock().await;

    let generation = state
        .controller
        .generate(&mut session.store, &req.patient, &req.clinical)
        .await;

    Ok(Json(GenerateResponse {
        content: generation.content,
        metric: generation.metric,
        download_filename: download_filename(&Zoned::now()),
    }))
}

#[derive(Deserialize)]
pub struct DownloadRequest {
    pub content: String,
}

/// Hand generated content back as a timestamped text file.
pub async fn download_content(ApiJson(req): ApiJson<DownloadRequest>) -> Response {
    attachment(
        &download_filename(&Zoned::now()),
        TEXT_CONTENT_TYPE,
        req.content.into_bytes(),
    )
}
