use axum::Json;
use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use uuid::Uuid;

use retina_store::persist::persist_exports;
use retina_store::store::{EVALUATIONS_FILE_NAME, METRICS_FILE_NAME};

use crate::error::ApiError;
use crate::extract::ApiPath;
use crate::routes::{CSV_CONTENT_TYPE, attachment};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ExportedFile {
    pub file_name: &'static str,
    pub saved_to: String,
    pub csv: String,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub metrics: ExportedFile,
    pub evaluations: ExportedFile,
}

/// Export both collections, save them under the session's export
/// directory, and return both CSV bodies.
pub async fn export_all(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ExportResponse>, ApiError> {
    let session = state.session(id).await?;
    // Held until the files are saved, so exports of one session land in
    // order and the saved pair always matches the returned bodies.
    let session = session.lock().await;
    let bundle = state.controller.export_all(&session.store)?;

    let dir = state.export_dir.join(id.to_string());
    let written = persist_exports(&dir, &bundle)?;
    drop(session);

    Ok(Json(ExportResponse {
        metrics: ExportedFile {
            file_name: METRICS_FILE_NAME,
            saved_to: written.metrics_path.display().to_string(),
            csv: String::from_utf8(bundle.metrics_csv)?,
        },
        evaluations: ExportedFile {
            file_name: EVALUATIONS_FILE_NAME,
            saved_to: written.evaluations_path.display().to_string(),
            csv: String::from_utf8(bundle.evaluations_csv)?,
        },
    }))
}

pub async fn download_metrics(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, ApiError> {
    let session = state.session(id).await?;
    let csv = session.lock().await.store.export_metrics()?;
    Ok(attachment(METRICS_FILE_NAME, CSV_CONTENT_TYPE, csv))
}

pub async fn download_evaluations(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, ApiError> {
    let session = state.session(id).await?;
    let csv = session.lock().await.store.export_evaluations()?;
    Ok(attachment(EVALUATIONS_FILE_NAME, CSV_CONTENT_TYPE, csv))
}
