use axum::Json;

use retina_core::models::options::FormOptions;

/// Choice lists and defaults for the generator and evaluator forms.
pub async fn form_options() -> Json<FormOptions> {
    Json(FormOptions::default())
}
