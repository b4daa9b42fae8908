//! The two user-facing flows: generate material, and collect evaluations.

use std::sync::Arc;
use std::time::Instant;

use jiff::Zoned;
use tracing::{info, warn};

use retina_core::models::clinical::ClinicalInput;
use retina_core::models::evaluation::{EvaluationRecord, EvaluationSubmission};
use retina_core::models::metric::GenerationMetric;
use retina_core::models::patient::PatientInput;
use retina_core::time::{filename_timestamp, now_record_timestamp};
use retina_genai::error::GenAiError;
use retina_genai::generator::TextGenerator;
use retina_genai::prompt::build_prompt;
use retina_store::error::StoreError;
use retina_store::store::{ExportBundle, RecordStore};

/// Prefix of the text returned in place of generated content when the
/// generation service fails.
pub const SENTINEL_PREFIX: &str = "Error generating content: ";

/// Result of one generate flow.
#[derive(Debug, Clone)]
pub struct Generation {
    pub content: String,
    pub metric: GenerationMetric,
}

/// Orchestrates both flows against a session's record store.
pub struct Controller {
    generator: Arc<dyn TextGenerator>,
}

impl Controller {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Build the prompt, call the generator, measure, and record the metric.
    ///
    /// Never fails. A generator error becomes sentinel content that is shown
    /// and measured like real output. The metric's `error_occurred` stays
    /// `false` in that case too; exported metrics keep that historical
    /// meaning.
    pub async fn generate(
        &self,
        store: &mut RecordStore,
        patient: &PatientInput,
        clinical: &ClinicalInput,
    ) -> Generation {
        let started = Instant::now();
        info!(
            language = %patient.language,
            diagnosis = %clinical.diagnosis,
            sections = clinical.sections.len(),
            "generation started"
        );

        let prompt = build_prompt(patient, clinical);
        let content = match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "generation failed, returning error text as content");
                sentinel_content(&e)
            }
        };

        let metric = GenerationMetric::measure(
            &content,
            patient.language,
            started.elapsed(),
            now_record_timestamp(),
        );
        store.append_metric(metric.clone());

        info!(
            duration_seconds = metric.generation_duration_seconds,
            content_length = metric.content_length,
            "generation complete"
        );

        Generation { content, metric }
    }

    /// Stamp and append an evaluation. Always succeeds.
    pub fn submit_evaluation(
        &self,
        store: &mut RecordStore,
        submission: EvaluationSubmission,
    ) -> EvaluationRecord {
        let record = EvaluationRecord::stamp(submission, now_record_timestamp());
        store.append_evaluation(record.clone());

        info!(
            evaluator_id = %record.evaluator_id,
            would_use = %record.would_use,
            total = store.evaluations().len(),
            "evaluation submitted"
        );

        record
    }

    /// Render both collections as CSV. Stored records are untouched.
    pub fn export_all(&self, store: &RecordStore) -> Result<ExportBundle, StoreError> {
        store.export_all()
    }
}

/// Text shown in place of generated content after a failure.
pub fn sentinel_content(error: &GenAiError) -> String {
    format!("{SENTINEL_PREFIX}{error}")
}

/// Download name for a single piece of generated content.
pub fn download_filename(at: &Zoned) -> String {
    format!("patient_education_{}.txt", filename_timestamp(at))
}
