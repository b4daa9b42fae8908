use retina_core::models::evaluation::EvaluationRecord;
use retina_core::models::metric::GenerationMetric;

use crate::error::StoreError;
use crate::table;

/// File name used when the metrics export is saved or downloaded.
pub const METRICS_FILE_NAME: &str = "system_metrics.csv";

/// File name used when the evaluations export is saved or downloaded.
pub const EVALUATIONS_FILE_NAME: &str = "evaluation_results.csv";

/// In-memory records for one interactive session.
///
/// Both collections only grow. Nothing is removed or edited after it is
/// appended, and insertion order is the chronological order of the user's
/// actions.
#[derive(Debug, Default)]
pub struct RecordStore {
    metrics: Vec<GenerationMetric>,
    evaluations: Vec<EvaluationRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_metric(&mut self, metric: GenerationMetric) {
        self.metrics.push(metric);
    }

    pub fn append_evaluation(&mut self, evaluation: EvaluationRecord) {
        self.evaluations.push(evaluation);
    }

    pub fn metrics(&self) -> &[GenerationMetric] {
        &self.metrics
    }

    pub fn evaluations(&self) -> &[EvaluationRecord] {
        &self.evaluations
    }

    /// Metrics as CSV, one row per record in append order.
    pub fn export_metrics(&self) -> Result<Vec<u8>, StoreError> {
        table::to_csv(&self.metrics)
    }

    /// Evaluations as CSV. `scores` and `feedback` are flattened into
    /// dotted columns.
    pub fn export_evaluations(&self) -> Result<Vec<u8>, StoreError> {
        table::to_csv(&self.evaluations)
    }

    /// Both exports at once. Does not touch the stored records.
    pub fn export_all(&self) -> Result<ExportBundle, StoreError> {
        Ok(ExportBundle {
            metrics_csv: self.export_metrics()?,
            evaluations_csv: self.export_evaluations()?,
        })
    }
}

/// The pair of CSV byte streams handed to the user on export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub metrics_csv: Vec<u8>,
    pub evaluations_csv: Vec<u8>,
}
