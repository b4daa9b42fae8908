use std::sync::Arc;

use retina_core::models::clinical::ClinicalInput;
use retina_core::models::evaluation::{
    EvaluationScores, EvaluationSubmission, Feedback, ReviewerId, Score, WouldUse,
};
use retina_core::models::patient::{Age, EducationLevel, Language, PatientInput};
use retina_genai::generator::StubGenerator;
use retina_server::controller::{Controller, SENTINEL_PREFIX, download_filename};
use retina_store::store::RecordStore;

fn patient(language: Language) -> PatientInput {
    PatientInput {
        age: Age::new(58).unwrap(),
        language,
        education_level: EducationLevel::Primary,
    }
}

fn submission(would_use: WouldUse) -> EvaluationSubmission {
    let s = |v| Score::new(v).unwrap();
    EvaluationSubmission {
        evaluator_id: ReviewerId::R001,
        scores: EvaluationScores {
            medical_accuracy: s(5),
            language_clarity: s(4),
            completeness: s(3),
            cultural_appropriateness: s(5),
            formatting_quality: s(4),
        },
        feedback: Feedback::default(),
        would_use,
    }
}

#[tokio::test]
async fn generate_returns_content_and_records_metric() {
    let stub = Arc::new(StubGenerator::replying("Bonjour, mon English friend"));
    let controller = Controller::new(stub.clone());
    let mut store = RecordStore::new();

    let generation = controller
        .generate(&mut store, &patient(Language::Hindi), &ClinicalInput::default())
        .await;

    assert_eq!(generation.content, "Bonjour, mon English friend");
    assert_eq!(generation.metric.content_length, generation.content.chars().count());
    assert!(generation.metric.contains_english_marker);
    assert_eq!(generation.metric.language, Language::Hindi);
    assert!(generation.metric.generation_duration_seconds >= 0.0);
    assert_eq!(store.metrics(), &[generation.metric.clone()]);

    let prompts = stub.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("both English and Hindi"));
}

#[tokio::test]
async fn generator_failure_becomes_sentinel_content() {
    let controller = Controller::new(Arc::new(StubGenerator::failing("quota exceeded")));
    let mut store = RecordStore::new();

    let generation = controller
        .generate(&mut store, &patient(Language::English), &ClinicalInput::default())
        .await;

    assert_eq!(generation.content, format!("{SENTINEL_PREFIX}quota exceeded"));
    assert!(generation.content.contains("quota exceeded"));
    assert!(!generation.metric.error_occurred);
    assert_eq!(generation.metric.content_length, generation.content.chars().count());
    assert!(!generation.metric.contains_english_marker);
    assert_eq!(store.metrics().len(), 1);
}

#[tokio::test]
async fn every_generation_appends_in_order() {
    let controller = Controller::new(Arc::new(StubGenerator::replying("text")));
    let mut store = RecordStore::new();

    for language in [Language::Korean, Language::Marathi, Language::Odiya] {
        controller
            .generate(&mut store, &patient(language), &ClinicalInput::default())
            .await;
    }

    let languages: Vec<_> = store.metrics().iter().map(|m| m.language).collect();
    assert_eq!(
        languages,
        vec![Language::Korean, Language::Marathi, Language::Odiya]
    );
}

#[test]
fn submitted_evaluation_is_stamped_and_exported() {
    let controller = Controller::new(Arc::new(StubGenerator::replying("unused")));
    let mut store = RecordStore::new();

    let record = controller.submit_evaluation(&mut store, submission(WouldUse::Definitely));
    assert_eq!(record.timestamp.len(), "2026-01-01 00:00:00".len());

    let bundle = controller.export_all(&store).unwrap();
    assert!(bundle.metrics_csv.is_empty());

    let text = String::from_utf8(bundle.evaluations_csv).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        format!("{},001,5,4,3,5,4,,,,Definitely", record.timestamp)
    );
}

#[test]
fn export_does_not_change_store() {
    let controller = Controller::new(Arc::new(StubGenerator::replying("unused")));
    let mut store = RecordStore::new();
    controller.submit_evaluation(&mut store, submission(WouldUse::Maybe));

    let first = controller.export_all(&store).unwrap();
    let second = controller.export_all(&store).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.evaluations().len(), 1);
}

#[test]
fn download_filename_carries_compact_timestamp() {
    let at: jiff::Zoned = "2026-10-19T14:03:09[UTC]".parse().unwrap();
    assert_eq!(download_filename(&at), "patient_education_20261019_140309.txt");
}
