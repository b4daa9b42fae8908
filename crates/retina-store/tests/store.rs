use std::time::Duration;

use retina_core::models::evaluation::{
    EvaluationRecord, EvaluationScores, EvaluationSubmission, Feedback, ReviewerId, Score,
    WouldUse,
};
use retina_core::models::metric::GenerationMetric;
use retina_core::models::patient::Language;
use retina_store::store::RecordStore;
use retina_store::table::{flatten, to_csv, union_columns};

fn metric(content: &str, language: Language, seconds: u64) -> GenerationMetric {
    GenerationMetric::measure(
        content,
        language,
        Duration::from_secs(seconds),
        format!("2026-03-0{seconds} 09:00:00"),
    )
}

fn score(value: i64) -> Score {
    Score::new(value).unwrap()
}

fn scenario_evaluation() -> EvaluationRecord {
    EvaluationRecord::stamp(
        EvaluationSubmission {
            evaluator_id: ReviewerId::R003,
            scores: EvaluationScores {
                medical_accuracy: score(5),
                language_clarity: score(4),
                completeness: score(3),
                cultural_appropriateness: score(5),
                formatting_quality: score(4),
            },
            feedback: Feedback {
                strengths: "Clear, friendly".to_string(),
                weaknesses: String::new(),
                suggestions: "Add a diagram".to_string(),
            },
            would_use: WouldUse::Definitely,
        },
        "2026-03-01 10:15:00".to_string(),
    )
}

fn read_rows(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn new_store_is_empty_and_exports_nothing() {
    let store = RecordStore::new();
    assert!(store.metrics().is_empty());
    assert!(store.evaluations().is_empty());
    assert!(store.export_metrics().unwrap().is_empty());
    assert!(store.export_evaluations().unwrap().is_empty());
}

#[test]
fn metrics_export_has_one_row_per_append_in_order() {
    let mut store = RecordStore::new();
    store.append_metric(metric("first English", Language::English, 1));
    store.append_metric(metric("second", Language::Punjabi, 2));
    store.append_metric(metric("third", Language::Japanese, 3));

    let (headers, rows) = read_rows(&store.export_metrics().unwrap());
    assert_eq!(
        headers,
        vec![
            "timestamp",
            "generation_duration_seconds",
            "content_length",
            "language",
            "contains_english_marker",
            "error_occurred",
        ]
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][3], "English");
    assert_eq!(rows[0][4], "true");
    assert_eq!(rows[1][3], "Punjabi");
    assert_eq!(rows[1][4], "false");
    assert_eq!(rows[2][0], "2026-03-03 09:00:00");
    assert_eq!(rows[2][2], "5");
    assert_eq!(rows[2][5], "false");
}

#[test]
fn evaluation_export_flattens_scores_and_feedback() {
    let mut store = RecordStore::new();
    store.append_evaluation(scenario_evaluation());

    let (headers, rows) = read_rows(&store.export_evaluations().unwrap());
    assert_eq!(
        headers,
        vec![
            "timestamp",
            "evaluator_id",
            "scores.Medical Accuracy",
            "scores.Language Clarity",
            "scores.Completeness",
            "scores.Cultural Appropriateness",
            "scores.Formatting Quality",
            "feedback.strengths",
            "feedback.weaknesses",
            "feedback.suggestions",
            "would_use",
        ]
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            "2026-03-01 10:15:00",
            "003",
            "5",
            "4",
            "3",
            "5",
            "4",
            "Clear, friendly",
            "",
            "Add a diagram",
            "Definitely",
        ]
    );
}

#[test]
fn repeated_exports_are_byte_identical() {
    let mut store = RecordStore::new();
    store.append_metric(metric("text", Language::Bengali, 4));
    store.append_evaluation(scenario_evaluation());

    assert_eq!(store.export_metrics().unwrap(), store.export_metrics().unwrap());
    assert_eq!(store.export_all().unwrap(), store.export_all().unwrap());
    assert_eq!(store.metrics().len(), 1);
    assert_eq!(store.evaluations().len(), 1);
}

#[test]
fn export_quotes_cells_with_delimiters_and_newlines() {
    let mut record = scenario_evaluation();
    record.feedback.weaknesses = "Too long,\n\"dense\" wording".to_string();
    let mut store = RecordStore::new();
    store.append_evaluation(record);

    let (_, rows) = read_rows(&store.export_evaluations().unwrap());
    assert_eq!(rows[0][8], "Too long,\n\"dense\" wording");
}

#[derive(serde::Serialize)]
struct Sparse {
    id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    tags: Vec<String>,
}

#[test]
fn union_of_columns_fills_missing_cells_with_empty() {
    let records = vec![
        Sparse {
            id: 1,
            note: None,
            tags: vec![],
        },
        Sparse {
            id: 2,
            note: Some("late".to_string()),
            tags: vec!["a".to_string(), "b".to_string()],
        },
    ];

    let rows: Vec<_> = records.iter().map(|r| flatten(r).unwrap()).collect();
    assert_eq!(union_columns(&rows), vec!["id", "tags", "note"]);

    let (headers, body) = read_rows(&to_csv(&records).unwrap());
    assert_eq!(headers, vec!["id", "tags", "note"]);
    assert_eq!(body[0], vec!["1", "[]", ""]);
    assert_eq!(body[1], vec!["2", r#"["a","b"]"#, "late"]);
}
