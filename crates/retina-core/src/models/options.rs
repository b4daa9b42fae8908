use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Choice;
use super::clinical::{ClinicalInput, ContentSection, Diagnosis};
use super::evaluation::{ReviewerId, Score, ScoreMetric, WouldUse};
use super::patient::{Age, EducationLevel, Language, PatientInput};

/// A single entry in a choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Inclusive numeric range with the widget's starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// Everything a presentation layer needs to draw the generator and
/// evaluator forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormOptions {
    pub age: NumericRange,
    pub languages: Vec<ChoiceOption>,
    pub education_levels: Vec<ChoiceOption>,
    pub diagnoses: Vec<ChoiceOption>,
    pub sections: Vec<ChoiceOption>,
    pub score_metrics: Vec<ChoiceOption>,
    pub score: NumericRange,
    pub reviewer_ids: Vec<ChoiceOption>,
    pub would_use: Vec<ChoiceOption>,
    pub default_patient: PatientInput,
    pub default_clinical: ClinicalInput,
}

pub fn choices<C: Choice>() -> Vec<ChoiceOption> {
    C::all()
        .iter()
        .map(|c| ChoiceOption {
            value: c.value().to_string(),
            label: c.label().to_string(),
        })
        .collect()
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            age: NumericRange {
                min: Age::MIN,
                max: Age::MAX,
                default: Age::default().years(),
            },
            languages: choices::<Language>(),
            education_levels: choices::<EducationLevel>(),
            diagnoses: choices::<Diagnosis>(),
            sections: choices::<ContentSection>(),
            score_metrics: choices::<ScoreMetric>(),
            score: NumericRange {
                min: Score::MIN,
                max: Score::MAX,
                default: Score::default().value(),
            },
            reviewer_ids: choices::<ReviewerId>(),
            would_use: choices::<WouldUse>(),
            default_patient: PatientInput::default(),
            default_clinical: ClinicalInput::default(),
        }
    }
}
