use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A reviewer's rating on one criterion, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(CoreError::OutOfRange {
                field: "score",
                value,
                min: Self::MIN as i64,
                max: Self::MAX as i64,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for Score {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

choice_enum! {
    /// Criteria a reviewer scores.
    ScoreMetric, "score metric" {
        MedicalAccuracy => "Medical Accuracy",
        LanguageClarity => "Language Clarity",
        Completeness => "Completeness",
        CulturalAppropriateness => "Cultural Appropriateness",
        FormattingQuality => "Formatting Quality",
    }
}

/// One score per [`ScoreMetric`]. Serialized as a map keyed by the metric
/// label, in the fixed metric order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationScores {
    #[serde(rename = "Medical Accuracy")]
    pub medical_accuracy: Score,
    #[serde(rename = "Language Clarity")]
    pub language_clarity: Score,
    #[serde(rename = "Completeness")]
    pub completeness: Score,
    #[serde(rename = "Cultural Appropriateness")]
    pub cultural_appropriateness: Score,
    #[serde(rename = "Formatting Quality")]
    pub formatting_quality: Score,
}

impl EvaluationScores {
    pub fn get(&self, metric: ScoreMetric) -> Score {
        match metric {
            ScoreMetric::MedicalAccuracy => self.medical_accuracy,
            ScoreMetric::LanguageClarity => self.language_clarity,
            ScoreMetric::Completeness => self.completeness,
            ScoreMetric::CulturalAppropriateness => self.cultural_appropriateness,
            ScoreMetric::FormattingQuality => self.formatting_quality,
        }
    }
}

choice_enum! {
    /// Reviewer identifiers offered on the evaluator form.
    ReviewerId, "reviewer id" {
        R001 => "001",
        R002 => "002",
        R003 => "003",
        R004 => "004",
        R005 => "005",
    }
}

choice_enum! {
    /// "Would you use this output in your practice?"
    WouldUse, "would-use answer" {
        Definitely => "Definitely",
        Probably => "Probably",
        Maybe => "Maybe",
        ProbablyNot => "Probably Not",
        DefinitelyNot => "Definitely Not",
    }
}

/// Free-text feedback. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Feedback {
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub weaknesses: String,
    #[serde(default)]
    pub suggestions: String,
}

/// What the evaluator form submits. The record timestamp is stamped on
/// submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationSubmission {
    pub evaluator_id: ReviewerId,
    pub scores: EvaluationScores,
    #[serde(default)]
    pub feedback: Feedback,
    pub would_use: WouldUse,
}

/// A submitted evaluation as kept in the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRecord {
    pub timestamp: String,
    pub evaluator_id: ReviewerId,
    pub scores: EvaluationScores,
    pub feedback: Feedback,
    pub would_use: WouldUse,
}

impl EvaluationRecord {
    pub fn stamp(submission: EvaluationSubmission, timestamp: String) -> Self {
        Self {
            timestamp,
            evaluator_id: submission.evaluator_id,
            scores: submission.scores,
            feedback: submission.feedback,
            would_use: submission.would_use,
        }
    }
}
