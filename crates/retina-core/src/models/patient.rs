use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::Choice;

/// Patient age in years, 1 to 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(years: i64) -> Result<Self, CoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&years) {
            Ok(Self(years as u8))
        } else {
            Err(CoreError::OutOfRange {
                field: "age",
                value: years,
                min: Self::MIN as i64,
                max: Self::MAX as i64,
            })
        }
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

impl Default for Age {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<i64> for Age {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

choice_enum! {
    /// Language the patient prefers to read.
    Language, "language" {
        English => "English",
        Hindi => "Hindi",
        Punjabi => "Punjabi",
        Odiya => "Odiya",
        Marathi => "Marathi",
        Bengali => "Bengali",
        Korean => "Korean",
        Chinese => "Chinese",
        Japanese => "Japanese",
    }
}

impl Language {
    pub fn is_english(self) -> bool {
        self == Language::English
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

/// Highest completed level of schooling. The long label is what the
/// generator sees.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum EducationLevel {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

impl Choice for EducationLevel {
    const KIND: &'static str = "education level";

    fn all() -> &'static [Self] {
        &[
            EducationLevel::Primary,
            EducationLevel::Secondary,
            EducationLevel::Tertiary,
        ]
    }

    fn value(self) -> &'static str {
        match self {
            EducationLevel::Primary => "Primary",
            EducationLevel::Secondary => "Secondary",
            EducationLevel::Tertiary => "Tertiary",
        }
    }

    fn label(self) -> &'static str {
        match self {
            EducationLevel::Primary => "Primary (upto grade 5)",
            EducationLevel::Secondary => "Secondary (upto High School)",
            EducationLevel::Tertiary => "Tertiary (> High School)",
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Demographics collected on the generator form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInput {
    pub age: Age,
    pub language: Language,
    pub education_level: EducationLevel,
}
