use serde::{Deserialize, Serialize};
use ts_rs::TS;

choice_enum! {
    /// Retinal diagnoses the generator can write about.
    Diagnosis, "diagnosis" {
        DiabeticRetinopathy => "Diabetic Retinopathy",
        AgeRelatedMacularDegeneration => "Age-related Macular Degeneration",
        RetinalDetachment => "Retinal Detachment",
        CentralSerousChorioretinopathy => "Central Serous Chorio-retinopathy",
        DiabeticMacularEdema => "Diabetic Macular Edema",
        RetinalVeinOcclusion => "Retinal Vein Occlusion",
    }
}

impl Default for Diagnosis {
    fn default() -> Self {
        Diagnosis::DiabeticRetinopathy
    }
}

choice_enum! {
    /// A section the patient material should contain.
    ContentSection, "content section" {
        DiseaseOverview => "Disease Overview",
        TreatmentOptions => "Treatment Options",
        LifestyleModifications => "Lifestyle Modifications",
        FollowUpCare => "Follow-up Care",
        EmergencySigns => "Emergency Signs",
        DietaryRecommendations => "Dietary Recommendations",
        VisualAidsAndRehabilitation => "Visual Aids and Rehabilitation",
    }
}

/// Ordered set of requested sections.
///
/// Keeps the order in which sections were picked and drops repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(from = "Vec<ContentSection>", into = "Vec<ContentSection>")]
#[ts(export)]
pub struct SectionSelection(Vec<ContentSection>);

impl SectionSelection {
    pub fn iter(&self) -> impl Iterator<Item = ContentSection> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-separated labels in selection order.
    pub fn joined(&self) -> String {
        self.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<ContentSection>> for SectionSelection {
    fn from(sections: Vec<ContentSection>) -> Self {
        let mut unique = Vec::with_capacity(sections.len());
        for section in sections {
            if !unique.contains(&section) {
                unique.push(section);
            }
        }
        Self(unique)
    }
}

impl From<SectionSelection> for Vec<ContentSection> {
    fn from(selection: SectionSelection) -> Self {
        selection.0
    }
}

impl Default for SectionSelection {
    fn default() -> Self {
        Self(vec![
            ContentSection::DiseaseOverview,
            ContentSection::TreatmentOptions,
        ])
    }
}

/// Clinical findings collected on the generator form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalInput {
    pub diagnosis: Diagnosis,
    pub visual_acuity_right_eye: String,
    pub visual_acuity_left_eye: String,
    #[serde(default)]
    pub oct_findings: String,
    #[serde(default)]
    pub sections: SectionSelection,
}

impl Default for ClinicalInput {
    fn default() -> Self {
        Self {
            diagnosis: Diagnosis::default(),
            visual_acuity_right_eye: "6/6".to_string(),
            visual_acuity_left_eye: "6/6".to_string(),
            oct_findings: String::new(),
            sections: SectionSelection::default(),
        }
    }
}
