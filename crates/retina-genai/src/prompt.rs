//! Prompt construction for patient education material.
//!
//! The prompt is a pure function of the two form inputs: the same inputs
//! always produce the same text.

use retina_core::models::clinical::ClinicalInput;
use retina_core::models::patient::PatientInput;

/// Build the generation prompt from the generator form.
///
/// Every patient and clinical field is embedded. The bilingual instruction
/// appears only when the preferred language is not English.
pub fn build_prompt(patient: &PatientInput, clinical: &ClinicalInput) -> String {
    let mut prompt = String::from(
        "Create a colorful, engaging patient education material with emojis and formatting. \
         Use the following patient information:\n\n",
    );

    prompt.push_str("Patient Details:\n");
    prompt.push_str(&format!("- Age: {}\n", patient.age));
    prompt.push_str(&format!("- Preferred Language: {}\n", patient.language));
    prompt.push_str(&format!("- Education Level: {}\n\n", patient.education_level));

    prompt.push_str("Clinical Information:\n");
    prompt.push_str(&format!("- Diagnosis: {}\n", clinical.diagnosis));
    prompt.push_str(&format!(
        "- Visual Acuity RE: {}\n",
        clinical.visual_acuity_right_eye
    ));
    prompt.push_str(&format!(
        "- Visual Acuity LE: {}\n",
        clinical.visual_acuity_left_eye
    ));
    prompt.push_str(&format!("- OCT Findings: {}\n\n", clinical.oct_findings));

    prompt.push_str(&format!(
        "Include these sections: {}\n\n",
        clinical.sections.joined()
    ));

    prompt.push_str(
        "Make the content patient-friendly, using simple language. \
         Add emojis and color indicators using markdown.\n",
    );
    prompt.push_str("Use different colors for different sections (using markdown).\n");
    prompt.push_str("Include a summary at the end.\n");

    if !patient.language.is_english() {
        prompt.push_str(&bilingual_instruction(&patient.language.to_string()));
    }

    prompt
}

fn bilingual_instruction(language: &str) -> String {
    format!(
        "\nProvide the content in both English and {language}: \
         write every section in English followed by its {language} translation.\n"
    )
}
