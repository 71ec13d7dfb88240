mod config;
mod rules;

pub use config::ScreeningCriteria;

use super::domain::DonorAnswers;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies the screening criteria to one set of
/// questionnaire answers.
///
/// Evaluation is pure and total: it performs no I/O, never panics on
/// malformed input, and identical answers always produce identical verdicts.
pub struct EligibilityEvaluator {
    criteria: ScreeningCriteria,
}

impl EligibilityEvaluator {
    pub fn new(criteria: ScreeningCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &ScreeningCriteria {
        &self.criteria
    }

    pub fn evaluate(&self, answers: &DonorAnswers) -> EligibilityVerdict {
        let reasons = rules::run_checklist(answers, &self.criteria);
        EligibilityVerdict {
            eligible: reasons.is_empty(),
            reasons,
        }
    }
}

impl Default for EligibilityEvaluator {
    fn default() -> Self {
        Self::new(ScreeningCriteria::default())
    }
}

/// Checklist rule that produced a deferral, allowing transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Age,
    Weight,
    Hemoglobin,
    BloodPressure,
    Pulse,
    GeneralHealth,
    MedicalHistory,
    Medications,
    TravelHistory,
    TattoosPiercings,
    Pregnancy,
    RecentDonation,
    RecentIllness,
    Lifestyle,
}

/// One disqualifying finding: the rule that fired plus its donor-facing
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferralReason {
    pub criterion: Criterion,
    pub message: String,
}

impl DeferralReason {
    pub(crate) fn new(criterion: Criterion, message: String) -> Self {
        Self { criterion, message }
    }
}

/// Evaluation output: eligible iff no rule fired. Reasons keep checklist
/// order and are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reasons: Vec<DeferralReason>,
}

impl EligibilityVerdict {
    /// Donor-facing explanation, matching the questionnaire's result modal.
    pub fn summary(&self) -> String {
        if self.eligible {
            "You are eligible to donate blood.".to_string()
        } else {
            format!(
                "Unfortunately, you are not eligible to donate blood. {}",
                self.messages().join(" ")
            )
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.reasons
            .iter()
            .map(|reason| reason.message.as_str())
            .collect()
    }
}
