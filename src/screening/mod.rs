//! Donor eligibility screening: questionnaire domain, the checklist
//! evaluator, the two-page session state machine, and the HTTP surface.

pub mod domain;
pub mod evaluation;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{DonorAnswers, Sex};
pub use evaluation::{
    Criterion, DeferralReason, EligibilityEvaluator, EligibilityVerdict, ScreeningCriteria,
};
pub use router::screening_router;
pub use session::{QuestionnaireSession, SessionError, SessionState};
