use serde::{Deserialize, Serialize};

use super::domain::DonorAnswers;
use super::evaluation::{EligibilityEvaluator, EligibilityVerdict};

/// Where a questionnaire session currently stands.
///
/// Page one collects vitals, page two the health-history questions, and
/// `Evaluated` is terminal for the submission until the verdict is
/// dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Vitals,
    HealthHistory,
    Evaluated,
}

impl SessionState {
    pub const fn label(self) -> &'static str {
        match self {
            SessionState::Vitals => "vitals",
            SessionState::HealthHistory => "health_history",
            SessionState::Evaluated => "evaluated",
        }
    }
}

/// Error raised on an illegal session transition or mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot move from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
    #[error("answers are frozen once the questionnaire has been evaluated")]
    AnswersFrozen,
    #[error("questionnaire must be submitted from the final page")]
    NotOnFinalPage,
}

/// One donor's pass through the two-page questionnaire.
///
/// Answers mutate field-by-field while the session is in progress and are
/// consumed exactly once on submission. The session holds the verdict only
/// for presentation; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireSession {
    state: SessionState,
    answers: DonorAnswers,
    verdict: Option<EligibilityVerdict>,
}

impl QuestionnaireSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Vitals,
            answers: DonorAnswers::default(),
            verdict: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &DonorAnswers {
        &self.answers
    }

    /// Mutable access to the form fields, refused once evaluated.
    pub fn answers_mut(&mut self) -> Result<&mut DonorAnswers, SessionError> {
        match self.state {
            SessionState::Evaluated => Err(SessionError::AnswersFrozen),
            _ => Ok(&mut self.answers),
        }
    }

    pub fn next_page(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Vitals => {
                self.state = SessionState::HealthHistory;
                Ok(())
            }
            other => Err(SessionError::InvalidTransition {
                from: other.label(),
                to: SessionState::HealthHistory.label(),
            }),
        }
    }

    pub fn previous_page(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::HealthHistory => {
                self.state = SessionState::Vitals;
                Ok(())
            }
            other => Err(SessionError::InvalidTransition {
                from: other.label(),
                to: SessionState::Vitals.label(),
            }),
        }
    }

    /// Submit the questionnaire from the final page and record the verdict.
    pub fn submit(
        &mut self,
        evaluator: &EligibilityEvaluator,
    ) -> Result<EligibilityVerdict, SessionError> {
        match self.state {
            SessionState::HealthHistory => {
                let verdict = evaluator.evaluate(&self.answers);
                self.state = SessionState::Evaluated;
                self.verdict = Some(verdict.clone());
                Ok(verdict)
            }
            SessionState::Vitals => Err(SessionError::NotOnFinalPage),
            SessionState::Evaluated => Err(SessionError::InvalidTransition {
                from: SessionState::Evaluated.label(),
                to: SessionState::Evaluated.label(),
            }),
        }
    }

    pub fn verdict(&self) -> Option<&EligibilityVerdict> {
        self.verdict.as_ref()
    }

    /// Dismiss the verdict and start over with a cleared form.
    pub fn dismiss(&mut self) {
        *self = Self::new();
    }
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new()
    }
}
