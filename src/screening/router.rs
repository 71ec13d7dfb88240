use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::DonorAnswers;
use super::evaluation::{DeferralReason, EligibilityEvaluator};

/// Router builder exposing HTTP endpoints for eligibility checks.
pub fn screening_router(evaluator: Arc<EligibilityEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/screening/eligibility", post(check_handler))
        .route("/api/v1/screening/criteria", get(criteria_handler))
        .with_state(evaluator)
}

#[derive(Debug, Serialize)]
struct EligibilityCheckResponse {
    eligible: bool,
    reasons: Vec<DeferralReason>,
    summary: String,
    checked_at: DateTime<Utc>,
}

/// Evaluation is total, so this endpoint always answers 200 with a verdict.
/// Missing fields deserialize to the questionnaire defaults, matching a
/// partially filled form.
pub(crate) async fn check_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
    axum::Json(answers): axum::Json<DonorAnswers>,
) -> Response {
    let verdict = evaluator.evaluate(&answers);
    tracing::info!(
        eligible = verdict.eligible,
        deferrals = verdict.reasons.len(),
        "questionnaire evaluated"
    );

    let payload = EligibilityCheckResponse {
        eligible: verdict.eligible,
        summary: verdict.summary(),
        reasons: verdict.reasons,
        checked_at: Utc::now(),
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn criteria_handler(
    State(evaluator): State<Arc<EligibilityEvaluator>>,
) -> Response {
    (
        StatusCode::OK,
        axum::Json(evaluator.criteria().clone()),
    )
        .into_response()
}
