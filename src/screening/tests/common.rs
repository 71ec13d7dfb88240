use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{DonorAnswers, Sex};
use crate::screening::evaluation::{EligibilityEvaluator, ScreeningCriteria};
use crate::screening::router::screening_router;

/// Male donor satisfying every threshold.
pub(super) fn eligible_answers() -> DonorAnswers {
    DonorAnswers {
        age: "34".to_string(),
        weight: "70".to_string(),
        sex: Sex::Male,
        hemoglobin: "14.1".to_string(),
        systolic: "120".to_string(),
        diastolic: "80".to_string(),
        pulse: "72".to_string(),
        ..DonorAnswers::default()
    }
}

pub(super) fn eligible_female_answers() -> DonorAnswers {
    DonorAnswers {
        sex: Sex::Female,
        hemoglobin: "13.2".to_string(),
        ..eligible_answers()
    }
}

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::new(ScreeningCriteria::default())
}

pub(super) fn screening_app() -> axum::Router {
    screening_router(Arc::new(evaluator()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
