//! End-to-end specifications for the donor screening workflow.
//!
//! Scenarios drive the public evaluator, session, and HTTP router so the
//! eligibility behavior is validated without reaching into private modules.

mod common {
    use std::sync::Arc;

    use donor_screen::screening::{
        screening_router, DonorAnswers, EligibilityEvaluator, ScreeningCriteria, Sex,
    };

    pub(super) fn eligible_answers() -> DonorAnswers {
        DonorAnswers {
            age: "29".to_string(),
            weight: "64".to_string(),
            sex: Sex::Female,
            hemoglobin: "13.4".to_string(),
            systolic: "118".to_string(),
            diastolic: "76".to_string(),
            pulse: "68".to_string(),
            ..DonorAnswers::default()
        }
    }

    pub(super) fn evaluator() -> EligibilityEvaluator {
        EligibilityEvaluator::new(ScreeningCriteria::default())
    }

    pub(super) fn router() -> axum::Router {
        screening_router(Arc::new(evaluator()))
    }
}

mod evaluation {
    use super::common::*;
    use donor_screen::screening::Criterion;

    #[test]
    fn healthy_donor_is_eligible() {
        let verdict = evaluator().evaluate(&eligible_answers());
        assert!(verdict.eligible);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn deferrals_accumulate_across_independent_rules() {
        let mut answers = eligible_answers();
        answers.weight = "48".to_string();
        answers.tattoos_piercings = "yes".to_string();

        let verdict = evaluator().evaluate(&answers);

        assert!(!verdict.eligible);
        let criteria: Vec<Criterion> = verdict
            .reasons
            .iter()
            .map(|reason| reason.criterion)
            .collect();
        assert_eq!(criteria, vec![Criterion::Weight, Criterion::TattoosPiercings]);
    }

    #[test]
    fn unparseable_vitals_never_abort_evaluation() {
        let mut answers = eligible_answers();
        answers.systolic = "12O".to_string();

        let verdict = evaluator().evaluate(&answers);

        assert!(!verdict.eligible);
        assert_eq!(verdict.reasons.len(), 1);
        assert_eq!(verdict.reasons[0].criterion, Criterion::BloodPressure);
    }
}

mod session {
    use super::common::*;
    use donor_screen::screening::{QuestionnaireSession, SessionState};

    #[test]
    fn full_questionnaire_pass_produces_a_verdict() {
        let evaluator = evaluator();
        let mut session = QuestionnaireSession::new();

        *session.answers_mut().expect("form open") = eligible_answers();
        session.next_page().expect("to health history");
        session.previous_page().expect("back to vitals");
        session.next_page().expect("forward again");

        let verdict = session.submit(&evaluator).expect("submission");
        assert!(verdict.eligible);
        assert_eq!(session.state(), SessionState::Evaluated);

        session.dismiss();
        assert_eq!(session.state(), SessionState::Vitals);
        assert!(session.verdict().is_none());
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn eligibility_endpoint_round_trips_a_questionnaire() {
        let router = router();
        let mut answers = eligible_answers();
        answers.recent_illness = "yes".to_string();

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/screening/eligibility")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&answers).expect("serialize answers"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(payload.get("eligible"), Some(&json!(false)));
        let reasons = payload
            .get("reasons")
            .and_then(Value::as_array)
            .expect("reasons");
        assert_eq!(reasons.len(), 1);
        assert_eq!(
            reasons[0].get("message").and_then(Value::as_str),
            Some("Recent illnesses may temporarily defer you from donating blood.")
        );
    }

    #[tokio::test]
    async fn criteria_endpoint_publishes_thresholds() {
        let router = router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/screening/criteria")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("min_pulse"), Some(&json!(50)));
        assert_eq!(payload.get("max_pulse"), Some(&json!(100)));
    }
}
