use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn check_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/screening/eligibility")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request")
}

#[tokio::test]
async fn post_eligibility_returns_eligible_verdict() {
    let app = screening_app();
    let payload = serde_json::to_value(eligible_answers()).expect("serialize answers");

    let response = app
        .oneshot(check_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("eligible"), Some(&json!(true)));
    assert_eq!(body.get("reasons"), Some(&json!([])));
    assert!(body.get("checked_at").is_some());
}

#[tokio::test]
async fn post_eligibility_lists_deferral_reasons() {
    let app = screening_app();
    let mut answers = eligible_female_answers();
    answers.pregnancy = "yes".to_string();
    answers.recent_donation = "yes".to_string();
    let payload = serde_json::to_value(answers).expect("serialize answers");

    let response = app
        .oneshot(check_request(&payload))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("eligible"), Some(&json!(false)));

    let reasons = body
        .get("reasons")
        .and_then(Value::as_array)
        .expect("reasons array");
    assert_eq!(reasons.len(), 2);
    assert_eq!(reasons[0].get("criterion"), Some(&json!("pregnancy")));
    assert_eq!(reasons[1].get("criterion"), Some(&json!("recent_donation")));

    let summary = body
        .get("summary")
        .and_then(Value::as_str)
        .expect("summary string");
    assert!(summary.contains("not eligible"));
}

#[tokio::test]
async fn post_eligibility_defaults_missing_fields() {
    let app = screening_app();

    // An empty body evaluates like an untouched form: the numeric rules fail
    // closed, the yes/no defaults pass.
    let response = app
        .oneshot(check_request(&json!({})))
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("eligible"), Some(&json!(false)));
    let reasons = body
        .get("reasons")
        .and_then(Value::as_array)
        .expect("reasons array");
    assert_eq!(reasons.len(), 5);
    assert_eq!(reasons[0].get("criterion"), Some(&json!("age")));
}

#[tokio::test]
async fn get_criteria_returns_active_thresholds() {
    let app = screening_app();

    let response = app
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
    let body = read_json_body(response).await;
    assert_eq!(body.get("min_age"), Some(&json!(17)));
    assert_eq!(body.get("max_age"), Some(&json!(65)));
    assert_eq!(body.get("min_weight_kg"), Some(&json!(50.0)));
    assert_eq!(body.get("min_hemoglobin_female"), Some(&json!(12.5)));
}
