use super::super::domain::{DonorAnswers, Sex};
use super::config::ScreeningCriteria;
use super::{Criterion, DeferralReason};

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Fail-closed range test: an unparseable value never satisfies the check.
fn within(value: Option<i64>, min: i64, max: i64) -> bool {
    value.map(|v| v >= min && v <= max).unwrap_or(false)
}

fn at_least(value: Option<f64>, min: f64) -> bool {
    value.map(|v| v >= min).unwrap_or(false)
}

fn answered_no(raw: &str) -> bool {
    raw == "no"
}

/// Run the full checklist, appending zero or one reason per rule.
///
/// Every rule runs regardless of earlier failures, and reasons keep the
/// checklist order so the rendered explanation is stable.
pub(crate) fn run_checklist(
    answers: &DonorAnswers,
    criteria: &ScreeningCriteria,
) -> Vec<DeferralReason> {
    let mut reasons = Vec::new();

    let age = parse_integer(&answers.age);
    if !within(age, criteria.min_age, criteria.max_age) {
        if age == Some(criteria.parental_consent_age) {
            reasons.push(DeferralReason::new(
                Criterion::Age,
                format!(
                    "Parental consent required for donors aged {}.",
                    criteria.parental_consent_age
                ),
            ));
        } else {
            reasons.push(DeferralReason::new(
                Criterion::Age,
                format!(
                    "Age must be between {} and {}.",
                    criteria.min_age, criteria.max_age
                ),
            ));
        }
    }

    if !at_least(parse_decimal(&answers.weight), criteria.min_weight_kg) {
        reasons.push(DeferralReason::new(
            Criterion::Weight,
            "Weight must be at least 50 kg (110 lbs).".to_string(),
        ));
    }

    let min_hemoglobin = match answers.sex {
        Sex::Male => criteria.min_hemoglobin_male,
        Sex::Female => criteria.min_hemoglobin_female,
    };
    if !at_least(parse_decimal(&answers.hemoglobin), min_hemoglobin) {
        reasons.push(DeferralReason::new(
            Criterion::Hemoglobin,
            "Hemoglobin levels are below the minimum required.".to_string(),
        ));
    }

    let systolic_ok = within(
        parse_integer(&answers.systolic),
        criteria.min_systolic,
        criteria.max_systolic,
    );
    let diastolic_ok = within(
        parse_integer(&answers.diastolic),
        criteria.min_diastolic,
        criteria.max_diastolic,
    );
    if !(systolic_ok && diastolic_ok) {
        reasons.push(DeferralReason::new(
            Criterion::BloodPressure,
            "Blood pressure is outside the acceptable range.".to_string(),
        ));
    }

    if !within(
        parse_integer(&answers.pulse),
        criteria.min_pulse,
        criteria.max_pulse,
    ) {
        reasons.push(DeferralReason::new(
            Criterion::Pulse,
            "Pulse rate is outside the acceptable range.".to_string(),
        ));
    }

    if answers.general_health != "yes" {
        reasons.push(DeferralReason::new(
            Criterion::GeneralHealth,
            "Donor should be in good general health.".to_string(),
        ));
    }

    if !answered_no(&answers.medical_history) {
        reasons.push(DeferralReason::new(
            Criterion::MedicalHistory,
            "Certain medical conditions disqualify you from donating blood.".to_string(),
        ));
    }

    if !answered_no(&answers.medications) {
        reasons.push(DeferralReason::new(
            Criterion::Medications,
            "Certain medications disqualify you from donating blood.".to_string(),
        ));
    }

    if !answered_no(&answers.travel_history) {
        reasons.push(DeferralReason::new(
            Criterion::TravelHistory,
            "Recent travel may temporarily defer you from donating blood.".to_string(),
        ));
    }

    if !answered_no(&answers.tattoos_piercings) {
        reasons.push(DeferralReason::new(
            Criterion::TattoosPiercings,
            "Must wait at least 12 months after a tattoo or piercing.".to_string(),
        ));
    }

    // Only asked of female donors; ignored entirely for male donors.
    if answers.sex == Sex::Female && !answered_no(&answers.pregnancy) {
        reasons.push(DeferralReason::new(
            Criterion::Pregnancy,
            "Pregnant women are not eligible to donate blood.".to_string(),
        ));
    }

    if !answered_no(&answers.recent_donation) {
        reasons.push(DeferralReason::new(
            Criterion::RecentDonation,
            "Must wait at least 8 weeks between whole blood donations.".to_string(),
        ));
    }

    if !answered_no(&answers.recent_illness) {
        reasons.push(DeferralReason::new(
            Criterion::RecentIllness,
            "Recent illnesses may temporarily defer you from donating blood.".to_string(),
        ));
    }

    if !answered_no(&answers.lifestyle) {
        reasons.push(DeferralReason::new(
            Criterion::Lifestyle,
            "High-risk behaviors may disqualify you from donating blood.".to_string(),
        ));
    }

    reasons
}
