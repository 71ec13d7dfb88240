use serde::{Deserialize, Serialize};

/// Threshold configuration for the eligibility checklist.
///
/// Defaults match standard whole-blood donation criteria; deployments can
/// override individual thresholds without touching the rules themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    pub min_age: i64,
    pub max_age: i64,
    /// Age that triggers the parental-consent message instead of the
    /// generic out-of-range one.
    pub parental_consent_age: i64,
    pub min_weight_kg: f64,
    pub min_hemoglobin_male: f64,
    pub min_hemoglobin_female: f64,
    pub min_systolic: i64,
    pub max_systolic: i64,
    pub min_diastolic: i64,
    pub max_diastolic: i64,
    pub min_pulse: i64,
    pub max_pulse: i64,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            min_age: 17,
            max_age: 65,
            parental_consent_age: 16,
            min_weight_kg: 50.0,
            min_hemoglobin_male: 13.0,
            min_hemoglobin_female: 12.5,
            min_systolic: 90,
            max_systolic: 140,
            min_diastolic: 60,
            max_diastolic: 90,
            min_pulse: 50,
            max_pulse: 100,
        }
    }
}
