use serde::{Deserialize, Serialize};

/// Donor sex as collected by the questionnaire. Drives the hemoglobin
/// threshold and whether the pregnancy question applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Raw answers from one questionnaire session.
///
/// Numeric fields stay as the raw strings the form collected; the evaluator
/// owns parsing so that a malformed value fails its range check instead of
/// aborting evaluation. The yes/no fields are likewise uninterpreted strings
/// because each rule defines its own polarity (general health requires an
/// exact "yes", the risk-factor questions disqualify on anything but "no").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonorAnswers {
    pub age: String,
    pub weight: String,
    pub sex: Sex,
    pub hemoglobin: String,
    pub systolic: String,
    pub diastolic: String,
    pub pulse: String,
    pub general_health: String,
    pub medical_history: String,
    pub medications: String,
    pub travel_history: String,
    pub tattoos_piercings: String,
    pub pregnancy: String,
    pub recent_donation: String,
    pub recent_illness: String,
    pub lifestyle: String,
}

impl Default for DonorAnswers {
    fn default() -> Self {
        Self {
            age: String::new(),
            weight: String::new(),
            sex: Sex::Male,
            hemoglobin: String::new(),
            systolic: String::new(),
            diastolic: String::new(),
            pulse: String::new(),
            general_health: "yes".to_string(),
            medical_history: "no".to_string(),
            medications: "no".to_string(),
            travel_history: "no".to_string(),
            tattoos_piercings: "no".to_string(),
            pregnancy: "no".to_string(),
            recent_donation: "no".to_string(),
            recent_illness: "no".to_string(),
            lifestyle: "no".to_string(),
        }
    }
}
