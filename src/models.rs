//! Frontend Models
//!
//! Data structures matching the prediction API payloads, plus the
//! client-held form and session state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Authenticated user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// `GET /current_user` payload.
///
/// The flag is optional because a plain 200 from the session endpoint
/// already implies authentication; an explicit `false` still wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "isAuthenticated", default)]
    pub is_authenticated: Option<bool>,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

/// Session state as the server last reported it.
///
/// Re-derived on every route change; the server is the source of truth, so
/// this is never cached across navigations. Any fetch failure collapses to
/// `Anonymous` (fail closed).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn from_current_user(payload: CurrentUser) -> Self {
        if payload.is_authenticated.unwrap_or(true) {
            Session::Authenticated(User {
                id: payload.id,
                username: payload.username,
            })
        } else {
            Session::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// Clinical input field names, in form order. These are also the multipart
/// field names the predict endpoint expects.
pub const INPUT_FIELDS: [&str; 8] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Prediction form state. Fields stay strings so emptiness mirrors the
/// inputs exactly; the server owns numeric validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub skin_thickness: String,
    pub insulin: String,
    pub bmi: String,
    pub pedigree: String,
    pub age: String,
    pub model: String,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            pregnancies: String::new(),
            glucose: String::new(),
            blood_pressure: String::new(),
            skin_thickness: String::new(),
            insulin: String::new(),
            bmi: String::new(),
            pedigree: String::new(),
            age: String::new(),
            model: "best".to_string(),
        }
    }
}

impl PredictionForm {
    pub fn field(&self, name: &str) -> &str {
        match name {
            "Pregnancies" => &self.pregnancies,
            "Glucose" => &self.glucose,
            "BloodPressure" => &self.blood_pressure,
            "SkinThickness" => &self.skin_thickness,
            "Insulin" => &self.insulin,
            "BMI" => &self.bmi,
            "DiabetesPedigreeFunction" => &self.pedigree,
            "Age" => &self.age,
            _ => "",
        }
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "Pregnancies" => self.pregnancies = value,
            "Glucose" => self.glucose = value,
            "BloodPressure" => self.blood_pressure = value,
            "SkinThickness" => self.skin_thickness = value,
            "Insulin" => self.insulin = value,
            "BMI" => self.bmi = value,
            "DiabetesPedigreeFunction" => self.pedigree = value,
            "Age" => self.age = value,
            _ => {}
        }
    }

    /// Required-field check: everything except the model selector must be
    /// non-empty. Returns one error per missing field.
    pub fn validate(&self) -> BTreeMap<&'static str, &'static str> {
        let mut errors = BTreeMap::new();
        for name in INPUT_FIELDS {
            if self.field(name).is_empty() {
                errors.insert(name, "This field is required");
            }
        }
        errors
    }
}

/// `POST /predict` success payload, also carried to the result route via
/// navigation state (hence the camelCase rename with a wire alias).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub result: String,
    pub probability: f64,
    #[serde(rename = "modelUsed", alias = "model_used")]
    pub model_used: String,
}

/// One row of `GET /predictions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub prediction: String,
    pub model: String,
    pub probability: Option<f64>,
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

/// `GET /prediction_stats` payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictionStats {
    #[serde(default)]
    pub total_predictions: u64,
    #[serde(default)]
    pub diabetic_predictions: u64,
    #[serde(default)]
    pub non_diabetic_predictions: u64,
}

/// Per-model metric set from `GET /model_metrics`; only accuracy feeds the
/// bar chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    #[serde(rename = "Accuracy", default)]
    pub accuracy: f64,
}

/// `GET /model_metrics`, keyed by model name. BTreeMap keeps chart label
/// order stable.
pub type ModelMetrics = BTreeMap<String, MetricSet>;

/// `GET /feature_importance`: one importance vector per model.
pub type FeatureImportance = BTreeMap<String, Vec<f64>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PredictionForm {
        let mut form = PredictionForm::default();
        for (name, value) in [
            ("Pregnancies", "2"),
            ("Glucose", "130"),
            ("BloodPressure", "70"),
            ("SkinThickness", "20"),
            ("Insulin", "80"),
            ("BMI", "28.5"),
            ("DiabetesPedigreeFunction", "0.5"),
            ("Age", "35"),
        ] {
            form.set_field(name, value.to_string());
        }
        form
    }

    #[test]
    fn test_validate_complete_form() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_each_missing_field() {
        for name in INPUT_FIELDS {
            let mut form = filled_form();
            form.set_field(name, String::new());
            let errors = form.validate();
            assert_eq!(errors.len(), 1, "only {name} should be missing");
            assert_eq!(errors.get(name), Some(&"This field is required"));
        }
    }

    #[test]
    fn test_validate_ignores_model_selector() {
        let mut form = filled_form();
        form.model = String::new();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_session_from_authenticated_payload() {
        let session = Session::from_current_user(CurrentUser {
            is_authenticated: Some(true),
            id: 7,
            username: "ada".to_string(),
        });
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("ada"));
    }

    #[test]
    fn test_session_respects_explicit_false() {
        let session = Session::from_current_user(CurrentUser {
            is_authenticated: Some(false),
            id: 0,
            username: String::new(),
        });
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_session_defaults_to_authenticated_on_plain_payload() {
        // A bare {id, username} 200 means the session cookie was accepted.
        let payload: CurrentUser =
            serde_json::from_str(r#"{"id": 3, "username": "grace"}"#).unwrap();
        assert!(Session::from_current_user(payload).is_authenticated());
    }

    #[test]
    fn test_outcome_accepts_wire_and_state_spellings() {
        let wire: PredictionOutcome = serde_json::from_str(
            r#"{"result": "Diabetic", "probability": 0.73, "model_used": "RandomForest"}"#,
        )
        .unwrap();
        assert_eq!(wire.model_used, "RandomForest");

        let state = serde_json::to_string(&wire).unwrap();
        assert!(state.contains("modelUsed"));
        let back: PredictionOutcome = serde_json::from_str(&state).unwrap();
        assert_eq!(back, wire);
    }
}
