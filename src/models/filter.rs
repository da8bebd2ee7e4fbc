use serde::{Deserialize, Serialize};

/// (patientId, doctorId) pair sent as the body of `POST /prescriptions`.
/// An empty id means "no constraint".
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub doctor_id: String,
}

impl FilterSelection {
    pub fn new(patient_id: impl Into<String>, doctor_id: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.patient_id.is_empty() && self.doctor_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_backend_field_names() {
        let body = serde_json::to_value(FilterSelection::new("p1", "")).unwrap();
        assert_eq!(body, serde_json::json!({ "patientId": "p1", "doctorId": "" }));
    }

    #[test]
    fn default_is_unfiltered() {
        assert!(FilterSelection::default().is_unfiltered());
        assert!(!FilterSelection::new("", "d2").is_unfiltered());
    }
}
