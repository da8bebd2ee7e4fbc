use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Appointment embedded in a prescription (`appointmentId` on the wire)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// ISO date/datetime or MM/DD/YYYY
    pub appointment_date: String,
    /// Time of day, "10:00", "10:00:30" or "10:00 AM"
    pub appointment_time: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Prescription as returned by the backend. Clinical fields other than the
/// appointment are kept verbatim in `extra` for the table widget.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Prescription {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "appointmentId")]
    pub appointment: Appointment,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope of `POST /prescriptions`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PrescriptionsResponse {
    pub message: String,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}

impl PrescriptionsResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.message == Self::SUCCESS
    }
}
