use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Owning user record embedded in patients and doctors (`userId` on the wire)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Shared shape of a patient or doctor list entry
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PersonRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user: UserRef,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonRecord {
    /// "First Last", as shown in the filter selects
    pub fn display_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct Patient(pub PersonRecord);

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct Doctor(pub PersonRecord);

/// Anything that can be listed as an option of a filter select
pub trait SelectOption {
    fn option_value(&self) -> &str;
    fn option_label(&self) -> String;
}

impl SelectOption for Patient {
    fn option_value(&self) -> &str {
        &self.0.id
    }

    fn option_label(&self) -> String {
        self.0.display_name()
    }
}

impl SelectOption for Doctor {
    fn option_value(&self) -> &str {
        &self.0.id
    }

    fn option_label(&self) -> String {
        self.0.display_name()
    }
}
