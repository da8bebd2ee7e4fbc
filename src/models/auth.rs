use serde::{Deserialize, Serialize};

/// Access class of the logged-in user (`userType` on the wire)
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Patients get a read-only list
    pub fn shows_filter_form(self) -> bool {
        !matches!(self, Role::Patient)
    }

    pub fn can_filter_by_doctor(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// User record stored by the login screen
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(default)]
    pub user_type: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Bearer token sent with the prescription query
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SessionCredential {
    token: String,
}

impl SessionCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    /// Value of the `authorization` header
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capabilities_by_role() {
        assert!(Role::Admin.shows_filter_form());
        assert!(Role::Admin.can_filter_by_doctor());
        assert!(Role::Doctor.shows_filter_form());
        assert!(!Role::Doctor.can_filter_by_doctor());
        assert!(!Role::Patient.shows_filter_form());
        assert!(!Role::Patient.can_filter_by_doctor());
    }

    #[test]
    fn unrecognised_user_type_decodes_as_unknown() {
        let user: CurrentUser =
            serde_json::from_str(r#"{ "userType": "Receptionist", "firstName": "Sam" }"#).unwrap();
        assert_eq!(user.user_type, Role::Unknown);
        assert_eq!(user.first_name.as_deref(), Some("Sam"));

        let admin: CurrentUser = serde_json::from_str(r#"{ "userType": "Admin" }"#).unwrap();
        assert_eq!(admin.user_type, Role::Admin);
    }

    #[test]
    fn header_uses_bearer_scheme() {
        assert_eq!(SessionCredential::new("abc").authorization_header(), "Bearer abc");
        assert!(SessionCredential::default().is_empty());
    }
}
