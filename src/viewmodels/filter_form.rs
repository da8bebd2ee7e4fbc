// ============================================================================
// FILTER FORM VIEWMODEL - Patient / doctor selects of the prescription list
// ============================================================================
// Seeded once from the query string, then driven by the user. No DOM here:
// the view asks for the layout and forwards select changes and submits.
// ============================================================================

use crate::models::{FilterSelection, Role, SelectOption};
use crate::utils::query::query_param;
use crate::utils::{DOCTOR_ID_PARAM, PATIENT_ID_PARAM};

/// Which controls the form shows for a role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterLayout {
    /// Read-only list (patients)
    Hidden,
    PatientOnly,
    PatientAndDoctor,
}

impl FilterLayout {
    pub fn for_role(role: Role) -> Self {
        if !role.shows_filter_form() {
            FilterLayout::Hidden
        } else if role.can_filter_by_doctor() {
            FilterLayout::PatientAndDoctor
        } else {
            FilterLayout::PatientOnly
        }
    }

    pub fn is_visible(self) -> bool {
        self != FilterLayout::Hidden
    }

    pub fn shows_doctor_select(self) -> bool {
        self == FilterLayout::PatientAndDoctor
    }
}

/// One `<option>` of a select
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct FilterFormController {
    role: Role,
    selection: FilterSelection,
}

impl FilterFormController {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            selection: FilterSelection::default(),
        }
    }

    /// Controller seeded from `?patientId=..&doctorId=..`
    pub fn from_query(role: Role, search: &str) -> Self {
        let mut controller = Self::new(role);
        controller.seed_from_query(search);
        controller
    }

    /// Values are forwarded as-is, even ids the lists do not contain
    pub fn seed_from_query(&mut self, search: &str) {
        if let Some(patient_id) = query_param(search, PATIENT_ID_PARAM) {
            self.selection.patient_id = patient_id;
        }
        if let Some(doctor_id) = query_param(search, DOCTOR_ID_PARAM) {
            self.selection.doctor_id = doctor_id;
        }
        log::info!(
            "🔎 [FILTER] Seeded from query: patientId='{}', doctorId='{}'",
            self.selection.patient_id,
            self.selection.doctor_id
        );
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn layout(&self) -> FilterLayout {
        FilterLayout::for_role(self.role)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn select_patient(&mut self, patient_id: impl Into<String>) {
        self.selection.patient_id = patient_id.into();
    }

    /// Ignored unless the role may filter by doctor
    pub fn select_doctor(&mut self, doctor_id: impl Into<String>) {
        if !self.layout().shows_doctor_select() {
            log::warn!("⚠️ [FILTER] Doctor selection ignored for role {:?}", self.role);
            return;
        }
        self.selection.doctor_id = doctor_id.into();
    }

    /// Filter to send with the next prescription query
    pub fn submit(&self) -> FilterSelection {
        log::info!(
            "🔎 [FILTER] Submit: patientId='{}', doctorId='{}'",
            self.selection.patient_id,
            self.selection.doctor_id
        );
        self.selection.clone()
    }

    pub fn patient_options<T: SelectOption>(&self, records: &[T]) -> Vec<OptionEntry> {
        build_options("Choose Patient", records, &self.selection.patient_id)
    }

    pub fn doctor_options<T: SelectOption>(&self, records: &[T]) -> Vec<OptionEntry> {
        build_options("Choose Doctor", records, &self.selection.doctor_id)
    }
}

/// Placeholder with empty value, then one option per record
fn build_options<T: SelectOption>(placeholder: &str, records: &[T], selected: &str) -> Vec<OptionEntry> {
    let mut options = Vec::with_capacity(records.len() + 1);
    options.push(OptionEntry {
        value: String::new(),
        label: placeholder.to_string(),
        selected: selected.is_empty(),
    });
    options.extend(records.iter().map(|record| OptionEntry {
        value: record.option_value().to_string(),
        label: record.option_label(),
        selected: record.option_value() == selected,
    }));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Doctor, Patient, PersonRecord, UserRef};
    use serde_json::Map;

    fn person(id: &str, first: &str, last: &str) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            user: UserRef {
                id: None,
                first_name: first.to_string(),
                last_name: last.to_string(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    #[test]
    fn layout_follows_role_capabilities() {
        assert_eq!(FilterLayout::for_role(Role::Patient), FilterLayout::Hidden);
        assert_eq!(FilterLayout::for_role(Role::Doctor), FilterLayout::PatientOnly);
        assert_eq!(FilterLayout::for_role(Role::Unknown), FilterLayout::PatientOnly);
        assert_eq!(FilterLayout::for_role(Role::Admin), FilterLayout::PatientAndDoctor);
        assert!(!FilterLayout::Hidden.is_visible());
        assert!(FilterLayout::PatientAndDoctor.shows_doctor_select());
    }

    #[test]
    fn query_seeds_both_fields() {
        let form = FilterFormController::from_query(Role::Admin, "?patientId=p7&doctorId=d3");
        assert_eq!(form.selection(), &FilterSelection::new("p7", "d3"));
    }

    #[test]
    fn no_query_means_unfiltered() {
        let form = FilterFormController::from_query(Role::Patient, "");
        assert!(form.submit().is_unfiltered());
    }

    #[test]
    fn admin_selection_is_submitted_verbatim() {
        let mut form = FilterFormController::from_query(Role::Admin, "?patientId=p7");
        form.select_patient("p1");
        form.select_doctor("d2");
        assert_eq!(form.submit(), FilterSelection::new("p1", "d2"));
    }

    #[test]
    fn unmatched_ids_are_not_validated() {
        let mut form = FilterFormController::new(Role::Admin);
        form.select_patient("does-not-exist");
        assert_eq!(form.submit().patient_id, "does-not-exist");
    }

    #[test]
    fn doctor_role_cannot_pick_a_doctor() {
        let mut form = FilterFormController::new(Role::Doctor);
        form.select_doctor("d2");
        assert_eq!(form.submit(), FilterSelection::default());
    }

    #[test]
    fn options_start_with_placeholder_and_mark_selection() {
        let patients = vec![
            Patient(person("p1", "Ada", "Lovelace")),
            Patient(person("p2", "Alan", "Turing")),
        ];
        let mut form = FilterFormController::new(Role::Admin);
        form.select_patient("p2");

        let options = form.patient_options(&patients);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "Choose Patient");
        assert_eq!(options[0].value, "");
        assert!(!options[0].selected);
        assert_eq!(options[2].label, "Alan Turing");
        assert!(options[2].selected);

        let doctors = vec![Doctor(person("d1", "Gregory", "House"))];
        let options = form.doctor_options(&doctors);
        assert_eq!(options[0].label, "Choose Doctor");
        assert!(options[0].selected);
        assert_eq!(options[1].value, "d1");
    }
}
