// ============================================================================
// PRESCRIPTION LIST STATE - Everything the view owns
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Doctor, Patient, Prescription};
use crate::state::ErrorAggregator;

/// Which slice of the state changed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateChange {
    Patients,
    Doctors,
    Prescriptions,
    Errors,
}

type Subscriber = Rc<dyn Fn(StateChange)>;

/// Shared view state. Clones share the same slots.
#[derive(Clone)]
pub struct PrescriptionListState {
    pub patients: Rc<RefCell<Vec<Patient>>>,
    pub doctors: Rc<RefCell<Vec<Doctor>>>,
    /// Already sorted, newest appointment first
    pub prescriptions: Rc<RefCell<Vec<Prescription>>>,
    pub errors: ErrorAggregator,
    change_subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl PrescriptionListState {
    pub fn new(error_title: impl Into<String>) -> Self {
        Self {
            patients: Rc::new(RefCell::new(Vec::new())),
            doctors: Rc::new(RefCell::new(Vec::new())),
            prescriptions: Rc::new(RefCell::new(Vec::new())),
            errors: ErrorAggregator::new(error_title),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_patients(&self, patients: Vec<Patient>) {
        *self.patients.borrow_mut() = patients;
        self.notify_subscribers(StateChange::Patients);
    }

    pub fn get_patients(&self) -> Vec<Patient> {
        self.patients.borrow().clone()
    }

    pub fn set_doctors(&self, doctors: Vec<Doctor>) {
        *self.doctors.borrow_mut() = doctors;
        self.notify_subscribers(StateChange::Doctors);
    }

    pub fn get_doctors(&self) -> Vec<Doctor> {
        self.doctors.borrow().clone()
    }

    pub fn set_prescriptions(&self, prescriptions: Vec<Prescription>) {
        *self.prescriptions.borrow_mut() = prescriptions;
        self.notify_subscribers(StateChange::Prescriptions);
    }

    pub fn get_prescriptions(&self) -> Vec<Prescription> {
        self.prescriptions.borrow().clone()
    }

    pub fn report_error(&self, message: &str) {
        self.errors.report(message);
        self.notify_subscribers(StateChange::Errors);
    }

    pub fn dismiss_errors(&self) {
        self.errors.dismiss();
        self.notify_subscribers(StateChange::Errors);
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(StateChange) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self, change: StateChange) {
        // Snapshot so a subscriber may subscribe/notify without a double borrow
        let subscribers: Vec<Subscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_notify_with_the_changed_slice() {
        let state = PrescriptionListState::new("t");
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            state.subscribe_to_changes(move |change| seen.borrow_mut().push(change));
        }

        state.set_patients(Vec::new());
        state.report_error("Failed to fetch doctors");
        state.dismiss_errors();

        assert_eq!(
            *seen.borrow(),
            vec![StateChange::Patients, StateChange::Errors, StateChange::Errors]
        );
    }

    #[test]
    fn subscriber_may_subscribe_during_notification() {
        let state = PrescriptionListState::new("t");
        let inner = state.clone();
        state.subscribe_to_changes(move |_| inner.subscribe_to_changes(|_| {}));
        state.set_doctors(Vec::new());
        state.set_doctors(Vec::new());
    }
}
