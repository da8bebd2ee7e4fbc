pub mod auth;
pub mod filter;
pub mod person;
pub mod prescription;

pub use auth::{CurrentUser, Role, SessionCredential};
pub use filter::FilterSelection;
pub use person::{Doctor, Patient, PersonRecord, SelectOption, UserRef};
pub use prescription::{Appointment, Prescription, PrescriptionsResponse};
