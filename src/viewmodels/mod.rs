pub mod fetch_orchestrator;
pub mod filter_form;
pub mod prescription_sorter;

pub use fetch_orchestrator::FetchOrchestrator;
pub use filter_form::{FilterFormController, FilterLayout, OptionEntry};
pub use prescription_sorter::{appointment_timestamp, sort_newest_first};
