pub mod api_client;
pub mod session_service;

pub use api_client::{ClinicApi, HttpClinicApi};
pub use session_service::{load_credential, load_current_user};
