/// Backend endpoints (relative to CONFIG.backend_url())
pub const PATIENTS_PATH: &str = "/patients";
pub const DOCTORS_PATH: &str = "/doctors";
pub const PRESCRIPTIONS_PATH: &str = "/prescriptions";

/// Query string keys that seed the filter form
pub const PATIENT_ID_PARAM: &str = "patientId";
pub const DOCTOR_ID_PARAM: &str = "doctorId";

/// DOM event dispatched on `window` after a new prescription list is committed
pub const PRESCRIPTIONS_UPDATED_EVENT: &str = "prescriptionsUpdated";
