// ============================================================================
// FETCH ERRORS - Failure taxonomy for the three backend retrievals
// ============================================================================

use thiserror::Error;

/// Failure of a single backend round trip
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection refused, DNS, CORS, aborted request...
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    /// Body did not match the expected contract
    #[error("parse error: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("serialization error: {0}")]
    Encode(String),

    /// Response arrived but its success indicator was false
    #[error("server reported failure: {0}")]
    Rejected(String),
}

/// Transport vs protocol failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Protocol,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Rejected(_) => FailureKind::Protocol,
            FetchError::Network(_)
            | FetchError::Status { .. }
            | FetchError::Decode(_)
            | FetchError::Encode(_) => FailureKind::Transport,
        }
    }
}

/// The three logical retrievals of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Patients,
    Doctors,
    Prescriptions,
}

impl Resource {
    /// Message shown in the error dialog for a failed retrieval
    pub fn failure_message(self, kind: FailureKind) -> &'static str {
        match (self, kind) {
            (Resource::Patients, _) => "Failed to fetch patients",
            (Resource::Doctors, _) => "Failed to fetch doctors",
            (Resource::Prescriptions, FailureKind::Protocol) => "Failed to fetch prescriptions",
            (Resource::Prescriptions, FailureKind::Transport) => "Error fetching prescriptions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Patients => "patients",
            Resource::Doctors => "doctors",
            Resource::Prescriptions => "prescriptions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejected_is_a_protocol_failure() {
        assert_eq!(FetchError::Rejected("nope".into()).kind(), FailureKind::Protocol);
        assert_eq!(FetchError::Network("down".into()).kind(), FailureKind::Transport);
        assert_eq!(
            FetchError::Status { status: 500, status_text: "Internal Server Error".into() }.kind(),
            FailureKind::Transport
        );
        assert_eq!(FetchError::Decode("eof".into()).kind(), FailureKind::Transport);
    }

    #[test]
    fn prescription_messages_keep_their_diagnostic_split() {
        assert_eq!(
            Resource::Prescriptions.failure_message(FailureKind::Protocol),
            "Failed to fetch prescriptions"
        );
        assert_eq!(
            Resource::Prescriptions.failure_message(FailureKind::Transport),
            "Error fetching prescriptions"
        );
        assert_eq!(
            Resource::Doctors.failure_message(FailureKind::Protocol),
            "Failed to fetch doctors"
        );
    }

    #[test]
    fn status_error_displays_code_and_text() {
        let err = FetchError::Status { status: 401, status_text: "Unauthorized".into() };
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }
}
