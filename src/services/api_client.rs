// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: one request per call, errors mapped to FetchError.
// The success indicator of /prescriptions is checked by the orchestrator.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::FetchError;
use crate::models::{Doctor, FilterSelection, Patient, PrescriptionsResponse, SessionCredential};
use crate::utils::constants::{DOCTORS_PATH, PATIENTS_PATH, PRESCRIPTIONS_PATH};

/// Backend seam of the prescription view
#[async_trait(?Send)]
pub trait ClinicApi {
    /// `GET /patients`
    async fn fetch_patients(&self) -> Result<Vec<Patient>, FetchError>;

    /// `GET /doctors`
    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, FetchError>;

    /// `POST /prescriptions` with the filter as body and the bearer token header
    async fn fetch_prescriptions(
        &self,
        filter: &FilterSelection,
        credential: &SessionCredential,
    ) -> Result<PrescriptionsResponse, FetchError>;
}

/// gloo-net implementation of [`ClinicApi`]
#[derive(Clone)]
pub struct HttpClinicApi {
    base_url: String,
}

impl HttpClinicApi {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        log::debug!("🌐 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        decode(response).await
    }
}

impl Default for HttpClinicApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ClinicApi for HttpClinicApi {
    async fn fetch_patients(&self) -> Result<Vec<Patient>, FetchError> {
        self.get_json(PATIENTS_PATH).await
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, FetchError> {
        self.get_json(DOCTORS_PATH).await
    }

    async fn fetch_prescriptions(
        &self,
        filter: &FilterSelection,
        credential: &SessionCredential,
    ) -> Result<PrescriptionsResponse, FetchError> {
        let url = self.url(PRESCRIPTIONS_PATH);
        log::debug!(
            "🌐 [API] POST {} (patientId='{}', doctorId='{}')",
            url,
            filter.patient_id,
            filter.doctor_id
        );

        let response = Request::post(&url)
            .header("authorization", &credential.authorization_header())
            .json(filter)
            .map_err(|e| FetchError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        decode(response).await
    }
}

/// Non-2xx → Status, bad body → Decode
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slash() {
        let api = HttpClinicApi::with_base_url("http://localhost:3001/");
        assert_eq!(api.url("/patients"), "http://localhost:3001/patients");
    }
}
