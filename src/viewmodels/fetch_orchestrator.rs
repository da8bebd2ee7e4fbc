// ============================================================================
// FETCH ORCHESTRATOR - Patients, doctors and prescriptions retrievals
// ============================================================================
// Each load_* does one round trip and either replaces its slice of state or
// reports one message to the error dialog. Nothing escapes to the caller.
// Completions are gated by a per-operation RequestSequencer: only the newest
// request of an operation commits, and nothing commits after teardown().
// ============================================================================

use crate::error::{FetchError, Resource};
use crate::models::{FilterSelection, SessionCredential};
use crate::services::ClinicApi;
use crate::state::{PrescriptionListState, RequestSequencer, Ticket};
use crate::viewmodels::prescription_sorter::sort_newest_first;

pub struct FetchOrchestrator<A: ClinicApi> {
    api: A,
    state: PrescriptionListState,
    credential: SessionCredential,
    patients_seq: RequestSequencer,
    doctors_seq: RequestSequencer,
    prescriptions_seq: RequestSequencer,
}

impl<A: ClinicApi> FetchOrchestrator<A> {
    pub fn new(api: A, state: PrescriptionListState, credential: SessionCredential) -> Self {
        Self {
            api,
            state,
            credential,
            patients_seq: RequestSequencer::new(),
            doctors_seq: RequestSequencer::new(),
            prescriptions_seq: RequestSequencer::new(),
        }
    }

    pub fn state(&self) -> &PrescriptionListState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Startup: the three retrievals run concurrently and commit independently
    pub async fn mount(&self, filter: FilterSelection) {
        log::info!("🚀 [FETCH] Mount: loading prescriptions, patients and doctors");
        futures::join!(
            self.load_prescriptions(filter),
            self.load_patients(),
            self.load_doctors()
        );
    }

    pub async fn load_patients(&self) {
        let ticket = self.patients_seq.issue();
        let result = self.api.fetch_patients().await;

        if let Some(patients) = self.accept(&self.patients_seq, ticket, Resource::Patients, result) {
            log::info!("✅ [FETCH] {} patients loaded", patients.len());
            self.state.set_patients(patients);
        }
    }

    pub async fn load_doctors(&self) {
        let ticket = self.doctors_seq.issue();
        let result = self.api.fetch_doctors().await;

        if let Some(doctors) = self.accept(&self.doctors_seq, ticket, Resource::Doctors, result) {
            log::info!("✅ [FETCH] {} doctors loaded", doctors.len());
            self.state.set_doctors(doctors);
        }
    }

    /// One POST with `filter` verbatim; a false success indicator is a
    /// protocol failure
    pub async fn load_prescriptions(&self, filter: FilterSelection) {
        let ticket = self.prescriptions_seq.issue();
        if filter.is_unfiltered() {
            log::debug!("🔎 [FETCH] No filter, loading every visible prescription");
        }
        let result = self
            .api
            .fetch_prescriptions(&filter, &self.credential)
            .await
            .and_then(|response| {
                if response.is_success() {
                    Ok(response.prescriptions)
                } else {
                    Err(FetchError::Rejected(response.message))
                }
            });

        if let Some(prescriptions) =
            self.accept(&self.prescriptions_seq, ticket, Resource::Prescriptions, result)
        {
            log::info!("✅ [FETCH] {} prescriptions loaded", prescriptions.len());
            self.state.set_prescriptions(sort_newest_first(prescriptions));
        }
    }

    /// Drop every completion that arrives from now on
    pub fn teardown(&self) {
        log::info!("🧹 [FETCH] Teardown: late results will be discarded");
        self.patients_seq.retire();
        self.doctors_seq.retire();
        self.prescriptions_seq.retire();
    }

    /// Gate a completion and turn a failure into a dialog message.
    /// Returns the payload only when it should be committed.
    fn accept<T>(
        &self,
        sequencer: &RequestSequencer,
        ticket: Ticket,
        resource: Resource,
        result: Result<T, FetchError>,
    ) -> Option<T> {
        if !sequencer.is_current(ticket) {
            log::debug!(
                "⏭️ [FETCH] Discarding stale {} completion ({:?})",
                resource.label(),
                ticket
            );
            return None;
        }

        match result {
            Ok(payload) => Some(payload),
            Err(e) => {
                log::error!("❌ [FETCH] Error fetching {}: {}", resource.label(), e);
                self.state.report_error(resource.failure_message(e.kind()));
                None
            }
        }
    }
}
