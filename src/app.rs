// ============================================================================
// APP - Wires state, viewmodels and views of the prescription page
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::events::dispatch_window_event;
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::models::Prescription;
use crate::services::{load_credential, load_current_user, HttpClinicApi};
use crate::state::{PrescriptionListState, StateChange};
use crate::utils::query::current_search;
use crate::utils::PRESCRIPTIONS_UPDATED_EVENT;
use crate::viewmodels::{FetchOrchestrator, FilterFormController};
use crate::views::{render_app, ErrorDialogProps, FilterFormProps, PageProps};

pub struct App {
    state: PrescriptionListState,
    orchestrator: Rc<FetchOrchestrator<HttpClinicApi>>,
    form: Rc<RefCell<FilterFormController>>,
    root: Element,
    torn_down: Rc<Cell<bool>>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root_id = &CONFIG.ui.root_element_id;
        let root = get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", root_id)))?;

        let user = load_current_user();
        let form = FilterFormController::from_query(user.user_type, &current_search());
        let state = PrescriptionListState::new(CONFIG.ui.error_dialog_title.clone());
        let orchestrator = Rc::new(FetchOrchestrator::new(
            HttpClinicApi::new(),
            state.clone(),
            load_credential(),
        ));
        let torn_down = Rc::new(Cell::new(false));

        // Batch re-renders: several commits in one tick → one render
        {
            let render_pending = Rc::new(Cell::new(false));
            let prescriptions = state.prescriptions.clone();
            let torn_down = torn_down.clone();
            state.subscribe_to_changes(move |change| {
                if torn_down.get() {
                    return;
                }
                if change == StateChange::Prescriptions {
                    publish_prescriptions(&prescriptions.borrow());
                }
                if render_pending.replace(true) {
                    return;
                }
                let render_pending = render_pending.clone();
                Timeout::new(0, move || {
                    render_pending.set(false);
                    crate::rerender_app();
                })
                .forget();
            });
        }

        Ok(Self {
            state,
            orchestrator,
            form: Rc::new(RefCell::new(form)),
            root,
            torn_down,
        })
    }

    /// Fire the three startup retrievals
    pub fn mount(&self) {
        let orchestrator = self.orchestrator.clone();
        let filter = self.form.borrow().selection().clone();
        spawn_local(async move {
            orchestrator.mount(filter).await;
        });
    }

    pub fn render(&self) -> Result<(), JsValue> {
        if self.torn_down.get() {
            return Ok(());
        }

        let props = self.page_props();
        set_inner_html(&self.root, "");
        let page = render_app(&props)?;
        append_child(&self.root, &page)?;
        Ok(())
    }

    /// Late results are dropped from here on; in-flight requests still finish
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.orchestrator.teardown();
        set_inner_html(&self.root, "");
        log::info!("👋 [APP] Prescription page torn down");
    }

    pub fn state(&self) -> &PrescriptionListState {
        &self.state
    }

    fn page_props(&self) -> PageProps {
        let form = self.form.borrow();
        let errors = self.state.errors.snapshot();

        PageProps {
            filter: FilterFormProps {
                layout: form.layout(),
                patient_options: form.patient_options(&self.state.get_patients()),
                doctor_options: form.doctor_options(&self.state.get_doctors()),
                on_patient_change: {
                    let form = self.form.clone();
                    Rc::new(move |id: String| form.borrow_mut().select_patient(id))
                },
                on_doctor_change: {
                    let form = self.form.clone();
                    Rc::new(move |id: String| form.borrow_mut().select_doctor(id))
                },
                on_submit: {
                    let form = self.form.clone();
                    let orchestrator = self.orchestrator.clone();
                    Rc::new(move || {
                        let filter = form.borrow().submit();
                        let orchestrator = orchestrator.clone();
                        spawn_local(async move {
                            orchestrator.load_prescriptions(filter).await;
                        });
                    })
                },
            },
            errors: ErrorDialogProps {
                open: errors.open,
                title: errors.title,
                messages: errors.messages,
                on_close: {
                    let state = self.state.clone();
                    Rc::new(move || state.dismiss_errors())
                },
            },
            prescription_count: self.state.prescriptions.borrow().len(),
        }
    }
}

/// JSON array handed to the table widget
pub fn prescriptions_to_json(prescriptions: &[Prescription]) -> Result<String, String> {
    serde_json::to_string(prescriptions).map_err(|e| format!("Error serializing prescriptions: {}", e))
}

fn publish_prescriptions(prescriptions: &[Prescription]) {
    let json = match prescriptions_to_json(prescriptions) {
        Ok(json) => json,
        Err(e) => {
            log::error!("❌ [APP] {}", e);
            return;
        }
    };
    if let Err(e) = dispatch_window_event(PRESCRIPTIONS_UPDATED_EVENT, &json) {
        log::error!("❌ [APP] Error dispatching {}: {:?}", PRESCRIPTIONS_UPDATED_EVENT, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appointment;
    use serde_json::{Map, Value};

    #[test]
    fn published_json_keeps_wire_names_and_order() {
        let mut extra = Map::new();
        extra.insert("remarks".to_string(), Value::from("rest"));
        let list = vec![
            Prescription {
                id: "rx2".to_string(),
                appointment: Appointment {
                    id: None,
                    appointment_date: "2024-01-02".to_string(),
                    appointment_time: "10:00".to_string(),
                    extra: Map::new(),
                },
                extra,
            },
            Prescription {
                id: "rx1".to_string(),
                appointment: Appointment {
                    id: None,
                    appointment_date: "2024-01-01".to_string(),
                    appointment_time: "10:00".to_string(),
                    extra: Map::new(),
                },
                extra: Map::new(),
            },
        ];

        let json: Value = serde_json::from_str(&prescriptions_to_json(&list).unwrap()).unwrap();
        assert_eq!(json[0]["_id"], "rx2");
        assert_eq!(json[0]["remarks"], "rest");
        assert_eq!(json[0]["appointmentId"]["appointmentTime"], "10:00");
        assert_eq!(json[1]["_id"], "rx1");
    }
}
