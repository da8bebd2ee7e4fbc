// ============================================================================
// PRESCRIPTION LIST APP - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that render DOM (no logic)
// - ViewModels: fetch orchestration, filter form, result ordering
// - Services: API communication and session storage only
// - State: shared state with Rc<RefCell>
// - Models: records exchanged with the backend
// ============================================================================

mod app;
pub mod config;
mod dom;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
mod views;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Prescription List App ({})", CONFIG.environment);

    let app = App::new()?;
    app.render()?;
    app.mount();

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted page
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [RENDER] Error re-rendering: {:?}", e);
            }
        }
    });
}

#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Current ordered prescriptions as a JSON array, for the table widget
#[wasm_bindgen]
pub fn prescriptions_json() -> Result<String, JsValue> {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app::prescriptions_to_json(&app.state().prescriptions.borrow())
            .map_err(|e| JsValue::from_str(&e)),
        None => Ok("[]".to_string()),
    })
}

/// Leave the page: later completions are discarded and the root is cleared
#[wasm_bindgen]
pub fn teardown_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().take() {
            app.teardown();
        }
    });
}
