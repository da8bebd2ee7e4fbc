// ============================================================================
// SESSION SERVICE - Reads what the login screen left in localStorage
// ============================================================================

use crate::config::CONFIG;
use crate::models::{CurrentUser, SessionCredential};
use crate::utils::storage::{load_json, load_raw};

/// Bearer token of the current session. A missing token yields an empty
/// credential; the backend decides what to do with it.
pub fn load_credential() -> SessionCredential {
    let credential = match load_raw(&CONFIG.storage.token_key) {
        Ok(token) => SessionCredential::new(token.unwrap_or_default()),
        Err(e) => {
            log::error!("❌ [SESSION] {}", e);
            SessionCredential::default()
        }
    };
    if credential.is_empty() {
        log::warn!("⚠️ [SESSION] No token in localStorage, requests go out unauthenticated");
    }
    credential
}

/// Logged-in user; falls back to an Unknown role
pub fn load_current_user() -> CurrentUser {
    match load_json::<CurrentUser>(&CONFIG.storage.user_key) {
        Ok(Some(user)) => {
            log::info!("👤 [SESSION] Current user role: {:?}", user.user_type);
            user
        }
        Ok(None) => {
            log::warn!("⚠️ [SESSION] No current user in localStorage");
            CurrentUser::default()
        }
        Err(e) => {
            log::error!("❌ [SESSION] {}", e);
            CurrentUser::default()
        }
    }
}
