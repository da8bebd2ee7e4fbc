use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;

/// Read a JSON value from localStorage. Missing key → Ok(None).
pub fn load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, String> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(format!("Error reading '{}' from localStorage: {}", key, e)),
    }
}

/// Read a raw string (not JSON-encoded) from localStorage
pub fn load_raw(key: &str) -> Result<Option<String>, String> {
    LocalStorage::raw()
        .get_item(key)
        .map_err(|_| format!("Error reading '{}' from localStorage", key))
}
