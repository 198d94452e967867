use serde::Serialize;
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn get_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("⚠️ Could not write '{}' to localStorage", key);
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializing '{}': {}", key, e))?;
    let storage = local_storage().ok_or("Could not access localStorage")?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error writing to localStorage".to_string())?;
    Ok(())
}
