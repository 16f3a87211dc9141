use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn storage_get(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::error!("❌ Could not write '{}' to localStorage", key);
        }
    }
}

pub fn storage_remove(key: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.remove_item(key).is_err() {
            log::error!("❌ Could not remove '{}' from localStorage", key);
        }
    }
}
