//! localStorage bridge for the persisted state blob.
//!
//! The JSON shape, legacy migration, and corrupt-blob fallback all live
//! in `pec_core::storage`; this module only moves the string across the
//! browser boundary. Storage being unavailable (private browsing, or a
//! quota error on write) degrades to in-memory operation, never a crash.

use log::warn;
use pec_core::config::CalculatorConfig;
use pec_core::state::AppData;
use pec_core::storage::{decode, encode, STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Restore the persisted state, or defaults when there is nothing
/// stored, the blob is unreadable, or storage is unavailable.
pub fn load(config: &CalculatorConfig) -> AppData {
    match local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) {
        Some(json) => decode(&json, config),
        None => AppData::with_defaults(config),
    }
}

/// Persist the state blob. A failed write is logged and dropped.
pub fn save(data: &AppData) {
    let Some(storage) = local_storage() else {
        warn!("localStorage unavailable, state will not persist");
        return;
    };
    if storage.set_item(STORAGE_KEY, &encode(data)).is_err() {
        warn!("failed to write state to localStorage");
    }
}
