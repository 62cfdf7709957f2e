//! JSON codec for the persisted calculator state.
//!
//! The browser side stores one JSON blob under a single key. This module
//! owns the blob's shape: encoding the current state, decoding it back,
//! migrating the legacy flat-field shape (single scalar equipment fields
//! from before fleets existed) by seeding one-unit fleets, and falling
//! back to defaults on anything corrupted or unrecognized. Decoding never
//! fails outward; the worst case is a fresh default state.
//!
//! Deliberately not stored: the info-banner dismissal (session-only) and
//! the last valid calculation result (recomputed on load).

use crate::config::CalculatorConfig;
use crate::equipment::{Excavator, Truck};
use crate::fleet::Fleet;
use crate::pond::PondDimensions;
use crate::state::AppData;
use log::warn;
use serde::{Deserialize, Serialize};

/// localStorage key for the state blob.
pub const STORAGE_KEY: &str = "pond-excavation-calculator.state";

const STORAGE_VERSION: u32 = 2;

/// The current on-disk shape.
#[derive(Debug, Serialize, Deserialize)]
struct StoredState {
    version: u32,
    excavators: Vec<Excavator>,
    trucks: Vec<Truck>,
    pond: PondDimensions,
}

/// The pre-fleet flat shape: one implicit excavator and one implicit
/// truck described by scalar fields.
#[derive(Debug, Deserialize)]
struct LegacyState {
    bucket_capacity: f64,
    cycle_time: f64,
    truck_capacity: f64,
    round_trip_time: f64,
    pond_length: f64,
    pond_width: f64,
    pond_depth: f64,
    work_hours_per_day: f64,
}

/// Serialize the persistable parts of the state.
pub fn encode(data: &AppData) -> String {
    let stored = StoredState {
        version: STORAGE_VERSION,
        excavators: data.excavators.units().to_vec(),
        trucks: data.trucks.units().to_vec(),
        pond: data.pond.clone(),
    };
    // StoredState contains no map keys or non-string keys that could
    // fail serialization; an empty blob decodes to defaults anyway.
    serde_json::to_string(&stored).unwrap_or_default()
}

/// Decode a stored blob, migrating or falling back as needed.
pub fn decode(json: &str, config: &CalculatorConfig) -> AppData {
    if let Ok(stored) = serde_json::from_str::<StoredState>(json) {
        if stored.version == STORAGE_VERSION
            && !stored.excavators.is_empty()
            && !stored.trucks.is_empty()
        {
            return AppData {
                excavators: Fleet::from_units(stored.excavators),
                trucks: Fleet::from_units(stored.trucks),
                pond: stored.pond,
                last_valid: None,
            };
        }
        warn!("stored state has version {} or empty fleets, using defaults", stored.version);
        return AppData::with_defaults(config);
    }

    if let Ok(legacy) = serde_json::from_str::<LegacyState>(json) {
        return migrate_legacy(legacy);
    }

    warn!("stored state unreadable, using defaults");
    AppData::with_defaults(config)
}

/// Seed one-unit fleets from the legacy scalar fields.
fn migrate_legacy(legacy: LegacyState) -> AppData {
    let excavator = Excavator {
        id: 1,
        name: None,
        bucket_capacity_cy: legacy.bucket_capacity,
        cycle_time_min: legacy.cycle_time,
        is_active: true,
    };
    let truck = Truck {
        id: 1,
        name: None,
        capacity_cy: legacy.truck_capacity,
        round_trip_min: legacy.round_trip_time,
        is_active: true,
    };
    AppData {
        excavators: Fleet::seeded(excavator),
        trucks: Fleet::seeded(truck),
        pond: PondDimensions {
            length_ft: legacy.pond_length,
            width_ft: legacy.pond_width,
            depth_ft: legacy.pond_depth,
            work_hours_per_day: legacy.work_hours_per_day,
        },
        last_valid: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CalculatorConfig {
        CalculatorConfig::default()
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let config = config();
        let data = AppData::with_defaults(&config);
        let data = data.add_truck(&config).unwrap();
        let (data, _) = data.recalculated(&config);

        let decoded = decode(&encode(&data), &config);
        assert_eq!(decoded.excavators.units(), data.excavators.units());
        assert_eq!(decoded.trucks.units(), data.trucks.units());
        assert_eq!(decoded.pond, data.pond);
        // The result is recomputed on load, never persisted.
        assert_eq!(decoded.last_valid, None);
    }

    #[test]
    fn test_blob_contains_no_banner_flag() {
        let config = config();
        let json = encode(&AppData::with_defaults(&config));
        assert!(!json.contains("banner"));
        assert!(!json.contains("last_valid"));
    }

    #[test]
    fn test_corrupted_json_falls_back_to_defaults() {
        let config = config();
        let decoded = decode("{\"version\": 2, \"excava", &config);
        assert_eq!(decoded, AppData::with_defaults(&config));
        // 1 excavator, 1 truck, default pond, no crash.
        assert_eq!(decoded.excavators.len(), 1);
        assert_eq!(decoded.trucks.len(), 1);
        assert_eq!(decoded.pond, config.default_pond);
    }

    #[test]
    fn test_empty_and_non_object_blobs_fall_back() {
        let config = config();
        assert_eq!(decode("", &config), AppData::with_defaults(&config));
        assert_eq!(decode("42", &config), AppData::with_defaults(&config));
        assert_eq!(decode("null", &config), AppData::with_defaults(&config));
    }

    #[test]
    fn test_legacy_flat_blob_seeds_single_unit_fleets() {
        let config = config();
        let legacy = r#"{
            "bucket_capacity": 3.0,
            "cycle_time": 1.5,
            "truck_capacity": 14.0,
            "round_trip_time": 20.0,
            "pond_length": 60.0,
            "pond_width": 30.0,
            "pond_depth": 6.0,
            "work_hours_per_day": 10.0
        }"#;
        let decoded = decode(legacy, &config);
        assert_eq!(decoded.excavators.len(), 1);
        let exc = &decoded.excavators.units()[0];
        assert_eq!(exc.bucket_capacity_cy, 3.0);
        assert_eq!(exc.cycle_time_min, 1.5);
        assert!(exc.is_active);
        let truck = &decoded.trucks.units()[0];
        assert_eq!(truck.capacity_cy, 14.0);
        assert_eq!(truck.round_trip_min, 20.0);
        assert_eq!(decoded.pond.length_ft, 60.0);
        assert_eq!(decoded.pond.work_hours_per_day, 10.0);
    }

    #[test]
    fn test_restored_fleet_resumes_id_counter() {
        let config = config();
        let mut data = AppData::with_defaults(&config);
        data = data.add_excavator(&config).unwrap();
        data = data.remove_excavator(1, &config).unwrap();
        // Only unit id 2 remains; a restore must not hand out id 2 again.
        let decoded = decode(&encode(&data), &config);
        let grown = decoded.add_excavator(&config).unwrap();
        let ids: Vec<u32> = grown.excavators.units().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
