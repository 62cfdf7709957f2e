//! Build-time-embedded calculator configuration.
//!
//! Validation ranges, fleet size limits, the efficiency factor, the
//! debounce delay, and default values for new equipment all live here.
//! `Default` supplies the embedded constants; the struct is also
//! serde-derived so the same shape could be loaded from a JSON file at
//! startup. Nothing fetches configuration at runtime.

use crate::pond::PondDimensions;
use crate::validate::FieldKind;
use serde::{Deserialize, Serialize};

/// Inclusive [min, max] bounds for a numeric input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Default field values for a newly added excavator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExcavatorDefaults {
    pub bucket_capacity_cy: f64,
    pub cycle_time_min: f64,
}

/// Default field values for a newly added truck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruckDefaults {
    pub capacity_cy: f64,
    pub round_trip_min: f64,
}

/// The full calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub bucket_capacity: FieldRange,
    pub cycle_time: FieldRange,
    pub truck_capacity: FieldRange,
    pub round_trip_time: FieldRange,
    pub pond_length: FieldRange,
    pub pond_width: FieldRange,
    pub pond_depth: FieldRange,
    pub work_hours: FieldRange,

    /// Fleet size caps.
    pub max_excavators: usize,
    pub max_trucks: usize,
    /// Minimum units per fleet; removal below this is rejected.
    pub min_units: usize,

    /// Derating constant applied to theoretical equipment throughput.
    pub efficiency_factor: f64,

    /// Milliseconds between the last keystroke and recalculation.
    pub debounce_ms: u32,

    pub default_excavator: ExcavatorDefaults,
    pub default_truck: TruckDefaults,
    pub default_pond: PondDimensions,
}

impl CalculatorConfig {
    /// The configured range for a given input field kind.
    pub fn range_for(&self, kind: FieldKind) -> FieldRange {
        match kind {
            FieldKind::BucketCapacity => self.bucket_capacity,
            FieldKind::CycleTime => self.cycle_time,
            FieldKind::TruckCapacity => self.truck_capacity,
            FieldKind::RoundTripTime => self.round_trip_time,
            FieldKind::PondLength => self.pond_length,
            FieldKind::PondWidth => self.pond_width,
            FieldKind::PondDepth => self.pond_depth,
            FieldKind::WorkHoursPerDay => self.work_hours,
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            bucket_capacity: FieldRange { min: 0.1, max: 15.0 },
            cycle_time: FieldRange { min: 0.1, max: 60.0 },
            truck_capacity: FieldRange { min: 1.0, max: 50.0 },
            round_trip_time: FieldRange { min: 1.0, max: 480.0 },
            pond_length: FieldRange { min: 1.0, max: 1000.0 },
            pond_width: FieldRange { min: 1.0, max: 1000.0 },
            pond_depth: FieldRange { min: 0.5, max: 50.0 },
            work_hours: FieldRange { min: 1.0, max: 24.0 },
            max_excavators: 10,
            max_trucks: 20,
            min_units: 1,
            efficiency_factor: 0.85,
            debounce_ms: 300,
            default_excavator: ExcavatorDefaults {
                bucket_capacity_cy: 2.5,
                cycle_time_min: 2.0,
            },
            default_truck: TruckDefaults {
                capacity_cy: 12.0,
                round_trip_min: 15.0,
            },
            default_pond: PondDimensions {
                length_ft: 40.0,
                width_ft: 25.0,
                depth_ft: 5.0,
                work_hours_per_day: 8.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = FieldRange { min: 0.1, max: 15.0 };
        assert!(range.contains(0.1));
        assert!(range.contains(15.0));
        assert!(!range.contains(0.0999));
        assert!(!range.contains(15.0001));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = CalculatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_every_field_kind_has_a_range() {
        let config = CalculatorConfig::default();
        for kind in FieldKind::ALL {
            let range = config.range_for(kind);
            assert!(range.min < range.max, "{kind:?} has an empty range");
        }
    }
}
