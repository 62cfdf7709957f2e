//! Equipment unit records and the shared rate-producing interface.
//!
//! Excavators and trucks are distinct record types but share one
//! throughput formula: a unit that moves `capacity` cubic yards every
//! `minutes_per_cycle` minutes produces
//! `(60 / minutes_per_cycle) * capacity * efficiency` cubic yards per
//! hour. [`RateProducer`] captures that seam so the calculation engine
//! never duplicates the arithmetic per equipment kind.

use crate::config::CalculatorConfig;
use serde::{Deserialize, Serialize};

/// Common interface for anything that contributes an hourly material rate.
pub trait RateProducer {
    /// Cubic yards moved per cycle.
    fn capacity_cy(&self) -> f64;

    /// Minutes per complete cycle (dig-swing-dump, or load-haul-dump-return).
    fn minutes_per_cycle(&self) -> f64;

    /// Inactive units contribute no rate but stay in the fleet list.
    fn is_active(&self) -> bool;

    /// Theoretical hourly throughput derated by the efficiency factor,
    /// in cubic yards per hour.
    fn hourly_rate(&self, efficiency: f64) -> f64 {
        (60.0 / self.minutes_per_cycle()) * self.capacity_cy() * efficiency
    }
}

/// An excavator in the project fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excavator {
    /// Fleet-scoped unique id, assigned by the fleet's counter.
    pub id: u32,
    /// Optional display label ("CAT 320", "North bank rig", ...).
    pub name: Option<String>,
    /// Bucket capacity in cubic yards.
    pub bucket_capacity_cy: f64,
    /// Minutes per dig-swing-dump cycle.
    pub cycle_time_min: f64,
    pub is_active: bool,
}

impl Excavator {
    /// A default-valued excavator carrying the given fleet id.
    pub fn with_id(id: u32, config: &CalculatorConfig) -> Self {
        Self {
            id,
            name: None,
            bucket_capacity_cy: config.default_excavator.bucket_capacity_cy,
            cycle_time_min: config.default_excavator.cycle_time_min,
            is_active: true,
        }
    }
}

impl RateProducer for Excavator {
    fn capacity_cy(&self) -> f64 {
        self.bucket_capacity_cy
    }

    fn minutes_per_cycle(&self) -> f64 {
        self.cycle_time_min
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// A haul truck in the project fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Fleet-scoped unique id, assigned by the fleet's counter.
    pub id: u32,
    /// Optional display label.
    pub name: Option<String>,
    /// Bed capacity in cubic yards.
    pub capacity_cy: f64,
    /// Minutes to load, haul, dump, and return.
    pub round_trip_min: f64,
    pub is_active: bool,
}

impl Truck {
    /// A default-valued truck carrying the given fleet id.
    pub fn with_id(id: u32, config: &CalculatorConfig) -> Self {
        Self {
            id,
            name: None,
            capacity_cy: config.default_truck.capacity_cy,
            round_trip_min: config.default_truck.round_trip_min,
            is_active: true,
        }
    }
}

impl RateProducer for Truck {
    fn capacity_cy(&self) -> f64 {
        self.capacity_cy
    }

    fn minutes_per_cycle(&self) -> f64 {
        self.round_trip_min
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excavator_hourly_rate() {
        // 2.5 cy bucket, 2 minute cycle, 0.85 efficiency:
        // (60 / 2.0) * 2.5 * 0.85 = 63.75 cy/hr
        let exc = Excavator {
            id: 1,
            name: None,
            bucket_capacity_cy: 2.5,
            cycle_time_min: 2.0,
            is_active: true,
        };
        assert_eq!(exc.hourly_rate(0.85), 63.75);
    }

    #[test]
    fn test_truck_hourly_rate() {
        // 12 cy bed, 15 minute round trip, 0.85 efficiency:
        // (60 / 15.0) * 12.0 * 0.85 = 40.8 cy/hr
        let truck = Truck {
            id: 1,
            name: None,
            capacity_cy: 12.0,
            round_trip_min: 15.0,
            is_active: true,
        };
        assert!((truck.hourly_rate(0.85) - 40.8).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_carry_the_given_id() {
        let config = CalculatorConfig::default();
        let exc = Excavator::with_id(7, &config);
        assert_eq!(exc.id, 7);
        assert!(exc.is_active);
        let truck = Truck::with_id(3, &config);
        assert_eq!(truck.id, 3);
        assert!(truck.is_active);
    }
}
