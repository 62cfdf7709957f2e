//! The timeline calculation engine.
//!
//! A single pure function over pond geometry and the two fleets. Volume
//! is computed in cubic feet and converted to cubic yards here, in one
//! place; every rate in the system is cubic yards per hour.

use crate::config::CalculatorConfig;
use crate::equipment::{Excavator, RateProducer, Truck};
use crate::pond::PondDimensions;
use serde::{Deserialize, Serialize};

/// One cubic yard is 3ft x 3ft x 3ft.
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

/// Which fleet caps overall throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bottleneck {
    Excavation,
    Hauling,
}

impl Bottleneck {
    pub fn label(&self) -> &'static str {
        match self {
            Bottleneck::Excavation => "Excavation",
            Bottleneck::Hauling => "Hauling",
        }
    }
}

/// Output of one calculation pass. Serialized across the UI boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Pond volume in cubic yards.
    pub total_volume_cy: f64,
    /// Aggregate active-excavator rate, cy/hr.
    pub excavation_rate_cy_hr: f64,
    /// Aggregate active-truck rate, cy/hr.
    pub hauling_rate_cy_hr: f64,
    pub bottleneck: Bottleneck,
    /// Whole working days, rounded up.
    pub timeline_days: u32,
    /// False when the inputs could not support a meaningful estimate.
    pub is_valid: bool,
}

impl CalculationResult {
    /// The result returned for pathological input (zero volume or a
    /// fleet with no active units). Validation normally prevents the
    /// engine from ever being called with such input.
    fn invalid() -> Self {
        Self {
            total_volume_cy: 0.0,
            excavation_rate_cy_hr: 0.0,
            hauling_rate_cy_hr: 0.0,
            bottleneck: Bottleneck::Excavation,
            timeline_days: 0,
            is_valid: false,
        }
    }
}

/// Sum of hourly rates over the active units of one fleet.
fn fleet_rate<T: RateProducer>(units: &[T], efficiency: f64) -> f64 {
    units
        .iter()
        .filter(|u| u.is_active())
        .map(|u| u.hourly_rate(efficiency))
        .sum()
}

/// Estimate the project timeline for the given pond and fleets.
///
/// Idempotent and side-effect free. The validation layer guarantees
/// positive rates before this runs; if called with pathological input
/// anyway it returns `is_valid: false` rather than propagating NaN or
/// infinity. That guard is an invariant, not normal control flow.
pub fn calculate_timeline(
    pond: &PondDimensions,
    excavators: &[Excavator],
    trucks: &[Truck],
    config: &CalculatorConfig,
) -> CalculationResult {
    let total_volume_cy = pond.volume_cubic_feet() / CUBIC_FEET_PER_CUBIC_YARD;
    let excavation_rate_cy_hr = fleet_rate(excavators, config.efficiency_factor);
    let hauling_rate_cy_hr = fleet_rate(trucks, config.efficiency_factor);

    let usable = total_volume_cy > 0.0
        && excavation_rate_cy_hr > 0.0
        && hauling_rate_cy_hr > 0.0
        && pond.work_hours_per_day > 0.0
        && total_volume_cy.is_finite()
        && excavation_rate_cy_hr.is_finite()
        && hauling_rate_cy_hr.is_finite();
    if !usable {
        return CalculationResult::invalid();
    }

    // Tie-break: equal rates report Excavation as the bottleneck.
    let bottleneck = if excavation_rate_cy_hr <= hauling_rate_cy_hr {
        Bottleneck::Excavation
    } else {
        Bottleneck::Hauling
    };
    let bottleneck_rate = excavation_rate_cy_hr.min(hauling_rate_cy_hr);

    let days = (total_volume_cy / bottleneck_rate / pond.work_hours_per_day).ceil();

    CalculationResult {
        total_volume_cy,
        excavation_rate_cy_hr,
        hauling_rate_cy_hr,
        bottleneck,
        timeline_days: days as u32,
        is_valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CalculatorConfig {
        CalculatorConfig::default()
    }

    fn excavator(bucket_cy: f64, cycle_min: f64) -> Excavator {
        Excavator {
            id: 1,
            name: None,
            bucket_capacity_cy: bucket_cy,
            cycle_time_min: cycle_min,
            is_active: true,
        }
    }

    fn truck(capacity_cy: f64, round_trip_min: f64) -> Truck {
        Truck {
            id: 1,
            name: None,
            capacity_cy,
            round_trip_min,
            is_active: true,
        }
    }

    /// Pond 40x25x5 ft, one 63.75 cy/hr excavator, one 54 cy/hr truck,
    /// 8 work hours: hauling is the bottleneck and
    /// days = ceil((5000 / 27) / 54 / 8) = ceil(0.4286...) = 1.
    #[test]
    fn test_scenario_single_excavator_single_truck() {
        let pond = PondDimensions {
            length_ft: 40.0,
            width_ft: 25.0,
            depth_ft: 5.0,
            work_hours_per_day: 8.0,
        };
        // 12 cy bed on an 11.33-minute round trip:
        // (60 / (34/3)) * 12 * 0.85 = 54.0 cy/hr.
        let trucks = vec![truck(12.0, 34.0 / 3.0)];
        let excavators = vec![excavator(2.5, 2.0)];

        let result = calculate_timeline(&pond, &excavators, &trucks, &config());
        assert!(result.is_valid);
        assert_eq!(result.total_volume_cy, 5000.0 / 27.0);
        assert_eq!(result.excavation_rate_cy_hr, 63.75);
        assert!((result.hauling_rate_cy_hr - 54.0).abs() < 1e-9);
        assert_eq!(result.bottleneck, Bottleneck::Hauling);
        assert_eq!(
            result.timeline_days,
            ((5000.0_f64 / 27.0) / 54.0 / 8.0).ceil() as u32
        );
        assert_eq!(result.timeline_days, 1);
    }

    #[test]
    fn test_big_pond_multi_day() {
        // 300x200x10 ft = 600000 cu ft = 22222.2 cy; excavation
        // bottleneck at 63.75 cy/hr over 8h days -> ceil(43.57) = 44.
        let pond = PondDimensions {
            length_ft: 300.0,
            width_ft: 200.0,
            depth_ft: 10.0,
            work_hours_per_day: 8.0,
        };
        let excavators = vec![excavator(2.5, 2.0)];
        let trucks = vec![truck(20.0, 10.0)]; // 102 cy/hr
        let result = calculate_timeline(&pond, &excavators, &trucks, &config());
        assert_eq!(result.bottleneck, Bottleneck::Excavation);
        assert_eq!(result.timeline_days, 44);
    }

    #[test]
    fn test_tie_break_reports_excavation() {
        let pond = PondDimensions {
            length_ft: 40.0,
            width_ft: 25.0,
            depth_ft: 5.0,
            work_hours_per_day: 8.0,
        };
        // Identical cycle arithmetic on both sides -> equal rates.
        let excavators = vec![excavator(2.5, 2.0)];
        let trucks = vec![truck(2.5, 2.0)];
        let result = calculate_timeline(&pond, &excavators, &trucks, &config());
        assert_eq!(result.excavation_rate_cy_hr, result.hauling_rate_cy_hr);
        assert_eq!(result.bottleneck, Bottleneck::Excavation);
    }

    #[test]
    fn test_idempotent() {
        let pond = PondDimensions {
            length_ft: 77.0,
            width_ft: 31.0,
            depth_ft: 6.5,
            work_hours_per_day: 10.0,
        };
        let excavators = vec![excavator(3.0, 1.5)];
        let trucks = vec![truck(14.0, 22.0)];
        let first = calculate_timeline(&pond, &excavators, &trucks, &config());
        let second = calculate_timeline(&pond, &excavators, &trucks, &config());
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_an_excavator_never_lengthens_timeline() {
        let pond = PondDimensions {
            length_ft: 300.0,
            width_ft: 200.0,
            depth_ft: 10.0,
            work_hours_per_day: 8.0,
        };
        let trucks = vec![truck(20.0, 10.0)];
        let mut excavators = vec![excavator(2.5, 2.0)];
        let mut previous_days =
            calculate_timeline(&pond, &excavators, &trucks, &config()).timeline_days;
        for _ in 0..5 {
            excavators.push(excavator(2.5, 2.0));
            let days = calculate_timeline(&pond, &excavators, &trucks, &config()).timeline_days;
            assert!(days <= previous_days);
            previous_days = days;
        }
    }

    #[test]
    fn test_inactive_units_contribute_no_rate() {
        let pond = PondDimensions {
            length_ft: 40.0,
            width_ft: 25.0,
            depth_ft: 5.0,
            work_hours_per_day: 8.0,
        };
        let mut second = excavator(10.0, 1.0);
        second.id = 2;
        second.is_active = false;
        let excavators = vec![excavator(2.5, 2.0), second];
        let trucks = vec![truck(20.0, 10.0)];
        let result = calculate_timeline(&pond, &excavators, &trucks, &config());
        assert_eq!(result.excavation_rate_cy_hr, 63.75);
    }

    #[test]
    fn test_pathological_input_returns_invalid_not_nan() {
        let pond = PondDimensions {
            length_ft: 0.0,
            width_ft: 25.0,
            depth_ft: 5.0,
            work_hours_per_day: 8.0,
        };
        let result =
            calculate_timeline(&pond, &[excavator(2.5, 2.0)], &[truck(12.0, 15.0)], &config());
        assert!(!result.is_valid);
        assert_eq!(result.timeline_days, 0);

        // No active trucks: hauling rate is zero, division guarded.
        let pond = PondDimensions {
            length_ft: 40.0,
            width_ft: 25.0,
            depth_ft: 5.0,
            work_hours_per_day: 8.0,
        };
        let mut idle = truck(12.0, 15.0);
        idle.is_active = false;
        let result = calculate_timeline(&pond, &[excavator(2.5, 2.0)], &[idle], &config());
        assert!(!result.is_valid);
        assert!(result.timeline_days == 0);
        assert!(result.hauling_rate_cy_hr == 0.0);
    }
}
