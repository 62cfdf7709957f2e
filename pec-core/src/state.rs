//! The single top-level application state value and its pure updates.
//!
//! `AppData` owns both fleets, the pond dimensions, and the last valid
//! calculation result. Every update function takes `&self` and returns a
//! new value; the UI replaces its state wholesale. No ambient globals.

use crate::config::CalculatorConfig;
use crate::engine::{calculate_timeline, CalculationResult};
use crate::equipment::{Excavator, Truck};
use crate::fleet::{Fleet, FleetRejection};
use crate::pond::PondDimensions;
use crate::validate::{validate_fleet, validate_pond, ValidationError};
use log::debug;

/// Outcome of a recalculation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RecalcOutcome {
    /// Inputs validated; a fresh result was produced.
    Updated(CalculationResult),
    /// Validation failed; no result was computed and the previous
    /// `last_valid` is untouched.
    Invalid(Vec<ValidationError>),
}

/// Everything the calculator knows, as one immutable value.
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub excavators: Fleet<Excavator>,
    pub trucks: Fleet<Truck>,
    pub pond: PondDimensions,
    /// Retained separately from the live inputs so the UI can keep
    /// showing a stale-but-valid estimate while new input is mid-edit.
    pub last_valid: Option<CalculationResult>,
}

impl AppData {
    /// Default state: one excavator, one truck, the default pond.
    pub fn with_defaults(config: &CalculatorConfig) -> Self {
        Self {
            excavators: Fleet::seeded(Excavator::with_id(1, config)),
            trucks: Fleet::seeded(Truck::with_id(1, config)),
            pond: config.default_pond.clone(),
            last_valid: None,
        }
    }

    pub fn with_pond(&self, pond: PondDimensions) -> Self {
        Self { pond, ..self.clone() }
    }

    pub fn add_excavator(&self, config: &CalculatorConfig) -> Result<Self, FleetRejection> {
        let excavators = self
            .excavators
            .add_unit(config.max_excavators, |id| Excavator::with_id(id, config))?;
        Ok(Self { excavators, ..self.clone() })
    }

    pub fn remove_excavator(
        &self,
        id: u32,
        config: &CalculatorConfig,
    ) -> Result<Self, FleetRejection> {
        let excavators = self.excavators.remove_unit(id, config.min_units)?;
        Ok(Self { excavators, ..self.clone() })
    }

    pub fn update_excavator(
        &self,
        id: u32,
        apply: impl FnMut(&Excavator) -> Excavator,
    ) -> Result<Self, FleetRejection> {
        let excavators = self.excavators.update_unit(id, apply)?;
        Ok(Self { excavators, ..self.clone() })
    }

    pub fn add_truck(&self, config: &CalculatorConfig) -> Result<Self, FleetRejection> {
        let trucks = self.trucks.add_unit(config.max_trucks, |id| Truck::with_id(id, config))?;
        Ok(Self { trucks, ..self.clone() })
    }

    pub fn remove_truck(&self, id: u32, config: &CalculatorConfig) -> Result<Self, FleetRejection> {
        let trucks = self.trucks.remove_unit(id, config.min_units)?;
        Ok(Self { trucks, ..self.clone() })
    }

    pub fn update_truck(
        &self,
        id: u32,
        apply: impl FnMut(&Truck) -> Truck,
    ) -> Result<Self, FleetRejection> {
        let trucks = self.trucks.update_unit(id, apply)?;
        Ok(Self { trucks, ..self.clone() })
    }

    /// Run fleet and pond validation, then the engine.
    ///
    /// On any validation error the calculation is suppressed entirely and
    /// the previous `last_valid` survives. On success `last_valid` is
    /// replaced with the fresh result.
    pub fn recalculated(&self, config: &CalculatorConfig) -> (Self, RecalcOutcome) {
        let mut errors = validate_fleet(&self.excavators, &self.trucks, config);
        errors.extend(validate_pond(&self.pond, config));
        if !errors.is_empty() {
            debug!("recalculation suppressed: {} validation error(s)", errors.len());
            return (self.clone(), RecalcOutcome::Invalid(errors));
        }

        let result = calculate_timeline(
            &self.pond,
            self.excavators.units(),
            self.trucks.units(),
            config,
        );
        // Defensive: validation should guarantee a usable result, but an
        // invalid one must never overwrite the last valid estimate.
        let last_valid = if result.is_valid {
            Some(result.clone())
        } else {
            self.last_valid.clone()
        };
        let next = Self { last_valid, ..self.clone() };
        (next, RecalcOutcome::Updated(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Bottleneck;
    use crate::validate::ValidationErrorKind;

    fn config() -> CalculatorConfig {
        CalculatorConfig::default()
    }

    #[test]
    fn test_default_state_recalculates_cleanly() {
        let config = config();
        let data = AppData::with_defaults(&config);
        let (next, outcome) = data.recalculated(&config);
        match outcome {
            RecalcOutcome::Updated(result) => {
                assert!(result.is_valid);
                // Default excavator: 63.75 cy/hr; default truck:
                // (60/15)*12*0.85 = 40.8 cy/hr -> hauling bottleneck.
                assert_eq!(result.bottleneck, Bottleneck::Hauling);
                assert_eq!(next.last_valid, Some(result));
            }
            RecalcOutcome::Invalid(errors) => panic!("unexpected errors: {errors:?}"),
        }
    }

    #[test]
    fn test_invalid_input_retains_last_valid_result() {
        let config = config();
        let data = AppData::with_defaults(&config);
        let (data, _) = data.recalculated(&config);
        let previous = data.last_valid.clone().unwrap();

        // Out-of-range capacity on the only excavator.
        let broken = data
            .update_excavator(1, |e| {
                let mut e = e.clone();
                e.bucket_capacity_cy = -1.0;
                e
            })
            .unwrap();
        let (after, outcome) = broken.recalculated(&config);
        match outcome {
            RecalcOutcome::Invalid(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e.kind, ValidationErrorKind::OutOfRange { .. })));
            }
            RecalcOutcome::Updated(result) => panic!("expected suppression, got {result:?}"),
        }
        assert_eq!(after.last_valid, Some(previous));
    }

    #[test]
    fn test_updates_are_value_semantics() {
        let config = config();
        let data = AppData::with_defaults(&config);
        let grown = data.add_truck(&config).unwrap();
        // The original value is untouched.
        assert_eq!(data.trucks.len(), 1);
        assert_eq!(grown.trucks.len(), 2);
    }

    #[test]
    fn test_remove_below_minimum_is_rejected() {
        let config = config();
        let data = AppData::with_defaults(&config);
        assert!(data.remove_excavator(1, &config).is_err());
        assert_eq!(data.excavators.len(), 1);
    }
}
