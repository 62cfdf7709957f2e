//! Fleet list management: ordered equipment collections with total,
//! value-returning add/remove/update operations.
//!
//! Every operation returns a new `Fleet` (or a rejection) instead of
//! mutating in place, matching the app's unidirectional state updates:
//! the single state value is only ever replaced wholesale.

use thiserror::Error;

/// Implemented by equipment records that live in a [`Fleet`].
pub trait FleetUnit: Clone {
    fn id(&self) -> u32;

    /// The same unit carrying a different id. Used to keep ids stable
    /// across field updates.
    fn with_id_value(self, id: u32) -> Self;
}

impl FleetUnit for crate::equipment::Excavator {
    fn id(&self) -> u32 {
        self.id
    }

    fn with_id_value(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

impl FleetUnit for crate::equipment::Truck {
    fn id(&self) -> u32 {
        self.id
    }

    fn with_id_value(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Why a fleet operation was rejected. The original fleet is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetRejection {
    #[error("fleet is at its maximum of {max} units")]
    AtCapacity { max: usize },

    #[error("fleet must keep at least {min} unit(s)")]
    AtMinimum { min: usize },

    #[error("no unit with id {id}")]
    UnknownId { id: u32 },
}

/// An ordered equipment collection with a monotonically increasing id
/// counter. Ids are fleet-scoped and never reused within a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet<T: FleetUnit> {
    units: Vec<T>,
    next_id: u32,
}

impl<T: FleetUnit> Fleet<T> {
    /// A fleet containing exactly the given unit, with the counter set
    /// past its id.
    pub fn seeded(unit: T) -> Self {
        let next_id = unit.id() + 1;
        Self { units: vec![unit], next_id }
    }

    /// Rebuild a fleet from persisted units. The counter resumes past
    /// the highest persisted id so restored fleets never collide.
    pub fn from_units(units: Vec<T>) -> Self {
        let next_id = units.iter().map(|u| u.id() + 1).max().unwrap_or(1);
        Self { units, next_id }
    }

    pub fn units(&self) -> &[T] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.units.iter().find(|u| u.id() == id)
    }

    /// Append a new unit built from a fresh id. Rejected once the fleet
    /// holds `max` units.
    pub fn add_unit(
        &self,
        max: usize,
        build: impl FnOnce(u32) -> T,
    ) -> Result<Self, FleetRejection> {
        if self.units.len() >= max {
            return Err(FleetRejection::AtCapacity { max });
        }
        let id = self.next_id;
        let mut units = self.units.clone();
        units.push(build(id));
        Ok(Self { units, next_id: id + 1 })
    }

    /// Remove the unit with the given id. Rejected if the result would
    /// drop below `min` units.
    pub fn remove_unit(&self, id: u32, min: usize) -> Result<Self, FleetRejection> {
        if self.get(id).is_none() {
            return Err(FleetRejection::UnknownId { id });
        }
        if self.units.len() <= min {
            return Err(FleetRejection::AtMinimum { min });
        }
        let units: Vec<T> = self.units.iter().filter(|u| u.id() != id).cloned().collect();
        Ok(Self { units, next_id: self.next_id })
    }

    /// Replace the matching unit's fields, preserving order, the other
    /// entries, and the unit's id (ids are not editable).
    pub fn update_unit(
        &self,
        id: u32,
        mut apply: impl FnMut(&T) -> T,
    ) -> Result<Self, FleetRejection> {
        if self.get(id).is_none() {
            return Err(FleetRejection::UnknownId { id });
        }
        let units: Vec<T> = self
            .units
            .iter()
            .map(|u| {
                if u.id() == id {
                    apply(u).with_id_value(id)
                } else {
                    u.clone()
                }
            })
            .collect();
        Ok(Self { units, next_id: self.next_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::equipment::Excavator;

    fn single_unit_fleet() -> (Fleet<Excavator>, CalculatorConfig) {
        let config = CalculatorConfig::default();
        (Fleet::seeded(Excavator::with_id(1, &config)), config)
    }

    #[test]
    fn test_add_assigns_fresh_monotonic_ids() {
        let (fleet, config) = single_unit_fleet();
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        let ids: Vec<u32> = fleet.units().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_rejected_at_capacity() {
        let (mut fleet, config) = single_unit_fleet();
        for _ in 0..2 {
            fleet = fleet.add_unit(3, |id| Excavator::with_id(id, &config)).unwrap();
        }
        let err = fleet.add_unit(3, |id| Excavator::with_id(id, &config)).unwrap_err();
        assert_eq!(err, FleetRejection::AtCapacity { max: 3 });
        // Original fleet is untouched at the cap.
        assert_eq!(fleet.len(), 3);
    }

    #[test]
    fn test_remove_last_unit_rejected() {
        let (fleet, _) = single_unit_fleet();
        let err = fleet.remove_unit(1, 1).unwrap_err();
        assert_eq!(err, FleetRejection::AtMinimum { min: 1 });
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn test_remove_keeps_order_and_counter() {
        let (fleet, config) = single_unit_fleet();
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        let fleet = fleet.remove_unit(2, 1).unwrap();
        let ids: Vec<u32> = fleet.units().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        // Ids are never reused after a removal.
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        assert_eq!(fleet.units().last().unwrap().id, 4);
    }

    #[test]
    fn test_remove_unknown_id_rejected() {
        let (fleet, _) = single_unit_fleet();
        assert_eq!(fleet.remove_unit(99, 1).unwrap_err(), FleetRejection::UnknownId { id: 99 });
    }

    #[test]
    fn test_update_replaces_fields_but_not_id() {
        let (fleet, config) = single_unit_fleet();
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        let updated = fleet
            .update_unit(2, |e| {
                let mut e = e.clone();
                e.id = 777; // must be ignored
                e.bucket_capacity_cy = 4.0;
                e.name = Some("big rig".to_string());
                e
            })
            .unwrap();
        assert_eq!(updated.get(2).unwrap().bucket_capacity_cy, 4.0);
        assert_eq!(updated.get(2).unwrap().name.as_deref(), Some("big rig"));
        // Untouched entry and order preserved.
        assert_eq!(updated.units()[0], fleet.units()[0]);
        assert!(updated.get(777).is_none());
    }

    #[test]
    fn test_from_units_resumes_counter_past_highest_id() {
        let config = CalculatorConfig::default();
        let fleet =
            Fleet::from_units(vec![Excavator::with_id(4, &config), Excavator::with_id(9, &config)]);
        let fleet = fleet.add_unit(10, |id| Excavator::with_id(id, &config)).unwrap();
        assert_eq!(fleet.units().last().unwrap().id, 10);
    }
}
