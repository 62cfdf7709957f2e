//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.
//!
//! The domain state itself is one immutable `pec_core::state::AppData`
//! value held in a signal and only ever replaced wholesale through the
//! core's pure update functions. Raw field text is committed to the
//! domain state as soon as it validates; text that fails to parse stays
//! here, alongside its error, until the user corrects it.

use crate::debounce::Debouncer;
use crate::storage;
use dioxus::prelude::*;
use log::warn;
use pec_core::config::CalculatorConfig;
use pec_core::engine::CalculationResult;
use pec_core::layout::LayoutMode;
use pec_core::state::{AppData, RecalcOutcome};
use pec_core::validate::{
    validate_field, validate_fleet, validate_pond, FieldId, FieldKind, ValidationError,
};
use std::collections::HashMap;

/// Which equipment fleet a component is operating on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetKind {
    Excavators,
    Trucks,
}

impl FleetKind {
    pub fn title(&self) -> &'static str {
        match self {
            FleetKind::Excavators => "Excavators",
            FleetKind::Trucks => "Trucks",
        }
    }
}

/// One displayable numeric field of a fleet unit row.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFieldView {
    pub field: FieldId,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// One fleet unit row, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRowView {
    pub id: u32,
    pub name: String,
    pub is_active: bool,
    pub fields: Vec<UnitFieldView>,
}

/// Shared application state for the calculator.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Embedded configuration (ranges, caps, efficiency, debounce delay).
    pub config: Signal<CalculatorConfig>,
    /// The single domain state value.
    pub data: Signal<AppData>,
    /// Raw text for fields whose current input does not parse. Valid
    /// input is committed into `data` immediately and has no entry here.
    pub raw_inputs: Signal<HashMap<FieldId, String>>,
    /// Per-field errors from the last input pass.
    pub field_errors: Signal<HashMap<FieldId, ValidationError>>,
    /// Fleet- and pond-level errors from the last recalculation pass.
    pub fleet_errors: Signal<Vec<ValidationError>>,
    /// Current responsive layout.
    pub layout: Signal<LayoutMode>,
    /// Info banner dismissal; session-only, never persisted.
    pub banner_dismissed: Signal<bool>,
    debouncer: Signal<Debouncer>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let config = CalculatorConfig::default();
        let data = AppData::with_defaults(&config);
        Self {
            config: Signal::new(config),
            data: Signal::new(data),
            raw_inputs: Signal::new(HashMap::new()),
            field_errors: Signal::new(HashMap::new()),
            fleet_errors: Signal::new(Vec::new()),
            layout: Signal::new(LayoutMode::Desktop),
            banner_dismissed: Signal::new(false),
            debouncer: Signal::new(Debouncer::new()),
        }
    }

    /// Restore persisted state and compute the initial result. Call once
    /// on mount.
    pub fn restore(mut self) {
        let config = self.config.peek().clone();
        self.data.set(storage::load(&config));
        self.recalculate_now();
    }

    // ─── Display helpers ───

    /// The text a field input should show: the uncommitted raw text if
    /// the field is mid-edit/invalid, otherwise the stored value.
    pub fn display_value(&self, field: FieldId) -> String {
        if let Some(raw) = self.raw_inputs.read().get(&field) {
            return raw.clone();
        }
        self.stored_value(field).map(|v| v.to_string()).unwrap_or_default()
    }

    /// Inline error text for a field, from either validation tier.
    pub fn error_for(&self, field: FieldId) -> Option<String> {
        if let Some(err) = self.field_errors.read().get(&field) {
            return Some(err.kind.to_string());
        }
        self.fleet_errors
            .read()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.kind.to_string())
    }

    /// All current errors as display strings, field errors first.
    pub fn error_messages(&self) -> Vec<String> {
        let mut field_errs: Vec<String> =
            self.field_errors.read().values().map(|e| e.to_string()).collect();
        field_errs.sort();
        field_errs.extend(self.fleet_errors.read().iter().map(|e| e.to_string()));
        field_errs
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.read().is_empty() || !self.fleet_errors.read().is_empty()
    }

    /// The last valid estimate, if any input has ever validated.
    pub fn current_result(&self) -> Option<CalculationResult> {
        self.data.read().last_valid.clone()
    }

    fn stored_value(&self, field: FieldId) -> Option<f64> {
        let data = self.data.read();
        match (field.kind, field.unit) {
            (FieldKind::PondLength, None) => Some(data.pond.length_ft),
            (FieldKind::PondWidth, None) => Some(data.pond.width_ft),
            (FieldKind::PondDepth, None) => Some(data.pond.depth_ft),
            (FieldKind::WorkHoursPerDay, None) => Some(data.pond.work_hours_per_day),
            (FieldKind::BucketCapacity, Some(id)) => {
                data.excavators.get(id).map(|e| e.bucket_capacity_cy)
            }
            (FieldKind::CycleTime, Some(id)) => data.excavators.get(id).map(|e| e.cycle_time_min),
            (FieldKind::TruckCapacity, Some(id)) => data.trucks.get(id).map(|t| t.capacity_cy),
            (FieldKind::RoundTripTime, Some(id)) => data.trucks.get(id).map(|t| t.round_trip_min),
            _ => None,
        }
    }

    /// Rows for one fleet's editor.
    pub fn fleet_rows(&self, kind: FleetKind) -> Vec<UnitRowView> {
        let data = self.data.read();
        match kind {
            FleetKind::Excavators => data
                .excavators
                .units()
                .iter()
                .map(|e| UnitRowView {
                    id: e.id,
                    name: e.name.clone().unwrap_or_default(),
                    is_active: e.is_active,
                    fields: vec![
                        self.unit_field(FieldKind::BucketCapacity, e.id, "Bucket capacity (cy)"),
                        self.unit_field(FieldKind::CycleTime, e.id, "Cycle time (min)"),
                    ],
                })
                .collect(),
            FleetKind::Trucks => data
                .trucks
                .units()
                .iter()
                .map(|t| UnitRowView {
                    id: t.id,
                    name: t.name.clone().unwrap_or_default(),
                    is_active: t.is_active,
                    fields: vec![
                        self.unit_field(FieldKind::TruckCapacity, t.id, "Capacity (cy)"),
                        self.unit_field(FieldKind::RoundTripTime, t.id, "Round trip (min)"),
                    ],
                })
                .collect(),
        }
    }

    fn unit_field(&self, kind: FieldKind, unit_id: u32, label: &'static str) -> UnitFieldView {
        let field = FieldId::unit(kind, unit_id);
        UnitFieldView {
            field,
            label,
            value: self.display_value(field),
            error: self.error_for(field),
        }
    }

    pub fn fleet_len(&self, kind: FleetKind) -> usize {
        let data = self.data.read();
        match kind {
            FleetKind::Excavators => data.excavators.len(),
            FleetKind::Trucks => data.trucks.len(),
        }
    }

    pub fn at_capacity(&self, kind: FleetKind) -> bool {
        let config = self.config.read();
        let max = match kind {
            FleetKind::Excavators => config.max_excavators,
            FleetKind::Trucks => config.max_trucks,
        };
        self.fleet_len(kind) >= max
    }

    pub fn at_minimum(&self, kind: FleetKind) -> bool {
        self.fleet_len(kind) <= self.config.read().min_units
    }

    // ─── Input routing ───

    /// Route one raw field edit: validate, commit on success, remember
    /// the text and error on failure, then debounce a recalculation.
    pub fn apply_field_input(mut self, field: FieldId, raw: String) {
        let config = self.config.peek().clone();
        match validate_field(field, &raw, &config) {
            Ok(value) => {
                self.raw_inputs.with_mut(|m| {
                    m.remove(&field);
                });
                self.field_errors.with_mut(|m| {
                    m.remove(&field);
                });
                self.commit_value(field, value);
            }
            Err(err) => {
                self.raw_inputs.with_mut(|m| {
                    m.insert(field, raw);
                });
                self.field_errors.with_mut(|m| {
                    m.insert(field, err);
                });
            }
        }
        self.schedule_recalc();
    }

    fn commit_value(mut self, field: FieldId, value: f64) {
        let data = self.data.peek().clone();
        let updated = match (field.kind, field.unit) {
            (FieldKind::PondLength, None) => {
                let mut pond = data.pond.clone();
                pond.length_ft = value;
                Ok(data.with_pond(pond))
            }
            (FieldKind::PondWidth, None) => {
                let mut pond = data.pond.clone();
                pond.width_ft = value;
                Ok(data.with_pond(pond))
            }
            (FieldKind::PondDepth, None) => {
                let mut pond = data.pond.clone();
                pond.depth_ft = value;
                Ok(data.with_pond(pond))
            }
            (FieldKind::WorkHoursPerDay, None) => {
                let mut pond = data.pond.clone();
                pond.work_hours_per_day = value;
                Ok(data.with_pond(pond))
            }
            (FieldKind::BucketCapacity, Some(id)) => data.update_excavator(id, |e| {
                let mut e = e.clone();
                e.bucket_capacity_cy = value;
                e
            }),
            (FieldKind::CycleTime, Some(id)) => data.update_excavator(id, |e| {
                let mut e = e.clone();
                e.cycle_time_min = value;
                e
            }),
            (FieldKind::TruckCapacity, Some(id)) => data.update_truck(id, |t| {
                let mut t = t.clone();
                t.capacity_cy = value;
                t
            }),
            (FieldKind::RoundTripTime, Some(id)) => data.update_truck(id, |t| {
                let mut t = t.clone();
                t.round_trip_min = value;
                t
            }),
            _ => {
                warn!("no input routes to {field}");
                return;
            }
        };
        match updated {
            Ok(next) => self.data.set(next),
            Err(rejection) => warn!("field update rejected: {rejection}"),
        }
    }

    // ─── Fleet operations ───

    /// Add a default-valued unit. A capacity rejection is a logged no-op;
    /// the add button is disabled at the cap anyway.
    pub fn add_unit(mut self, kind: FleetKind) {
        let config = self.config.peek().clone();
        let data = self.data.peek().clone();
        let result = match kind {
            FleetKind::Excavators => data.add_excavator(&config),
            FleetKind::Trucks => data.add_truck(&config),
        };
        match result {
            Ok(next) => {
                self.data.set(next);
                self.recalculate_now();
            }
            Err(rejection) => warn!("add unit rejected: {rejection}"),
        }
    }

    /// Remove a unit. Rejected (no-op) when the fleet would drop below
    /// its minimum.
    pub fn remove_unit(mut self, kind: FleetKind, id: u32) {
        let config = self.config.peek().clone();
        let data = self.data.peek().clone();
        let result = match kind {
            FleetKind::Excavators => data.remove_excavator(id, &config),
            FleetKind::Trucks => data.remove_truck(id, &config),
        };
        match result {
            Ok(next) => {
                // Any errors attached to the removed unit's fields go too.
                self.raw_inputs.with_mut(|m| m.retain(|f, _| f.unit != Some(id)));
                self.field_errors.with_mut(|m| m.retain(|f, _| f.unit != Some(id)));
                self.data.set(next);
                self.recalculate_now();
            }
            Err(rejection) => warn!("remove unit rejected: {rejection}"),
        }
    }

    pub fn rename_unit(mut self, kind: FleetKind, id: u32, name: String) {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
        let data = self.data.peek().clone();
        let result = match kind {
            FleetKind::Excavators => data.update_excavator(id, |e| {
                let mut e = e.clone();
                e.name = name.clone();
                e
            }),
            FleetKind::Trucks => data.update_truck(id, |t| {
                let mut t = t.clone();
                t.name = name.clone();
                t
            }),
        };
        match result {
            Ok(next) => self.data.set(next),
            Err(rejection) => warn!("rename rejected: {rejection}"),
        }
    }

    pub fn set_unit_active(mut self, kind: FleetKind, id: u32, is_active: bool) {
        let data = self.data.peek().clone();
        let result = match kind {
            FleetKind::Excavators => data.update_excavator(id, |e| {
                let mut e = e.clone();
                e.is_active = is_active;
                e
            }),
            FleetKind::Trucks => data.update_truck(id, |t| {
                let mut t = t.clone();
                t.is_active = is_active;
                t
            }),
        };
        match result {
            Ok(next) => {
                self.data.set(next);
                self.recalculate_now();
            }
            Err(rejection) => warn!("active toggle rejected: {rejection}"),
        }
    }

    // ─── Recalculation ───

    /// Debounce a recalculation: only the last input inside the window
    /// triggers one.
    pub fn schedule_recalc(mut self) {
        let delay_ms = self.config.peek().debounce_ms;
        let state = self;
        self.debouncer.with_mut(|d| {
            d.schedule(delay_ms, move || state.recalculate_now());
        });
    }

    /// Validate, calculate, and persist, immediately.
    ///
    /// While any field holds unparseable text the calculation stays
    /// suppressed (only fleet/pond errors are refreshed) and the previous
    /// valid result remains on display.
    pub fn recalculate_now(mut self) {
        let config = self.config.peek().clone();
        let data = self.data.peek().clone();

        if !self.field_errors.peek().is_empty() {
            let mut errors = validate_fleet(&data.excavators, &data.trucks, &config);
            errors.extend(validate_pond(&data.pond, &config));
            self.fleet_errors.set(errors);
            return;
        }

        let (next, outcome) = data.recalculated(&config);
        match outcome {
            RecalcOutcome::Updated(_) => self.fleet_errors.set(Vec::new()),
            RecalcOutcome::Invalid(errors) => self.fleet_errors.set(errors),
        }
        storage::save(&next);
        self.data.set(next);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
