//! Input validation: per-field range checks and fleet-level rules.
//!
//! Field validation is a pure function of (field, raw text, config).
//! Fleet validation accumulates every violation instead of failing fast,
//! so the user sees all problems in a single pass.

use crate::config::CalculatorConfig;
use crate::equipment::{Excavator, Truck};
use crate::fleet::Fleet;
use crate::pond::PondDimensions;
use std::fmt;
use thiserror::Error;

/// The numeric input fields the calculator exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    BucketCapacity,
    CycleTime,
    TruckCapacity,
    RoundTripTime,
    PondLength,
    PondWidth,
    PondDepth,
    WorkHoursPerDay,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::BucketCapacity,
        FieldKind::CycleTime,
        FieldKind::TruckCapacity,
        FieldKind::RoundTripTime,
        FieldKind::PondLength,
        FieldKind::PondWidth,
        FieldKind::PondDepth,
        FieldKind::WorkHoursPerDay,
    ];

    /// Human-readable field label for inline error text.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::BucketCapacity => "Bucket capacity",
            FieldKind::CycleTime => "Cycle time",
            FieldKind::TruckCapacity => "Truck capacity",
            FieldKind::RoundTripTime => "Round-trip time",
            FieldKind::PondLength => "Pond length",
            FieldKind::PondWidth => "Pond width",
            FieldKind::PondDepth => "Pond depth",
            FieldKind::WorkHoursPerDay => "Work hours per day",
        }
    }
}

/// Identifies which input a validation error belongs to.
///
/// Scalar pond fields have no unit id; equipment fields carry the
/// fleet-scoped id of the unit whose row the error should appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub kind: FieldKind,
    pub unit: Option<u32>,
}

impl FieldId {
    pub fn scalar(kind: FieldKind) -> Self {
        Self { kind, unit: None }
    }

    pub fn unit(kind: FieldKind, unit_id: u32) -> Self {
        Self { kind, unit: Some(unit_id) }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(id) => write!(f, "{} (unit #{id})", self.kind.label()),
            None => write!(f, "{}", self.kind.label()),
        }
    }
}

/// Why a field or fleet failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    /// The field was empty.
    #[error("a value is required")]
    Required,

    /// The raw text did not parse as a finite number.
    #[error("not a valid number")]
    InvalidFormat,

    /// Parsed, but outside the configured bounds.
    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },

    /// Fewer units (or active units) than the fleet minimum.
    #[error("fleet needs at least {min} active {fleet}")]
    TooFewUnits { fleet: &'static str, min: usize },

    /// More units than the fleet cap.
    #[error("fleet cannot exceed {max} {fleet}")]
    TooManyUnits { fleet: &'static str, max: usize },
}

/// A validation failure attached to the input it describes.
///
/// Derived fresh on every input pass; never persisted.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field}: {kind}")]
pub struct ValidationError {
    pub field: FieldId,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(field: FieldId, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Parse and range-check one raw input string.
///
/// Pure function of its three inputs; the configured range for the
/// field's kind comes from `config`, never from hard-coded bounds.
pub fn validate_field(
    field: FieldId,
    raw: &str,
    config: &CalculatorConfig,
) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, ValidationErrorKind::Required));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::new(field, ValidationErrorKind::InvalidFormat))?;
    if !value.is_finite() {
        return Err(ValidationError::new(field, ValidationErrorKind::InvalidFormat));
    }

    let range = config.range_for(field.kind);
    if !range.contains(value) {
        return Err(ValidationError::new(
            field,
            ValidationErrorKind::OutOfRange { min: range.min, max: range.max },
        ));
    }

    Ok(value)
}

/// Range-check an already-numeric value, as stored in state.
///
/// Covers values that bypassed the per-keystroke path, e.g. a blob
/// restored from browser storage.
fn check_stored(field: FieldId, value: f64, config: &CalculatorConfig) -> Option<ValidationError> {
    let range = config.range_for(field.kind);
    if value.is_finite() && range.contains(value) {
        None
    } else {
        Some(ValidationError::new(
            field,
            ValidationErrorKind::OutOfRange { min: range.min, max: range.max },
        ))
    }
}

/// Fleet-level business rules, accumulated (never fail-fast).
///
/// Checks at least `min_units` active units per fleet, fleet sizes within
/// the configured caps, and every unit's stored numeric fields in range.
pub fn validate_fleet(
    excavators: &Fleet<Excavator>,
    trucks: &Fleet<Truck>,
    config: &CalculatorConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let active_excavators = excavators.units().iter().filter(|e| e.is_active).count();
    if active_excavators < config.min_units {
        errors.push(ValidationError::new(
            FieldId::scalar(FieldKind::BucketCapacity),
            ValidationErrorKind::TooFewUnits { fleet: "excavators", min: config.min_units },
        ));
    }
    if excavators.len() > config.max_excavators {
        errors.push(ValidationError::new(
            FieldId::scalar(FieldKind::BucketCapacity),
            ValidationErrorKind::TooManyUnits { fleet: "excavators", max: config.max_excavators },
        ));
    }

    let active_trucks = trucks.units().iter().filter(|t| t.is_active).count();
    if active_trucks < config.min_units {
        errors.push(ValidationError::new(
            FieldId::scalar(FieldKind::TruckCapacity),
            ValidationErrorKind::TooFewUnits { fleet: "trucks", min: config.min_units },
        ));
    }
    if trucks.len() > config.max_trucks {
        errors.push(ValidationError::new(
            FieldId::scalar(FieldKind::TruckCapacity),
            ValidationErrorKind::TooManyUnits { fleet: "trucks", max: config.max_trucks },
        ));
    }

    for exc in excavators.units() {
        if let Some(err) = check_stored(
            FieldId::unit(FieldKind::BucketCapacity, exc.id),
            exc.bucket_capacity_cy,
            config,
        ) {
            errors.push(err);
        }
        if let Some(err) =
            check_stored(FieldId::unit(FieldKind::CycleTime, exc.id), exc.cycle_time_min, config)
        {
            errors.push(err);
        }
    }
    for truck in trucks.units() {
        if let Some(err) = check_stored(
            FieldId::unit(FieldKind::TruckCapacity, truck.id),
            truck.capacity_cy,
            config,
        ) {
            errors.push(err);
        }
        if let Some(err) = check_stored(
            FieldId::unit(FieldKind::RoundTripTime, truck.id),
            truck.round_trip_min,
            config,
        ) {
            errors.push(err);
        }
    }

    errors
}

/// Range-check the stored pond dimensions, accumulated.
pub fn validate_pond(pond: &PondDimensions, config: &CalculatorConfig) -> Vec<ValidationError> {
    let checks = [
        (FieldKind::PondLength, pond.length_ft),
        (FieldKind::PondWidth, pond.width_ft),
        (FieldKind::PondDepth, pond.depth_ft),
        (FieldKind::WorkHoursPerDay, pond.work_hours_per_day),
    ];
    checks
        .into_iter()
        .filter_map(|(kind, value)| check_stored(FieldId::scalar(kind), value, config))
        .collect()
}
