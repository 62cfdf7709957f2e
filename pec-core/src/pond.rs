//! Pond geometry and the daily work schedule.

use serde::{Deserialize, Serialize};

/// Dimensions of the pond to be excavated, plus the daily work window.
///
/// Lengths are feet. Volume is therefore cubic feet; the calculation
/// engine converts to cubic yards in exactly one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PondDimensions {
    pub length_ft: f64,
    pub width_ft: f64,
    pub depth_ft: f64,
    pub work_hours_per_day: f64,
}

impl PondDimensions {
    /// Excavation volume in cubic feet, exact (no rounding).
    pub fn volume_cubic_feet(&self) -> f64 {
        self.length_ft * self.width_ft * self.depth_ft
    }
}
