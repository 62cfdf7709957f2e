//! Pond geometry and work schedule inputs.

use crate::components::NumberField;
use crate::state::AppState;
use dioxus::prelude::*;
use pec_core::validate::{FieldId, FieldKind};

const POND_FIELDS: [(FieldKind, &str); 4] = [
    (FieldKind::PondLength, "Length (ft)"),
    (FieldKind::PondWidth, "Width (ft)"),
    (FieldKind::PondDepth, "Depth (ft)"),
    (FieldKind::WorkHoursPerDay, "Work hours/day"),
];

/// Input section for pond dimensions and the daily work window.
#[component]
pub fn PondForm() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "margin: 12px 0; padding: 12px; border: 1px solid #e0e0e0; border-radius: 6px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 15px;",
                "Pond"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for (kind, label) in POND_FIELDS {
                    NumberField {
                        label: label.to_string(),
                        value: state.display_value(FieldId::scalar(kind)),
                        error: state.error_for(FieldId::scalar(kind)),
                        on_change: move |raw| state.apply_field_input(FieldId::scalar(kind), raw),
                    }
                }
            }
        }
    }
}
