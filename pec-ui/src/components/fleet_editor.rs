//! Editor for one equipment fleet: a row per unit plus add/remove.
//!
//! On the Mobile layout only the first unit is editable and the
//! add/remove buttons are hidden; Tablet and Desktop show the full
//! fleet.

use crate::components::NumberField;
use crate::state::{AppState, FleetKind, UnitRowView};
use dioxus::prelude::*;
use pec_core::layout::LayoutMode;

#[derive(Props, Clone, PartialEq)]
pub struct FleetEditorProps {
    pub kind: FleetKind,
}

/// One fleet's editor section.
#[component]
pub fn FleetEditor(props: FleetEditorProps) -> Element {
    let state = use_context::<AppState>();
    let kind = props.kind;
    let compact = (state.layout)() == LayoutMode::Mobile;

    let mut rows = state.fleet_rows(kind);
    if compact {
        rows.truncate(1);
    }
    let count = state.fleet_len(kind);

    rsx! {
        div {
            style: "margin: 12px 0; padding: 12px; border: 1px solid #e0e0e0; border-radius: 6px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 {
                    style: "margin: 0; font-size: 15px;",
                    "{kind.title()} ({count})"
                }
                if !compact {
                    button {
                        style: "padding: 4px 10px;",
                        disabled: state.at_capacity(kind),
                        onclick: move |_| state.add_unit(kind),
                        "Add"
                    }
                }
            }
            for row in rows {
                UnitRow { kind, row, compact }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UnitRowProps {
    kind: FleetKind,
    row: UnitRowView,
    compact: bool,
}

/// A single unit's row: name, numeric fields, active toggle, remove.
#[component]
fn UnitRow(props: UnitRowProps) -> Element {
    let state = use_context::<AppState>();
    let kind = props.kind;
    let id = props.row.id;

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; padding: 6px 0; border-top: 1px solid #f0f0f0;",
            label {
                style: "display: flex; flex-direction: column; gap: 2px; font-size: 13px;",
                span { "Name" }
                input {
                    r#type: "text",
                    value: "{props.row.name}",
                    placeholder: "Unit #{id}",
                    style: "width: 110px; padding: 4px 6px; border: 1px solid #bbb; border-radius: 4px;",
                    onchange: move |evt: Event<FormData>| state.rename_unit(kind, id, evt.value()),
                }
            }
            for field_view in props.row.fields.clone() {
                NumberField {
                    label: field_view.label.to_string(),
                    value: field_view.value.clone(),
                    error: field_view.error.clone(),
                    on_change: move |raw| state.apply_field_input(field_view.field, raw),
                }
            }
            label {
                style: "display: flex; gap: 4px; align-items: center; font-size: 13px; padding-bottom: 6px;",
                input {
                    r#type: "checkbox",
                    checked: props.row.is_active,
                    onchange: move |evt: Event<FormData>| {
                        state.set_unit_active(kind, id, evt.checked())
                    },
                }
                "Active"
            }
            if !props.compact {
                button {
                    style: "padding: 4px 10px; margin-bottom: 4px;",
                    disabled: state.at_minimum(kind),
                    onclick: move |_| state.remove_unit(kind, id),
                    "Remove"
                }
            }
        }
    }
}
