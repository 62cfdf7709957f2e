//! Labelled numeric input with inline validation error text.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NumberFieldProps {
    pub label: String,
    /// Raw display text (uncommitted input while mid-edit).
    pub value: String,
    /// Inline error for this field, if any.
    #[props(default)]
    pub error: Option<String>,
    pub on_change: EventHandler<String>,
}

/// A numeric input field. Fires on every keystroke; the caller decides
/// what to debounce.
#[component]
pub fn NumberField(props: NumberFieldProps) -> Element {
    let border = if props.error.is_some() { "#C62828" } else { "#bbb" };
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 2px; font-size: 13px;",
            span { "{props.label}" }
            input {
                r#type: "number",
                step: "any",
                value: "{props.value}",
                style: "width: 110px; padding: 4px 6px; border: 1px solid {border}; border-radius: 4px;",
                oninput: move |evt: Event<FormData>| props.on_change.call(evt.value()),
            }
            if let Some(err) = props.error.as_ref() {
                span {
                    style: "font-size: 11px; color: #C62828;",
                    "{err}"
                }
            }
        }
    }
}
