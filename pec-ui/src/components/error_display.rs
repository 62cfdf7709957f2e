//! Accumulated validation error list.

use crate::state::AppState;
use dioxus::prelude::*;

/// Displays every current validation error in one styled box. The parent
/// should only render this when `AppState::has_errors()` is true.
#[component]
pub fn ErrorDisplay() -> Element {
    let state = use_context::<AppState>();
    let messages = state.error_messages();

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Please fix the following:" }
            ul {
                style: "margin: 6px 0 0 0; padding-left: 20px;",
                for message in messages {
                    li {
                        style: "font-size: 13px;",
                        "{message}"
                    }
                }
            }
        }
    }
}
