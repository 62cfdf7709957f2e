//! Timeline estimate panel: day count, rates, and the bottleneck label.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the current estimate, or the last valid one (clearly marked)
/// while input is invalid. Before any valid input exists, a prompt.
#[component]
pub fn ResultsPanel() -> Element {
    let state = use_context::<AppState>();
    let result = state.current_result();
    let stale = state.has_errors();

    rsx! {
        div {
            style: "margin: 12px 0; padding: 16px; background: #F1F8E9; border: 1px solid #C5E1A5; border-radius: 6px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 15px;",
                "Estimated timeline"
            }
            if let Some(result) = result {
                div {
                    style: "font-size: 28px; font-weight: bold;",
                    "{result.timeline_days} "
                    span {
                        style: "font-size: 16px; font-weight: normal;",
                        if result.timeline_days == 1 { "day" } else { "days" }
                    }
                }
                p {
                    style: "margin: 8px 0 0 0; font-size: 13px; color: #555;",
                    "Volume: {result.total_volume_cy:.1} cy \u{2022} "
                    "Excavation: {result.excavation_rate_cy_hr:.1} cy/hr \u{2022} "
                    "Hauling: {result.hauling_rate_cy_hr:.1} cy/hr"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px;",
                    strong { "Bottleneck: " }
                    "{result.bottleneck.label()}"
                }
                if stale {
                    p {
                        style: "margin: 8px 0 0 0; font-size: 12px; color: #E65100;",
                        "Showing the last valid estimate while the current input has errors."
                    }
                }
            } else {
                p {
                    style: "margin: 0; font-size: 13px; color: #555;",
                    "Enter valid equipment and pond values to see an estimate."
                }
            }
        }
    }
}
