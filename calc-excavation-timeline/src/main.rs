//! Pond excavation timeline calculator.
//!
//! Estimates how many working days a pond excavation takes from the
//! equipment fleet and pond geometry. Data flow:
//! 1. On mount: restore the persisted state blob (or defaults) and
//!    compute the initial estimate.
//! 2. Each input keystroke validates immediately; valid values commit
//!    into the state, invalid text shows an inline error.
//! 3. A 300ms debounce after the last keystroke runs
//!    validate -> calculate -> persist; only the last input in the
//!    window fires.
//! 4. Resize events map the viewport width to Mobile/Tablet/Desktop.

use dioxus::prelude::*;
use pec_core::layout::LayoutMode;
use pec_ui::components::{ErrorDisplay, FleetEditor, InfoBanner, PondForm, ResultsPanel};
use pec_ui::state::{AppState, FleetKind};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("excavation-calculator-root"))
        .launch(App);
}

/// Current viewport width in CSS pixels.
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect: restore state and track the viewport, once on mount ───
    use_effect(move || {
        state.restore();
        state.layout.set(LayoutMode::for_width(viewport_width()));

        let resize = Closure::<dyn FnMut()>::new(move || {
            state.layout.set(LayoutMode::for_width(viewport_width()));
        });
        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
        // The listener stays installed for the whole session.
        resize.forget();
    });

    let layout = (state.layout)();
    let max_width = match layout {
        LayoutMode::Mobile => "100%",
        LayoutMode::Tablet => "760px",
        LayoutMode::Desktop => "960px",
    };
    // Fleets sit side by side on Desktop, stacked otherwise.
    let fleet_direction = match layout {
        LayoutMode::Desktop => "row",
        _ => "column",
    };

    rsx! {
        div {
            style: "max-width: {max_width}; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if !(state.banner_dismissed)() {
                InfoBanner {
                    message: "Estimates apply an 85% efficiency derating to theoretical equipment throughput.".to_string(),
                }
            }

            h2 {
                style: "margin: 8px 0; font-size: 18px;",
                "Pond Excavation Timeline"
            }

            if state.has_errors() {
                ErrorDisplay {}
            }

            ResultsPanel {}
            PondForm {}

            div {
                style: "display: flex; flex-direction: {fleet_direction}; gap: 12px;",
                div {
                    style: "flex: 1;",
                    FleetEditor { kind: FleetKind::Excavators }
                }
                div {
                    style: "flex: 1;",
                    FleetEditor { kind: FleetKind::Trucks }
                }
            }

            p {
                style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                "The slower of excavation vs. hauling caps overall throughput and sets the day count."
            }
        }
    }
}
