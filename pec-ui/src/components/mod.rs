//! Reusable Dioxus RSX components for the calculator app.

mod error_display;
mod fleet_editor;
mod info_banner;
mod number_field;
mod pond_form;
mod results_panel;

pub use error_display::ErrorDisplay;
pub use fleet_editor::FleetEditor;
pub use info_banner::InfoBanner;
pub use number_field::NumberField;
pub use pond_form::PondForm;
pub use results_panel::ResultsPanel;
