//! Core library for the pond excavation timeline calculator.
//!
//! Everything in this crate is pure and WASM-agnostic: equipment and pond
//! records, the embedded configuration, field/fleet validation, the
//! calculation engine, fleet list operations, the immutable application
//! state, the persisted-state JSON codec, and the viewport layout mapping.
//!
//! The browser-facing pieces (Dioxus components, localStorage, the debounce
//! timer) live in `pec-ui`; this crate never touches `web-sys`.

pub mod config;
pub mod engine;
pub mod equipment;
pub mod fleet;
pub mod layout;
pub mod pond;
pub mod state;
pub mod storage;
pub mod validate;
