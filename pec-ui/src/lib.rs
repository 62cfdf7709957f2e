//! Shared Dioxus components and browser plumbing for the calculator app.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals and the input
//!   routing (raw text -> validation -> pure state update)
//! - `debounce`: cancellable timer so only the last keystroke in the
//!   debounce window triggers a recalculation
//! - `storage`: the localStorage bridge around `pec_core::storage`
//! - `components`: reusable RSX components (fields, fleet editor,
//!   results panel, error list, info banner)

pub mod components;
pub mod debounce;
pub mod state;
pub mod storage;
