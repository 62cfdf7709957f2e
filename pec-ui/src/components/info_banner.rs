//! Dismissible informational banner.
//!
//! Dismissal is session-only: the flag lives in a signal and is never
//! written to storage, so the banner returns on the next page load.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoBannerProps {
    pub message: String,
}

/// Informational banner with a dismiss button. The parent should skip
/// rendering it once `AppState::banner_dismissed` is set.
#[component]
pub fn InfoBanner(props: InfoBannerProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; gap: 12px; padding: 10px 14px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border: 1px solid #90CAF9; border-radius: 4px; font-size: 13px;",
            span { "{props.message}" }
            button {
                style: "border: none; background: none; color: #1565C0; cursor: pointer; font-size: 15px;",
                onclick: move |_| state.banner_dismissed.set(true),
                "\u{2715}"
            }
        }
    }
}
