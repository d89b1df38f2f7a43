//! Theme toggle widget and the header slot it is mounted into.
//!
//! The slot is the page's only suspension point. In deferred mode it renders
//! a placeholder plus a `<template>` holding the real toggle; the toggle
//! script swaps one for the other exactly once. When the script never runs,
//! the placeholder simply stays.

use leptos::prelude::*;

use super::{ICON_MOON, ICON_SUN, Icon};
use crate::theme::ToggleMount;

/// Button flipping between the light and dark variant.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    view! {
        <button
            type="button"
            class="theme-toggle"
            data-role="theme-toggle"
            aria-label="Toggle light/dark mode"
            title="Toggle light/dark mode"
        >
            <Icon path=ICON_SUN class="theme-icon-light" />
            <Icon path=ICON_MOON class="theme-icon-dark" />
        </button>
    }
}

/// Same-size placeholder shown until the toggle is mounted.
#[component]
pub fn ThemeFallback() -> impl IntoView {
    view! { <div class="theme-fallback" data-role="theme-fallback" aria-hidden="true"></div> }
}

/// Header slot holding the toggle.
#[component]
pub fn ThemeSlot(
    /// Placeholder plus template, or the toggle in place
    mount: ToggleMount,
) -> impl IntoView {
    let body = match mount {
        ToggleMount::Deferred => view! {
            <ThemeFallback />
            <template data-role="theme-toggle-template">
                <ThemeToggle />
            </template>
        }
        .into_any(),
        ToggleMount::Eager => view! { <ThemeToggle /> }.into_any(),
    };
    let mounted = if mount == ToggleMount::Eager { "true" } else { "false" };

    view! {
        <div class="theme-slot" data-role="theme-slot" data-mounted=mounted>
            {body}
        </div>
    }
}
