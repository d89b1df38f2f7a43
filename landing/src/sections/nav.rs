use leptos::prelude::*;

use super::ThemeSlot;
use crate::content::BRAND;
use crate::theme::ToggleMount;

/// Sticky header with the brand and the theme toggle slot.
#[component]
pub fn Nav(
    /// How the toggle is mounted into the header slot
    toggle: ToggleMount,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="container site-nav">
                <span class="brand">{BRAND}</span>
                <ThemeSlot mount=toggle />
            </nav>
        </header>
    }
}
