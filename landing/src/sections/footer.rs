use leptos::prelude::*;

use crate::content::{COPYRIGHT, GITHUB_URL};

/// Copyright line and the outbound GitHub link.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p class="footer-copy">{COPYRIGHT}</p>
                <div class="footer-links">
                    <a href=GITHUB_URL target="_blank" rel="noreferrer" class="footer-link">
                        "GitHub"
                    </a>
                </div>
            </div>
        </footer>
    }
}
