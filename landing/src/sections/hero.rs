use leptos::prelude::*;

use crate::content::{HERO_TAGLINE, HERO_TITLE, PROJECTS_ANCHOR};

/// Hero banner: the page's `<h1>`, tagline and two calls to action.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container-narrow">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-tagline">{HERO_TAGLINE}</p>
                <div class="hero-actions">
                    <a href=PROJECTS_ANCHOR class="btn btn-primary">
                        "View on GitHub"
                    </a>
                    <a href=PROJECTS_ANCHOR class="btn btn-secondary">
                        "See Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
