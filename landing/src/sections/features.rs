use leptos::prelude::*;

use crate::content::{FEATURES_HEADING, FEATURES_INTRO};
use crate::types::FeatureCard;

/// "What We Build" section: one card per feature, in list order.
#[component]
pub fn Features(
    /// Cards in display order
    cards: Vec<FeatureCard>,
) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <h2 class="section-title">{FEATURES_HEADING}</h2>
                <p class="section-intro">{FEATURES_INTRO}</p>
                <div class="card-grid">
                    {cards
                        .into_iter()
                        .map(|card| view! { <FeatureCardView card=card /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCardView(card: FeatureCard) -> impl IntoView {
    let key = card.title.clone();
    view! {
        <article class="feature-card" data-key=key>
            <div class="feature-icon" aria-hidden="true">{card.icon}</div>
            <h3 class="card-title">{card.title}</h3>
            <p class="card-text">{card.description}</p>
        </article>
    }
}
