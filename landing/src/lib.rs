//! # openclaw-landing
//!
//! Leptos SSR renderer for the OpenClaw landing page.
//!
//! The page is a pure function of two static tables (feature cards and
//! project cards): header with a theme toggle, hero, "What We Build" grid,
//! "Projects" grid, footer. Output is a single self-contained HTML string
//! with inline CSS for both the light and the dark variant.
//!
//! ## Quick Start
//!
//! ```rust
//! use openclaw_landing::{render_builtin_page, render_page, RenderOptions, content};
//!
//! let html = render_builtin_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Same thing, spelled out
//! let same = render_page(content::builtin(), &RenderOptions::default());
//! assert_eq!(html, same);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Card records and their validation
//! - [`content`] - Embedded copy and the built-in card tables
//! - [`sections`] - Leptos UI components, one per page section
//! - [`theme`] - Light/dark preference and the toggle scripts
//! - [`styles`] - CSS palettes and layout
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through `RenderHtml::to_html`; there is no reactive
//! runtime and no hydration.

#![warn(missing_docs)]

pub mod content;
pub mod document;
pub mod error;
pub mod sections;
pub mod styles;
pub mod theme;
pub mod types;

use document::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::{ContentError, LoadError, UnknownTheme};
pub use theme::{Theme, ThemePreference, ToggleMount};
pub use types::{FeatureCard, ProjectCard, ProjectStatus, SiteContent};

/// Knobs that change the rendered document without touching its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class written on `<html>` before any stored preference is read
    pub default_theme: ThemePreference,
    /// Whether the theme toggle starts behind a placeholder
    pub toggle: ToggleMount,
}

/// Render the complete landing page.
///
/// Deterministic: the same content and options always produce the same
/// string. Content is rendered as given; call [`SiteContent::validate`]
/// first for anything that did not come from [`content::builtin`].
///
/// # Example
///
/// ```rust
/// use openclaw_landing::{render_page, RenderOptions, ThemePreference, content};
///
/// let options = RenderOptions {
///     default_theme: ThemePreference::Dark,
///     ..Default::default()
/// };
/// let html = render_page(content::builtin(), &options);
/// assert!(html.contains("AI Agents That Ship Software"));
/// ```
pub fn render_page(content: &SiteContent, options: &RenderOptions) -> String {
    let doc = view! {
        <PageDocument content=content.clone() options={*options} />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the built-in content with default options.
pub fn render_builtin_page() -> String {
    render_page(content::builtin(), &RenderOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> String {
        render_builtin_page()
    }

    /// Slice of `html` from each `marker` to the next one (or the end).
    fn chunks<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
        let starts: Vec<usize> = html.match_indices(marker).map(|(i, _)| i).collect();
        starts
            .iter()
            .enumerate()
            .map(|(n, &start)| {
                let end = starts.get(n + 1).copied().unwrap_or(html.len());
                &html[start..end]
            })
            .collect()
    }

    fn anchor_href<'a>(html: &'a str, label: &str) -> &'a str {
        let label_at = html.find(label).expect("label present");
        let open = html[..label_at].rfind("<a ").expect("anchor open");
        let tag = &html[open..label_at];
        let href = tag.find("href=\"").expect("href") + 6;
        let end = tag[href..].find('"').expect("href end");
        &tag[href..href + end]
    }

    #[test]
    fn renders_complete_document() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<header"));
        assert!(html.contains("<main"));
        assert!(html.contains("<footer"));
        assert!(html.contains("OpenClaw"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(page(), page());
    }

    #[test]
    fn exactly_one_h1_with_hero_title() {
        let html = page();
        assert_eq!(html.matches("<h1").count(), 1);
        let h1 = &html[html.find("<h1").expect("h1")..html.find("</h1>").expect("h1 end")];
        assert!(h1.contains("AI Agents That Ship Software"));
    }

    #[test]
    fn feature_cards_render_verbatim() {
        let html = page();
        let cards = chunks(&html, "class=\"feature-card\"");
        let features = &content::builtin().features;
        assert_eq!(cards.len(), features.len());
        assert_eq!(cards.len(), 3);

        for (chunk, card) in cards.iter().zip(features) {
            assert!(chunk.contains(&card.icon), "icon of {}", card.title);
            assert!(chunk.contains(&card.title));
            assert!(chunk.contains(&card.description), "description of {}", card.title);
        }
    }

    #[test]
    fn project_cards_render_in_order_with_tags() {
        let html = page();
        let section = &html[html.find("id=\"projects\"").expect("projects section")..];
        let cards = chunks(section, "class=\"project-card\"");
        assert_eq!(cards.len(), 3);

        let expected = ["Agent Dashboard", "Agentic Library", "Crypto Tracker"];
        for ((chunk, project), name) in cards.iter().zip(&content::builtin().projects).zip(expected) {
            assert_eq!(project.name, name);
            assert!(chunk.contains(name));
            assert!(chunk.contains(project.status.label()));
            assert!(chunk.contains(&project.description));

            let chips: Vec<&str> = chunks(chunk, "class=\"tag-chip\"")
                .into_iter()
                .map(|c| {
                    let text_start = c.find('>').expect("tag open end") + 1;
                    let text_end = c.find("</span>").expect("tag close");
                    &c[text_start..text_end]
                })
                .collect();
            assert_eq!(chips, project.tags);
        }
    }

    #[test]
    fn project_names_appear_in_source_order() {
        let html = page();
        let positions: Vec<usize> = ["Agent Dashboard", "Agentic Library", "Crypto Tracker"]
            .iter()
            .map(|name| html.find(name).expect("project name"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn hero_actions_point_at_projects() {
        let html = page();
        assert_eq!(anchor_href(&html, "View on GitHub"), "#projects");
        assert_eq!(anchor_href(&html, "See Projects"), "#projects");
    }

    #[test]
    fn footer_link_opens_new_context_without_referrer() {
        let html = page();
        let footer = &html[html.find("<footer").expect("footer")..];
        let open = footer.find("<a ").expect("footer link");
        let tag = &footer[open..open + footer[open..].find('>').expect("tag end")];
        assert!(tag.contains("href=\"https://github.com\""));
        assert!(tag.contains("target=\"_blank\""));
        assert!(tag.contains("rel=\"noreferrer\""));
        assert!(footer.contains("© 2026 OpenClaw. Built by agents, for builders."));
    }

    #[test]
    fn default_render_defers_the_toggle() {
        let html = page();
        assert_eq!(html.matches("class=\"theme-fallback\"").count(), 1);
        assert_eq!(html.matches("<template").count(), 1);
        assert!(html.contains("openclaw-theme"));
    }

    #[test]
    fn eager_render_has_no_fallback() {
        let options = RenderOptions {
            toggle: ToggleMount::Eager,
            ..Default::default()
        };
        let html = render_page(content::builtin(), &options);
        assert!(!html.contains("class=\"theme-fallback\""));
        assert_eq!(html.matches("class=\"theme-toggle\"").count(), 1);
    }

    #[test]
    fn default_theme_sets_html_class() {
        let dark = render_page(
            content::builtin(),
            &RenderOptions {
                default_theme: ThemePreference::Dark,
                ..Default::default()
            },
        );
        assert!(dark.contains("<html lang=\"en\" class=\"dark\""));

        let system = page();
        assert!(!system.contains("class=\"dark\""));
        assert!(system.contains("html.dark {"));
    }

    #[test]
    fn renders_custom_content() {
        let content = SiteContent {
            features: vec![FeatureCard {
                icon: "*".into(),
                title: "Build Farm".into(),
                description: "Distributed builders & caches.".into(),
            }],
            projects: vec![ProjectCard {
                name: "Sandbox".into(),
                status: ProjectStatus::Archived,
                description: "Old experiments.".into(),
                tags: vec!["Rust".into(), "WASM".into()],
            }],
        };
        let html = render_page(&content, &RenderOptions::default());

        assert!(html.contains("Build Farm"));
        assert!(html.contains("Distributed builders &amp; caches."));
        assert!(html.contains("status-archived"));
        assert!(html.contains(">Archived<"));
        assert_eq!(html.matches("class=\"tag-chip\"").count(), 2);
    }

    #[test]
    fn cards_and_chips_carry_their_identity() {
        let html = page();
        let builtin = content::builtin();
        for card in &builtin.features {
            let key = format!("data-key=\"{}\"", card.title);
            assert_eq!(html.matches(&key).count(), 1, "{key}");
        }
        for project in &builtin.projects {
            assert!(html.contains(&format!("data-key=\"{}\"", project.name)));
            for tag in &project.tags {
                let key = format!("data-key=\"{}-{}\"", project.name, tag);
                assert_eq!(html.matches(&key).count(), 1, "{key}");
            }
        }
        assert!(html.contains("data-key=\"Agent Dashboard-Next.js\""));
    }
}
