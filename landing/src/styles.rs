//! CSS for the landing page.
//!
//! Every color goes through a custom property. `:root` (and `html.light`)
//! carries the light palette, `html.dark` the dark one, and a
//! `prefers-color-scheme` block covers pages with no explicit class.
//!
//! # Customization
//!
//! ```rust
//! use openclaw_landing::styles::page_css;
//!
//! let extra = ".hero-title { letter-spacing: -0.04em; }";
//! let combined = format!("{}\n{}", page_css(), extra);
//! assert!(combined.ends_with("}"));
//! ```

/// Custom properties each palette must define.
pub const PALETTE_VARS: &[&str] = &[
    "--bg",
    "--bg-header",
    "--bg-card",
    "--bg-muted",
    "--bg-chip",
    "--text",
    "--text-muted",
    "--text-subtle",
    "--border",
    "--border-strong",
    "--btn-bg",
    "--btn-text",
    "--ring",
    "--badge-active-bg",
    "--badge-active-text",
    "--badge-beta-bg",
    "--badge-beta-text",
    "--badge-archived-bg",
    "--badge-archived-text",
    "--placeholder",
];

/// Light palette, applied on `:root` and `html.light`.
pub const LIGHT_PALETTE: &str = r#"
    --bg: #ffffff;
    --bg-header: rgba(255, 255, 255, 0.8);
    --bg-card: #f9fafb;
    --bg-muted: #f9fafb;
    --bg-chip: #f3f4f6;
    --text: #111827;
    --text-muted: #4b5563;
    --text-subtle: #6b7280;
    --border: #e5e7eb;
    --border-strong: #d1d5db;
    --btn-bg: #111827;
    --btn-text: #ffffff;
    --ring: rgba(17, 24, 39, 0.4);
    --badge-active-bg: #dcfce7;
    --badge-active-text: #15803d;
    --badge-beta-bg: #fef3c7;
    --badge-beta-text: #b45309;
    --badge-archived-bg: #f3f4f6;
    --badge-archived-text: #4b5563;
    --placeholder: #e5e7eb;
"#;

/// Dark palette, applied on `html.dark`.
pub const DARK_PALETTE: &str = r#"
    --bg: #030712;
    --bg-header: rgba(3, 7, 18, 0.8);
    --bg-card: rgba(17, 24, 39, 0.5);
    --bg-muted: rgba(17, 24, 39, 0.3);
    --bg-chip: #1f2937;
    --text: #f3f4f6;
    --text-muted: #9ca3af;
    --text-subtle: #6b7280;
    --border: #1f2937;
    --border-strong: #374151;
    --btn-bg: #ffffff;
    --btn-text: #111827;
    --ring: rgba(243, 244, 246, 0.4);
    --badge-active-bg: rgba(20, 83, 45, 0.3);
    --badge-active-text: #4ade80;
    --badge-beta-bg: rgba(120, 53, 15, 0.3);
    --badge-beta-text: #fbbf24;
    --badge-archived-bg: #1f2937;
    --badge-archived-text: #9ca3af;
    --placeholder: #1f2937;
"#;

const LAYOUT_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

.container { margin: 0 auto; max-width: 72rem; padding: 0 1.5rem; }
.container-narrow { margin: 0 auto; max-width: 56rem; text-align: center; }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid var(--border);
    background: var(--bg-header);
    backdrop-filter: blur(4px);
}
.site-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 4rem;
}
.brand { font-size: 1.25rem; font-weight: 700; }

/* Theme slot */
.theme-slot {
    display: flex;
    align-items: center;
    justify-content: center;
    min-width: 44px;
    min-height: 44px;
    border-radius: 9999px;
}
.theme-slot:focus-within { box-shadow: 0 0 0 2px var(--bg), 0 0 0 4px var(--ring); }
.theme-fallback {
    width: 2.75rem;
    height: 2.75rem;
    border-radius: 9999px;
    background: var(--placeholder);
}
.theme-toggle {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.75rem;
    height: 2.75rem;
    border: 1px solid var(--border);
    border-radius: 9999px;
    background: var(--bg);
    color: var(--text);
    cursor: pointer;
}
.theme-toggle:focus-visible { outline: none; }
.theme-icon-dark { display: none; }
html.dark .theme-icon-light { display: none; }
html.dark .theme-icon-dark { display: inline; }

/* Hero */
.hero { padding: 6rem 1.5rem; }
.hero-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
}
.hero-tagline {
    margin: 1.5rem auto 0;
    max-width: 42rem;
    font-size: 1.125rem;
    color: var(--text-muted);
}
.hero-actions {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1rem;
    margin-top: 2.5rem;
}
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    min-height: 44px;
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-weight: 500;
}
.btn:focus-visible { outline: none; box-shadow: 0 0 0 2px var(--bg), 0 0 0 4px var(--ring); }
.btn-primary { background: var(--btn-bg); color: var(--btn-text); transition: opacity 0.15s; }
.btn-primary:hover { opacity: 0.9; }
.btn-secondary { border: 1px solid var(--border-strong); transition: background 0.15s; }
.btn-secondary:hover { background: var(--bg-chip); }

/* Sections */
.section { padding: 5rem 1.5rem; }
.section-muted { background: var(--bg-muted); }
.section-title { margin: 0 0 1rem; text-align: center; font-size: 1.875rem; font-weight: 700; }
.section-intro { margin: 0 auto 3rem; max-width: 42rem; text-align: center; color: var(--text-muted); }

.card-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
.project-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }

.feature-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--bg-card);
}
.feature-icon { margin-bottom: 1rem; font-size: 1.5rem; }
.card-title { margin: 0 0 0.5rem; font-size: 1.125rem; font-weight: 600; }
.card-text { margin: 0; font-size: 0.875rem; line-height: 1.625; color: var(--text-muted); }

.project-card {
    padding: 1.5rem;
    border: 1px solid var(--border);
    border-radius: 1rem;
    background: var(--bg);
    transition: border-color 0.15s;
}
.project-card:hover { border-color: var(--border-strong); }
.project-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 0.75rem;
}
.project-head .card-title { margin: 0; }
.project-card .card-text { margin-bottom: 1rem; }

.status-badge { padding: 0.25rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; }
.status-active { background: var(--badge-active-bg); color: var(--badge-active-text); }
.status-beta { background: var(--badge-beta-bg); color: var(--badge-beta-text); }
.status-archived { background: var(--badge-archived-bg); color: var(--badge-archived-text); }

.tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag-chip {
    padding: 0.25rem 0.5rem;
    border-radius: 0.375rem;
    background: var(--bg-chip);
    color: var(--text-muted);
    font-size: 0.75rem;
}

/* Footer */
.site-footer { padding: 2rem 1.5rem; border-top: 1px solid var(--border); }
.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    text-align: center;
}
.footer-copy { margin: 0; font-size: 0.875rem; color: var(--text-subtle); }
.footer-links { display: flex; align-items: center; gap: 1.5rem; }
.footer-link {
    display: inline-flex;
    align-items: center;
    min-height: 44px;
    font-size: 0.875rem;
    color: var(--text-subtle);
    transition: color 0.15s;
}
.footer-link:hover { color: var(--text); }

@media (min-width: 640px) {
    .hero-title { font-size: 3rem; }
    .hero-actions { flex-direction: row; }
}

@media (min-width: 768px) {
    .hero { padding: 8rem 1.5rem; }
    .hero-title { font-size: 3.75rem; }
    .hero-tagline { font-size: 1.25rem; }
    .card-grid { grid-template-columns: repeat(3, 1fr); }
    .project-grid { grid-template-columns: repeat(2, 1fr); }
    .footer-inner { flex-direction: row; text-align: left; }
}

@media (min-width: 1024px) {
    .project-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;

/// Content-Security-Policy for the generated document. Scripts and styles
/// are inline, nothing is fetched.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// Assemble the full stylesheet: both palettes plus layout rules.
pub fn page_css() -> String {
    format!(
        ":root, html.light {{{LIGHT_PALETTE}}}\n\
         html.dark {{{DARK_PALETTE}}}\n\
         @media (prefers-color-scheme: dark) {{\n  html:not(.light) {{{DARK_PALETTE}}}\n}}\n\
         {LAYOUT_CSS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_palettes_define_every_variable() {
        for var in PALETTE_VARS {
            let decl = format!("{var}:");
            assert!(LIGHT_PALETTE.contains(&decl), "light palette misses {var}");
            assert!(DARK_PALETTE.contains(&decl), "dark palette misses {var}");
        }
    }

    #[test]
    fn layout_only_uses_known_variables() {
        for (idx, _) in LAYOUT_CSS.match_indices("var(") {
            let rest = &LAYOUT_CSS[idx + 4..];
            let name = &rest[..rest.find(')').expect("closing paren")];
            assert!(PALETTE_VARS.contains(&name), "unknown variable {name}");
        }
    }

    #[test]
    fn page_css_has_light_and_dark_selectors() {
        let css = page_css();
        assert!(css.contains(":root, html.light {"));
        assert!(css.contains("html.dark {"));
        assert!(css.contains("prefers-color-scheme: dark"));
        assert!(css.contains(".tag-chip"));
    }
}
