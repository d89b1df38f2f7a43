//! Root document component - the complete HTML page.

use leptos::prelude::*;

use crate::RenderOptions;
use crate::content::{BRAND, HERO_TITLE, META_DESCRIPTION};
use crate::sections::{Features, Footer, Hero, Nav, Projects};
use crate::styles::{CSP, page_css};
use crate::theme::{theme_init_script, theme_toggle_script};
use crate::types::SiteContent;

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    /// Card tables to render
    content: SiteContent,
    /// Initial theme class and toggle mounting
    options: RenderOptions,
) -> impl IntoView {
    let title = format!("{} - {}", BRAND, HERO_TITLE);
    let html_class = options.default_theme.html_class();
    let SiteContent { features, projects } = content;

    view! {
        <html lang="en" class=html_class>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=META_DESCRIPTION />
                <meta name="color-scheme" content="light dark" />
                <title>{title}</title>
                <script>{theme_init_script()}</script>
                <style>{page_css()}</style>
            </head>
            <body>
                <Nav toggle=options.toggle />
                <main>
                    <Hero />
                    <Features cards=features />
                    <Projects projects=projects />
                </main>
                <Footer />
                <script>{theme_toggle_script()}</script>
            </body>
        </html>
    }
}
