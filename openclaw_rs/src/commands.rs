//! Subcommand implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use openclaw_landing::{SiteContent, content, render_page};
use tracing::info;

use crate::args::{BuildArgs, ContentArgs, PageArgs, ServeArgs};
use crate::config::{self, OpenclawConfig, PageSettings};
use crate::serve::start_preview_server;

/// Built-in tables, or a validated JSON replacement.
pub fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => {
            let loaded = SiteContent::load(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?;
            info!(
                "loaded {} features and {} projects from {}",
                loaded.features.len(),
                loaded.projects.len(),
                path.display()
            );
            Ok(loaded)
        }
        None => Ok(content::builtin().clone()),
    }
}

/// Render according to flags and config.
pub fn render(args: &PageArgs, config: &OpenclawConfig) -> Result<String> {
    let settings = PageSettings::resolve(args, config);
    let site = load_content(settings.content.as_deref())?;
    let html = render_page(&site, &settings.options);
    info!(
        "rendered {} bytes (theme: {}, toggle: {:?})",
        html.len(),
        settings.options.default_theme,
        settings.options.toggle
    );
    Ok(html)
}

/// Render and write `<out>/index.html`. Returns the written path.
pub fn build(args: &BuildArgs, config: &OpenclawConfig) -> Result<PathBuf> {
    let html = render(&args.page, config)?;
    let out_dir = config::out_dir(args, config);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let target = out_dir.join("index.html");
    std::fs::write(&target, html)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    info!("wrote {}", target.display());
    Ok(target)
}

/// Counts reported by `openclaw check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSummary {
    pub features: usize,
    pub projects: usize,
    pub tags: usize,
}

impl fmt::Display for ContentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content ok: {} features, {} projects, {} tags",
            self.features, self.projects, self.tags
        )
    }
}

pub fn check(args: &ContentArgs, config: &OpenclawConfig) -> Result<ContentSummary> {
    let path = config::content_path(args.content.as_ref(), config);
    let site = load_content(path.as_deref())?;
    // Built-in content skips the loader, validate it here too.
    site.validate().context("Built-in content is invalid")?;
    Ok(ContentSummary {
        features: site.features.len(),
        projects: site.projects.len(),
        tags: site.tag_count(),
    })
}

/// Render once, then serve until the process is stopped.
pub fn serve(args: &ServeArgs, config: &OpenclawConfig) -> Result<()> {
    let html = render(&args.page, config)?;
    let bind_addr = config::bind_addr(args, config);
    let server = start_preview_server(&bind_addr, html)
        .with_context(|| format!("Failed to bind preview server on {}", bind_addr))?;

    println!("Serving OpenClaw landing page at {}", server.url());
    info!("preview server listening on {}", server.addr());
    server.wait();
    Ok(())
}
