//! Embedded page content: copy, links and the two card tables.
//!
//! Everything here is fixed at compile time. The card tables are built once,
//! on first access, and never change afterwards.

use std::sync::LazyLock;

use crate::types::{FeatureCard, ProjectCard, ProjectStatus, SiteContent};

/// Brand name shown in the header and footer.
pub const BRAND: &str = "OpenClaw";

/// The single `<h1>` of the page.
pub const HERO_TITLE: &str = "AI Agents That Ship Software";

/// One-line pitch under the hero title.
pub const HERO_TAGLINE: &str = "An autonomous agent orchestration system for solo founders. \
     Plan, execute, and deploy software — even while you sleep.";

/// Heading of the feature grid.
pub const FEATURES_HEADING: &str = "What We Build";
/// Lead paragraph of the feature grid.
pub const FEATURES_INTRO: &str = "OpenClaw is a suite of tools for autonomous software development.";

/// Heading of the projects grid.
pub const PROJECTS_HEADING: &str = "Projects";
/// Lead paragraph of the projects grid.
pub const PROJECTS_INTRO: &str = "Built with and for the OpenClaw ecosystem.";

/// In-page anchor both hero actions point at.
pub const PROJECTS_ANCHOR: &str = "#projects";

/// Outbound footer link, opened in a new context without a referrer.
pub const GITHUB_URL: &str = "https://github.com";

/// Footer copyright line.
pub const COPYRIGHT: &str = "© 2026 OpenClaw. Built by agents, for builders.";

/// `<meta name="description">` for the document head.
pub const META_DESCRIPTION: &str =
    "OpenClaw: autonomous agent orchestration for solo founders. Plan, execute, and deploy software.";

static BUILTIN: LazyLock<SiteContent> = LazyLock::new(|| SiteContent {
    features: build_cards(),
    projects: projects(),
});

/// The built-in content tables.
pub fn builtin() -> &'static SiteContent {
    &BUILTIN
}

fn build_cards() -> Vec<FeatureCard> {
    [
        (
            "🤖",
            "Agent Orchestration",
            "Dispatch tasks to specialized AI agents — Claude Code, Codex, Cursor — each matched \
             to the right job. Automatic retries, cost control, and progress tracking.",
        ),
        (
            "📋",
            "Smart Planning",
            "Opus-powered planning that researches tools, identifies gaps, and produces \
             execution-ready task lists. Every plan follows a strict, proven template.",
        ),
        (
            "🔄",
            "Ship While You Sleep",
            "Queue up tasks before bed. Overnight agents execute, test, and commit. \
             Wake up to pull requests, not problems.",
        ),
    ]
    .into_iter()
    .map(|(icon, title, description)| FeatureCard {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

fn projects() -> Vec<ProjectCard> {
    let card = |name: &str, description: &str, tags: [&str; 4]| ProjectCard {
        name: name.into(),
        status: ProjectStatus::Active,
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        card(
            "Agent Dashboard",
            "Mission control interface for AI agent orchestration. Real-time kanban board, \
             system health monitoring, and cost tracking.",
            ["Next.js", "React", "TypeScript", "Tailwind"],
        ),
        card(
            "Agentic Library",
            "Knowledge engine that compounds learnings across projects. Rules, skills, \
             research, lessons, and execution plans.",
            ["Markdown", "Shell", "Python", "MCP"],
        ),
        card(
            "Crypto Tracker",
            "Real-time cryptocurrency portfolio tracking with Supabase backend and responsive \
             dark-mode interface.",
            ["Next.js", "Supabase", "TypeScript", "Tailwind"],
        ),
    ]
}
