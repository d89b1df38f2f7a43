//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use openclaw_landing::ThemePreference;

#[derive(Parser, Debug)]
#[command(name = "openclaw")]
#[command(about = "Build, check and preview the OpenClaw landing page")]
#[command(version)]
pub struct Cli {
    /// Config file; silently skipped when it does not exist
    #[arg(long, global = true, default_value = "openclaw.toml")]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page and write <out>/index.html
    Build(BuildArgs),
    /// Render the page to stdout
    Render(PageArgs),
    /// Validate content tables without rendering
    Check(ContentArgs),
    /// Render once and serve the page over HTTP for local preview
    Serve(ServeArgs),
}

/// Where the card tables come from.
#[derive(Args, Debug, Clone, Default)]
pub struct ContentArgs {
    /// JSON file replacing the built-in feature and project tables
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,
}

/// Everything that shapes the rendered document.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    #[command(flatten)]
    pub source: ContentArgs,

    /// Initial appearance: light, dark or system
    #[arg(long, value_name = "THEME")]
    pub theme: Option<ThemePreference>,

    /// Render the theme toggle directly instead of behind a placeholder
    #[arg(long)]
    pub eager_toggle: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Output directory (default: dist)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Interface to bind (default: 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind; 0 picks a free one (default: 4173)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_build_with_flags() {
        let cli = Cli::try_parse_from([
            "openclaw",
            "build",
            "--out",
            "public",
            "--theme",
            "dark",
            "--eager-toggle",
        ])
        .expect("valid args");

        let Command::Build(build) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build.out, Some(PathBuf::from("public")));
        assert_eq!(build.page.theme, Some(ThemePreference::Dark));
        assert!(build.page.eager_toggle);
        assert_eq!(cli.config, PathBuf::from("openclaw.toml"));
    }

    #[test]
    fn rejects_unknown_theme() {
        let err = Cli::try_parse_from(["openclaw", "render", "--theme", "sepia"]).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["openclaw", "check", "--log-level", "debug"])
            .expect("valid args");
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Check(_)));
    }
}
