//! Configuration file support.
//!
//! Loads optional `openclaw.toml`. Command-line flags override it, it
//! overrides the built-in defaults.

use std::path::{Path, PathBuf};

use openclaw_landing::{RenderOptions, ThemePreference, ToggleMount};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::args::{BuildArgs, PageArgs, ServeArgs};

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4173;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpenclawConfig {
    /// Where `build` writes `index.html`
    pub out_dir: Option<PathBuf>,
    /// JSON content file replacing the built-in tables
    pub content: Option<PathBuf>,
    pub theme: Option<ThemePreference>,
    pub eager_toggle: Option<bool>,
    pub serve: ServeConfig,
}

/// `[serve]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl OpenclawConfig {
    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Resolved inputs for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub content: Option<PathBuf>,
    pub options: RenderOptions,
}

impl PageSettings {
    pub fn resolve(args: &PageArgs, config: &OpenclawConfig) -> Self {
        let eager = args.eager_toggle || config.eager_toggle.unwrap_or(false);
        Self {
            content: content_path(args.source.content.as_ref(), config),
            options: RenderOptions {
                default_theme: args.theme.or(config.theme).unwrap_or_default(),
                toggle: if eager {
                    ToggleMount::Eager
                } else {
                    ToggleMount::Deferred
                },
            },
        }
    }
}

pub fn content_path(flag: Option<&PathBuf>, config: &OpenclawConfig) -> Option<PathBuf> {
    flag.or(config.content.as_ref()).cloned()
}

pub fn out_dir(args: &BuildArgs, config: &OpenclawConfig) -> PathBuf {
    args.out
        .clone()
        .or_else(|| config.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
}

/// `host:port` to bind the preview server on.
pub fn bind_addr(args: &ServeArgs, config: &OpenclawConfig) -> String {
    let host = args
        .host
        .clone()
        .or_else(|| config.serve.host.clone())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port.or(config.serve.port).unwrap_or(DEFAULT_PORT);
    format!("{host}:{port}")
}
