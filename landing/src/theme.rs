//! Light/dark appearance handling.
//!
//! The stored preference lives client-side in `localStorage` under
//! [`STORAGE_KEY`]. On the Rust side we only pick the initial class written to
//! `<html>` and how the toggle widget is mounted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTheme;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "openclaw-theme";

/// A concrete appearance variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light palette, `html.light`
    Light,
    /// Dark palette, `html.dark`
    Dark,
}

impl Theme {
    /// Class name on `<html>`, also the value stored under [`STORAGE_KEY`].
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// What the page starts in before any stored choice is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always start light
    Light,
    /// Always start dark
    Dark,
    /// Follow `prefers-color-scheme`
    #[default]
    System,
}

impl ThemePreference {
    /// Fixed theme, or `None` when the browser decides.
    pub fn resolved(self) -> Option<Theme> {
        match self {
            ThemePreference::Light => Some(Theme::Light),
            ThemePreference::Dark => Some(Theme::Dark),
            ThemePreference::System => None,
        }
    }

    /// Class attribute for `<html>`; empty for `System`.
    pub fn html_class(self) -> &'static str {
        self.resolved().map(Theme::as_str).unwrap_or("")
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemePreference::Light => f.write_str("light"),
            ThemePreference::Dark => f.write_str("dark"),
            ThemePreference::System => f.write_str("system"),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" | "auto" => Ok(ThemePreference::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// How the theme toggle lands in the header slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleMount {
    /// Placeholder first; the mount script swaps in the real toggle once.
    #[default]
    Deferred,
    /// Toggle rendered in place, no placeholder.
    Eager,
}

const KEY_PLACEHOLDER: &str = "__STORAGE_KEY__";

/// Runs in `<head>` before first paint so the stored choice wins over the
/// server-rendered class.
pub fn theme_init_script() -> String {
    INIT_SCRIPT.replace(KEY_PLACEHOLDER, STORAGE_KEY)
}

/// Mounts the toggle into its slot (at most once) and wires the click handler.
///
/// If anything throws, the fallback placeholder stays where it is.
pub fn theme_toggle_script() -> String {
    TOGGLE_SCRIPT.replace(KEY_PLACEHOLDER, STORAGE_KEY)
}

const INIT_SCRIPT: &str = r#"
(() => {
  try {
    const stored = localStorage.getItem('__STORAGE_KEY__');
    const root = document.documentElement;
    if (stored === 'dark' || stored === 'light') {
      root.classList.remove('light', 'dark');
      root.classList.add(stored);
    } else if (!root.classList.contains('light') && !root.classList.contains('dark')) {
      if (window.matchMedia('(prefers-color-scheme: dark)').matches) {
        root.classList.add('dark');
      }
    }
  } catch (_) {}
})();
"#;

const TOGGLE_SCRIPT: &str = r#"
(() => {
  const root = document.documentElement;
  const isDark = () => root.classList.contains('dark') ||
    (!root.classList.contains('light') &&
     window.matchMedia('(prefers-color-scheme: dark)').matches);

  const toggleTheme = () => {
    const next = isDark() ? 'light' : 'dark';
    root.classList.remove('light', 'dark');
    root.classList.add(next);
    try { localStorage.setItem('__STORAGE_KEY__', next); } catch (_) {}
    document.querySelectorAll('[data-role="theme-toggle"]').forEach(btn => {
      btn.setAttribute('aria-pressed', next === 'dark' ? 'true' : 'false');
    });
  };

  const slot = document.querySelector('[data-role="theme-slot"]');
  if (slot && slot.dataset.mounted !== 'true') {
    const tpl = slot.querySelector('template[data-role="theme-toggle-template"]');
    const fallback = slot.querySelector('[data-role="theme-fallback"]');
    if (tpl && fallback) {
      fallback.replaceWith(tpl.content.cloneNode(true));
      tpl.remove();
      slot.dataset.mounted = 'true';
    }
  }

  document.querySelectorAll('[data-role="theme-toggle"]').forEach(btn => {
    btn.setAttribute('aria-pressed', isDark() ? 'true' : 'false');
    btn.addEventListener('click', toggleTheme);
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_preferences() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!(" Dark ".parse(), Ok(ThemePreference::Dark));
        assert_eq!("auto".parse(), Ok(ThemePreference::System));
        assert_eq!(
            "sepia".parse::<ThemePreference>(),
            Err(UnknownTheme("sepia".into()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(pref.to_string().parse(), Ok(pref));
        }
    }

    #[test]
    fn html_class_only_for_fixed_themes() {
        assert_eq!(ThemePreference::Dark.html_class(), "dark");
        assert_eq!(ThemePreference::Light.html_class(), "light");
        assert_eq!(ThemePreference::System.html_class(), "");
    }

    #[test]
    fn scripts_share_the_storage_key() {
        let init = theme_init_script();
        let toggle = theme_toggle_script();
        assert!(init.contains(&format!("localStorage.getItem('{STORAGE_KEY}')")));
        assert!(toggle.contains(&format!("localStorage.setItem('{STORAGE_KEY}', next)")));
        assert!(toggle.contains("dataset.mounted"));
        assert!(!init.contains(KEY_PLACEHOLDER));
        assert!(!toggle.contains(KEY_PLACEHOLDER));
    }

    #[test]
    fn scripts_only_store_known_theme_names() {
        let init = theme_init_script();
        for theme in [Theme::Light, Theme::Dark] {
            assert!(init.contains(&format!("stored === '{}'", theme.as_str())));
        }
    }
}
