//! Page data types for the landing page content tables.
//!
//! These types define the data model the page is rendered from. They're
//! designed to be:
//!
//! - **Serializable** - content can be swapped for a JSON file of the same shape
//! - **Clone-friendly** - components take owned values, no borrowing across views
//! - **Validated** - [`SiteContent::validate`] enforces the render-key invariant
//!
//! # Example
//!
//! ```rust
//! use openclaw_landing::types::{FeatureCard, ProjectCard, ProjectStatus, SiteContent};
//!
//! let content = SiteContent {
//!     features: vec![FeatureCard {
//!         icon: "*".into(),
//!         title: "Fast Builds".into(),
//!         description: "Compiles once, ships everywhere.".into(),
//!     }],
//!     projects: vec![ProjectCard {
//!         name: "Build Farm".into(),
//!         status: ProjectStatus::Beta,
//!         description: "Distributed builders.".into(),
//!         tags: vec!["Rust".into()],
//!     }],
//! };
//! assert!(content.validate().is_ok());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, LoadError};

/// One card of the "What We Build" grid. Identity is `title`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    /// Short decorative symbol (usually a single emoji)
    pub icon: String,
    /// Short label, unique within the feature list
    pub title: String,
    /// Sentence-length description
    pub description: String,
}

/// Lifecycle label shown as a badge on a project card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Under active development
    #[default]
    Active,
    /// Usable, still changing
    Beta,
    /// No longer maintained
    Archived,
}

impl ProjectStatus {
    /// Text shown inside the status badge.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Beta => "Beta",
            ProjectStatus::Archived => "Archived",
        }
    }

    /// Modifier class picking the badge color.
    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Active => "status-badge status-active",
            ProjectStatus::Beta => "status-badge status-beta",
            ProjectStatus::Archived => "status-badge status-archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One card of the "Projects" grid. Identity is `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    /// Project name, unique within the project list
    pub name: String,
    /// Badge label
    #[serde(default)]
    pub status: ProjectStatus,
    /// Sentence-length description
    pub description: String,
    /// Technology chips, rendered in this order
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Both content tables the page is rendered from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Cards for the "What We Build" grid
    pub features: Vec<FeatureCard>,
    /// Cards for the "Projects" grid
    pub projects: Vec<ProjectCard>,
}

impl SiteContent {
    /// Check that both lists are non-empty and that every identity field is
    /// non-blank and unique within its list. Surrounding whitespace is ignored
    /// for both checks.
    ///
    /// Identities double as render keys, so duplicates would make two cards
    /// indistinguishable.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_identities("features", self.features.iter().map(|c| c.title.as_str()))?;
        check_identities("projects", self.projects.iter().map(|p| p.name.as_str()))?;
        Ok(())
    }

    /// Parse content from a JSON string and validate it.
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a JSON content file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Total number of tag chips across all projects.
    pub fn tag_count(&self) -> usize {
        self.projects.iter().map(|p| p.tags.len()).sum()
    }
}

fn check_identities<'a>(
    list: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        let id = id.trim();
        if id.is_empty() {
            return Err(ContentError::BlankIdentity { list, index });
        }
        if !seen.insert(id) {
            return Err(ContentError::DuplicateIdentity {
                list,
                id: id.to_string(),
            });
        }
    }
    if seen.is_empty() {
        return Err(ContentError::EmptyList { list });
    }
    Ok(())
}
