//! Error types for content validation and loading.

use std::path::PathBuf;

use thiserror::Error;

/// A content table that breaks the render-key invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A table with no entries
    #[error("{list} list is empty")]
    EmptyList {
        /// `"features"` or `"projects"`
        list: &'static str,
    },

    /// An entry whose title or name is empty after trimming
    #[error("{list} entry #{index} has a blank identity")]
    BlankIdentity {
        /// `"features"` or `"projects"`
        list: &'static str,
        /// Zero-based position in the table
        index: usize,
    },

    /// Two entries with the same trimmed title or name
    #[error("{list} list contains duplicate identity '{id}'")]
    DuplicateIdentity {
        /// `"features"` or `"projects"`
        list: &'static str,
        /// The repeated identity, trimmed
        id: String,
    },
}

/// Failure to turn a content file into validated [`crate::types::SiteContent`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid content JSON
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed but the tables are unusable
    #[error("invalid content: {0}")]
    Invalid(#[from] ContentError),
}

/// A theme name that is not `light`, `dark` or `system`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected light, dark or system)")]
pub struct UnknownTheme(pub String);
