//! The literal text migration and the default tree it runs against.
//!
//! A `Migration` is a marker → replacement pair matched as an exact
//! substring. No boundary detection, no case variants, no syntax awareness:
//! `foo.withOpacity(0.5)` becomes `foo.withValues(alpha: 0.5)` and the
//! closing parenthesis of the original call is left exactly where it was.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::utils::validation;

/// Deprecated call fragment.
pub const WITH_OPACITY_MARKER: &str = ".withOpacity(";

/// Text written in place of every marker occurrence.
pub const WITH_VALUES_REPLACEMENT: &str = ".withValues(alpha: ";

pub const DEFAULT_ROOT: &str = "lib";
pub const DEFAULT_EXTENSION: &str = "dart";

/// Characters that would change the meaning of the `**/*.<ext>` pattern.
const EXTENSION_FORBIDDEN: &[char] = &['/', '\\', '*', '?', '[', ']', '{', '}'];

// ============================================================================
// Types
// ============================================================================

/// An exact-substring replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Migration {
    pub marker: String,
    pub replacement: String,
}

/// Result of applying a migration to one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Content after every marker occurrence was replaced.
    pub content: String,
    /// Number of non-overlapping occurrences replaced.
    pub replacements: usize,
}

/// Which files a run selects: every `*.<extension>` under `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub root: PathBuf,
    pub extension: String,
}

// ============================================================================
// Migration
// ============================================================================

impl Migration {
    /// Build a migration. An empty marker would match between every
    /// character, so it is rejected.
    pub fn new(marker: &str, replacement: &str) -> Result<Self> {
        if marker.is_empty() {
            return Err(Error::validation_invalid_argument(
                "marker",
                "Marker must not be empty",
                None,
            ));
        }

        Ok(Self {
            marker: marker.to_string(),
            replacement: replacement.to_string(),
        })
    }

    /// `.withOpacity(` → `.withValues(alpha: `
    pub fn with_opacity() -> Self {
        Self {
            marker: WITH_OPACITY_MARKER.to_string(),
            replacement: WITH_VALUES_REPLACEMENT.to_string(),
        }
    }

    /// Replace every occurrence of the marker in `content`.
    ///
    /// Returns `None` when the marker does not occur, so callers can skip
    /// the write entirely.
    pub fn apply(&self, content: &str) -> Option<Rewrite> {
        let replacements = content.matches(self.marker.as_str()).count();
        if replacements == 0 {
            return None;
        }

        Some(Rewrite {
            content: content.replace(self.marker.as_str(), &self.replacement),
            replacements,
        })
    }
}

// ============================================================================
// Target
// ============================================================================

impl Target {
    /// Build a target, normalizing `.dart` to `dart`.
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Result<Self> {
        let trimmed = validation::require_non_empty(
            extension,
            "extension",
            "Extension must not be empty",
        )?;
        let normalized = trimmed.strip_prefix('.').unwrap_or(trimmed);
        let normalized = validation::require_non_empty(
            normalized,
            "extension",
            "Extension must contain more than a dot",
        )?;
        validation::require_none_of(
            normalized,
            EXTENSION_FORBIDDEN,
            "extension",
            "Extension must not contain path separators or glob characters",
        )
        .map_err(|e| e.with_hint("Pass the bare extension, e.g. --extension dart"))?;

        Ok(Self {
            root: root.into(),
            extension: normalized.to_string(),
        })
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
