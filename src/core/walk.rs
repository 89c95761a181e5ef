//! Recursive, extension-filtered file enumeration.

use glob::MatchOptions;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::migration::Target;

/// Hidden files and directories are skipped, the way a shell `**` glob
/// skips them.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Build the `<root>/**/*.<ext>` pattern, escaping any glob characters in
/// the root.
pub fn target_pattern(target: &Target) -> Result<String> {
    let root = target.root.to_str().ok_or_else(|| {
        Error::validation_invalid_argument(
            "path",
            "Root path must be valid UTF-8",
            Some(target.root.to_string_lossy().to_string()),
        )
    })?;

    let escaped = glob::Pattern::escape(root);
    let base = match escaped.trim_end_matches('/') {
        "" if root.starts_with('/') => "",
        "" => ".",
        trimmed => trimmed,
    };

    Ok(format!("{}/**/*.{}", base, target.extension))
}

/// All regular files matching the target, in sorted path order.
///
/// A missing root yields no files. Entries that cannot be read during the
/// walk are skipped.
pub fn collect_files(target: &Target) -> Result<Vec<PathBuf>> {
    let pattern = target_pattern(target)?;

    let entries = glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|e| {
        Error::validation_invalid_argument(
            "path",
            format!("Invalid glob pattern '{}': {}", pattern, e),
            Some(pattern.clone()),
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if is_regular_file(&path) => files.push(path),
            Ok(_) => {}
            Err(e) => {
                log_status!("walk", "Skipping {}: {}", e.path().display(), e.error());
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
