//! In-place rewriting of a single file.

use std::path::Path;

use crate::error::Result;
use crate::migration::Migration;
use crate::utils::io;

/// Apply `migration` to the file at `path`, overwriting it when the marker
/// occurs.
///
/// Returns `Some(replacements)` if the file was rewritten and `None` if the
/// marker was absent, in which case the file is not touched. No backup is
/// kept.
pub fn rewrite_file(path: &Path, migration: &Migration) -> Result<Option<usize>> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let Some(rewrite) = migration.apply(&content) else {
        return Ok(None);
    };

    io::write_file(path, &rewrite.content, &format!("write {}", path.display()))?;
    Ok(Some(rewrite.replacements))
}
