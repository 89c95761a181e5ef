//! The fix pass: walk the target tree and rewrite every matching file.
//!
//! Files are processed one at a time in path order. The first read or write
//! failure aborts the pass; files already rewritten stay rewritten.

use serde::Serialize;
use std::path::PathBuf;

use crate::error::Result;
use crate::migration::{Migration, Target};
use crate::rewrite::rewrite_file;
use crate::walk::collect_files;

/// A file whose content changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedFile {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Outcome of a completed pass.
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub root: PathBuf,
    pub extension: String,
    /// Files matching the target that were read.
    pub scanned: usize,
    pub fixed: Vec<FixedFile>,
    pub total_fixed: usize,
    pub total_replacements: usize,
}

/// Run `migration` over every file selected by `target`.
///
/// `on_fixed` is called right after each file has been written, before the
/// next file is read, so progress can be reported even if a later file fails.
/// An error from `on_fixed` aborts the pass like a read or write failure.
pub fn fix_tree<F>(target: &Target, migration: &Migration, mut on_fixed: F) -> Result<FixReport>
where
    F: FnMut(&FixedFile) -> Result<()>,
{
    let files = collect_files(target)?;
    log_status!(
        "fix",
        "Scanning {} *.{} file(s) under {}",
        files.len(),
        target.extension,
        target.root.display()
    );

    let mut fixed = Vec::new();
    for path in &files {
        if let Some(replacements) = rewrite_file(path, migration)? {
            let file = FixedFile {
                path: path.clone(),
                replacements,
            };
            on_fixed(&file)?;
            fixed.push(file);
        }
    }

    let total_replacements = fixed.iter().map(|f| f.replacements).sum();

    Ok(FixReport {
        root: target.root.clone(),
        extension: target.extension.clone(),
        scanned: files.len(),
        total_fixed: fixed.len(),
        total_replacements,
        fixed,
    })
}
