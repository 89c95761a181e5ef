use clap::Args;
use serde::Serialize;

use opacity_fix::migration::{DEFAULT_EXTENSION, DEFAULT_ROOT};
use opacity_fix::{fix, FixReport, Migration, Target};

use super::CmdResult;
use crate::output;

#[derive(Args)]
pub struct FixArgs {
    /// Directory to scan recursively
    #[arg(default_value = DEFAULT_ROOT)]
    pub path: String,

    /// Extension of the files to rewrite
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

#[derive(Serialize)]
pub struct FixOutput {
    pub command: &'static str,
    pub root: String,
    pub extension: String,
    pub marker: String,
    pub replacement: String,
    pub scanned: usize,
    pub total_fixed: usize,
    pub total_replacements: usize,
    pub fixed: Vec<FixedSummary>,
}

#[derive(Serialize)]
pub struct FixedSummary {
    pub file: String,
    pub replacements: usize,
}

pub fn run(args: FixArgs, global: &super::GlobalArgs) -> CmdResult<FixOutput> {
    let root = shellexpand::tilde(&args.path).to_string();
    let target = Target::new(root, &args.extension)?;
    let migration = Migration::with_opacity();

    // Text mode streams each file as soon as it is written.
    let report = fix::fix_tree(&target, &migration, |file| {
        if global.json {
            return Ok(());
        }
        output::write_text(&format!("{}\n", fixed_line(&file.path.display().to_string())))
    })?;

    Ok((build_output(report, migration), 0))
}

fn build_output(report: FixReport, migration: Migration) -> FixOutput {
    FixOutput {
        command: "fix",
        root: report.root.display().to_string(),
        extension: report.extension,
        marker: migration.marker,
        replacement: migration.replacement,
        scanned: report.scanned,
        total_fixed: report.total_fixed,
        total_replacements: report.total_replacements,
        fixed: report
            .fixed
            .into_iter()
            .map(|f| FixedSummary {
                file: f.path.display().to_string(),
                replacements: f.replacements,
            })
            .collect(),
    }
}

pub fn fixed_line(path: &str) -> String {
    format!("Fixed: {}", path)
}

/// Closing text block: a blank line, then the total.
pub fn render_summary(output: &FixOutput) -> String {
    format!("\nTotal files fixed: {}\n", output.total_fixed)
}
