use std::fs;
use std::path::Path;

use opacity_fix::{fix_tree, Migration, Target};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn run(root: &Path) -> opacity_fix::FixReport {
    let target = Target::new(root, "dart").unwrap();
    fix_tree(&target, &Migration::with_opacity(), |_| Ok(())).unwrap()
}

#[test]
fn rewrites_marker_files_and_leaves_others_alone() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "widgets/card.dart", "shadow: Colors.black.withOpacity(0.1),\n");
    write(root, "main.dart", "void main() => runApp(const App());\n");
    write(root, "notes.txt", "call .withOpacity(0.5) here\n");

    let report = run(root);

    assert_eq!(report.total_fixed, 1);
    assert_eq!(
        read(root, "widgets/card.dart"),
        "shadow: Colors.black.withValues(alpha: 0.1),\n"
    );
    assert_eq!(read(root, "main.dart"), "void main() => runApp(const App());\n");
    assert_eq!(read(root, "notes.txt"), "call .withOpacity(0.5) here\n");
}

#[test]
fn multiple_occurrences_on_different_lines_fixed_in_one_pass() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "theme.dart",
        "final a = primary.withOpacity(0.12);\nfinal b = surface.withOpacity(0.38);\nfinal c = error.withOpacity(1);\n",
    );

    let report = run(root);

    assert_eq!(report.total_fixed, 1);
    assert_eq!(report.fixed[0].replacements, 3);
    let content = read(root, "theme.dart");
    assert!(!content.contains(".withOpacity("));
    assert_eq!(content.matches(".withValues(alpha: ").count(), 3);
}

#[test]
fn second_pass_fixes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "a.dart", "x.withOpacity(0.5)");
    write(root, "nested/b.dart", "y.withOpacity(0.6)");

    let first = run(root);
    let snapshot = (read(root, "a.dart"), read(root, "nested/b.dart"));
    let second = run(root);

    assert_eq!(first.total_fixed, 2);
    assert_eq!(second.total_fixed, 0);
    assert!(second.fixed.is_empty());
    assert_eq!(snapshot, (read(root, "a.dart"), read(root, "nested/b.dart")));
}

#[test]
fn fixed_count_equals_changed_files() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    let files = [
        ("a.dart", "a.withOpacity(0.1)"),
        ("b.dart", "no marker"),
        ("c/d.dart", "withOpacity without dot"),
        ("c/e.dart", "e.withOpacity(0.2) e.withOpacity(0.3)"),
        ("c/f/g.dart", ""),
    ];
    for (path, content) in files {
        write(root, path, content);
    }

    let report = run(root);

    let changed = files
        .iter()
        .filter(|(path, before)| read(root, path) != *before)
        .count();
    assert_eq!(changed, 2);
    assert_eq!(report.total_fixed, changed);
    assert_eq!(report.scanned, files.len());
}

#[test]
fn empty_directory_reports_zero() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "README.md", "nothing to see");

    let report = run(dir.path());

    assert_eq!(report.scanned, 0);
    assert_eq!(report.total_fixed, 0);
}

#[test]
fn hidden_files_are_not_rewritten() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, ".generated.dart", "x.withOpacity(0.5)");

    let report = run(root);

    assert_eq!(report.total_fixed, 0);
    assert_eq!(read(root, ".generated.dart"), "x.withOpacity(0.5)");
}

#[test]
fn hidden_directories_are_not_descended() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, ".dart_tool/gen/x.dart", "a.withOpacity(1)");
    write(root, "src/.cache/y.dart", "b.withOpacity(1)");
    write(root, "src/visible.dart", "c.withOpacity(1)");

    let report = run(root);

    assert_eq!(report.scanned, 1);
    assert_eq!(report.total_fixed, 1);
    assert_eq!(read(root, ".dart_tool/gen/x.dart"), "a.withOpacity(1)");
    assert_eq!(read(root, "src/.cache/y.dart"), "b.withOpacity(1)");
    assert_eq!(read(root, "src/visible.dart"), "c.withValues(alpha: 1)");
}
