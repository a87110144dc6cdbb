//! Hygiene — enforces coding standards at test time
//!
//! Scans production sources under `src/` (sibling `*_test.rs` files excluded)
//! for panicking calls and silently discarded results. Every budget is zero:
//! storage and DOM failures are logged or propagated, never ignored.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    /// Lines of code, skipping comment and doc lines.
    fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Files containing `pattern` in code, with their hit counts.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.code_lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn assert_absent(pattern: &str) {
    let found = hits(&source_files(), pattern);
    assert!(
        found.is_empty(),
        "`{pattern}` is not allowed in src/:\n{}",
        found
            .iter()
            .map(|(path, count)| format!("  {path}: {count}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")));
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(");
}

#[test]
fn no_panic_macros() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern);
    }
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("let _ =");
}

#[test]
fn no_unwrap_or_default_on_results() {
    assert_absent(".unwrap_or_default()");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()");
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]");
}

// =============================================================
// Literals
// =============================================================

#[test]
fn theme_literals_live_in_theme_module() {
    for literal in ["\"dark\"", "\"light\"", "\"theme\"", "\"theme-toggle\""] {
        let outside: Vec<_> = hits(&source_files(), literal)
            .into_iter()
            .filter(|(path, _)| !path.ends_with("theme.rs"))
            .collect();
        assert!(outside.is_empty(), "{literal} used outside theme.rs: {outside:?}");
    }
}
