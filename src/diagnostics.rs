use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;

const SOURCE_EXTENSION_MARKER: &str = ".go";
const IMPORT_MARKER: &str = "import of";

// Greedy up to the last execroot, then skip the workspace name segment.
static MISSING_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^.*/execroot/.*?/(.*?\.go): import of "(.*?)""#)
        .expect("missing-import pattern must compile")
});

/// A Go source file that failed to build because one of its imports has no
/// matching dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Path relative to the workspace root, e.g. `foo/bar.go`.
    pub source_path: String,
    pub import_identifier: String,
}

impl Problem {
    /// Package directory passed to the fixer. Files at the workspace root map to `.`.
    pub fn target_dir(&self) -> String {
        match Path::new(&self.source_path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
            _ => ".".to_string(),
        }
    }
}

/// Parse a single build-log line. `None` when the line is not a missing-import diagnostic.
pub fn parse_line(line: &str) -> Option<Problem> {
    if !line.contains(SOURCE_EXTENSION_MARKER) || !line.contains(IMPORT_MARKER) {
        return None;
    }
    let caps = MISSING_IMPORT_RE.captures(line)?;
    Some(Problem {
        source_path: caps[1].to_string(),
        import_identifier: caps[2].to_string(),
    })
}

pub fn parse_problems(log: &str) -> Vec<Problem> {
    let problems: Vec<Problem> = log.lines().filter_map(parse_line).collect();
    tracing::debug!(count = problems.len(), "parsed missing-import diagnostics");
    problems
}

/// Unique package directories affected by the given problems.
pub fn target_dirs(problems: &[Problem]) -> BTreeSet<String> {
    problems.iter().map(Problem::target_dir).collect()
}
