//! Source discovery for the lint command.
//!
//! Collects `.tex` and `.cls` files below the workspace root, skipping
//! dependency, build, distribution and minted cache directories as well as
//! generated `python-data.tex` files. Hidden files and anything under a
//! hidden directory are never matched.

use crate::error::{Error, Result};
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Extensions eligible for formatting and linting.
pub const SOURCE_EXTENSIONS: &[&str] = &["tex", "cls"];

/// Root-relative patterns excluded from the discovery set.
pub const EXCLUDED_PATTERNS: &[&str] = &[
    "node_modules/**",
    "build/**",
    "dist/**",
    "_minted-*/**",
    "**/python-data.tex",
];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Find source files under `root`, returned relative to it.
///
/// Order follows glob traversal per extension; callers must not rely on it.
pub fn find_sources(root: &Path) -> Result<Vec<PathBuf>> {
    let excludes = compile_excludes()?;
    let base = Pattern::escape(&root.to_string_lossy());

    let mut out: Vec<PathBuf> = Vec::new();
    for ext in SOURCE_EXTENSIONS {
        let pattern = format!("{}/**/*.{}", base, ext);
        let entries = glob_with(&pattern, MATCH_OPTIONS).map_err(|source| Error::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        for entry in entries {
            let path = match entry {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let rel = match path.strip_prefix(root) {
                Ok(r) => r.to_path_buf(),
                Err(_) => path.clone(),
            };
            if is_excluded(&rel, &excludes) {
                tracing::debug!("excluded: {}", rel.display());
                continue;
            }
            out.push(rel);
        }
    }
    Ok(out)
}

fn compile_excludes() -> Result<Vec<Pattern>> {
    EXCLUDED_PATTERNS
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.to_string(),
                source,
            })
        })
        .collect()
}

fn is_excluded(rel: &Path, excludes: &[Pattern]) -> bool {
    excludes.iter().any(|p| p.matches_path_with(rel, MATCH_OPTIONS))
}
