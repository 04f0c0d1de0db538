//! Console rendering for build and lint runs.
//!
//! Coloring goes through `Palette`, which is decided once per run and
//! honors `NO_COLOR`. The summary printer is split into a pure `render_summary`
//! for testing and `print_summary` for the CLI.

use crate::models::Report;
use owo_colors::OwoColorize;

/// ANSI styling switch for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
}

impl Palette {
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn hunk(&self, s: &str) -> String {
        if self.enabled {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn removed(&self, s: &str) -> String {
        if self.enabled {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn added(&self, s: &str) -> String {
        if self.enabled {
            s.green().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn warning(&self, s: &str) -> String {
        if self.enabled {
            s.yellow().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn error(&self, s: &str) -> String {
        self.removed(s)
    }

    pub fn file(&self, s: &str) -> String {
        self.hunk(s)
    }

    pub fn ok_mark(&self) -> String {
        self.added("✓")
    }

    pub fn fail_mark(&self) -> String {
        self.removed("✗")
    }

    pub fn warn_mark(&self) -> String {
        self.warning("⚠")
    }
}

/// Render the end-of-run summary block.
pub fn render_summary(report: &Report) -> String {
    let s = &report.summary;
    let mut lines = vec![
        String::new(),
        "=".repeat(50),
        "Summary:".to_string(),
        "-".repeat(50),
        format!("Total files processed: {}", s.total),
        format!("Successfully formatted: {}/{}", s.formatted, s.total),
    ];
    if report.lint_ran {
        lines.push(format!("Successfully linted: {}/{}", s.linted, s.total));
        lines.push(format!("Lint errors: {}", s.lint_errors));
    }
    lines.push(format!("Format errors: {}", s.format_errors));
    lines.push("=".repeat(50));
    lines.join("\n")
}

pub fn print_summary(report: &Report) {
    println!("{}", render_summary(report));
}
