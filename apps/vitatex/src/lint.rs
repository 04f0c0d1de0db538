//! Linter pass: runs `chktex` on one source file and classifies the result.
//!
//! chktex overloads exit status 1: with output it means "issues found",
//! without output it means the tool itself failed. Classification looks at
//! stdout only; stderr carries the banner and is surfaced on failures.

use crate::config::RunConfig;
use crate::output::Palette;
use crate::process::{Captured, Invocation, Runner};
use std::path::Path;

/// Linter executable.
pub const CHKTEX: &str = "chktex";

/// How one linter run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    Clean,
    /// Non-blank report lines.
    Issues(Vec<String>),
    /// The tool did not produce a usable report.
    ToolFailure(String),
}

impl LintOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Command shape: `chktex [-l <config>] <file>`.
pub fn linter_invocation(file: &Path, config: Option<&Path>, cwd: &Path) -> Invocation {
    let mut inv = Invocation::new(CHKTEX, cwd);
    if let Some(c) = config {
        inv = inv.arg("-l").arg(c.to_string_lossy());
    }
    inv.arg(file.to_string_lossy())
}

pub fn classify(out: &Captured) -> LintOutcome {
    let lines: Vec<String> = out
        .stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();
    match out.exit.code() {
        Some(0) if lines.is_empty() => LintOutcome::Clean,
        Some(0) | Some(1) if !lines.is_empty() => LintOutcome::Issues(lines),
        Some(1) => {
            let reason = failure_reason(out, "exited with status 1 and no output");
            LintOutcome::ToolFailure(reason)
        }
        _ => LintOutcome::ToolFailure(failure_reason(out, &format!("{}", out.exit))),
    }
}

fn failure_reason(out: &Captured, what: &str) -> String {
    let stderr = out.stderr.trim();
    if stderr.is_empty() {
        format!("{} {}", CHKTEX, what)
    } else {
        format!("{} {}: {}", CHKTEX, what, stderr)
    }
}

/// Style one report line: warnings yellow, errors red, rest unchanged.
pub fn render_report_line(line: &str, palette: &Palette) -> String {
    if line.contains("Warning") {
        palette.warning(line)
    } else if line.contains("Error") {
        palette.error(line)
    } else {
        line.to_string()
    }
}

/// Lint `file`. Returns true only when chktex ran cleanly with no findings.
pub fn lint_file<R: Runner>(
    runner: &mut R,
    cfg: &RunConfig,
    file: &Path,
    config: Option<&Path>,
) -> bool {
    let p = &cfg.palette;
    println!("\nLinting {}...", p.file(&file.to_string_lossy()));
    let inv = linter_invocation(file, config, &cfg.workspace);
    let outcome = match runner.run_capture(&inv) {
        Ok(out) => classify(&out),
        Err(e) => LintOutcome::ToolFailure(e.to_string()),
    };
    match &outcome {
        LintOutcome::Clean => {
            println!("{} No linting issues found", p.ok_mark());
        }
        LintOutcome::Issues(lines) => {
            println!("{} Linting issues found:", p.warn_mark());
            for l in lines {
                println!("{}", render_report_line(l, p));
            }
        }
        LintOutcome::ToolFailure(reason) => {
            tracing::error!("linting {} failed: {}", file.display(), reason);
            eprintln!("{} Linting failed with error:", p.fail_mark());
            eprintln!("{}", reason);
        }
    }
    outcome.is_clean()
}
