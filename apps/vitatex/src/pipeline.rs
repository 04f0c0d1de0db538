//! Lint command driver: discover → resolve configs → format all → lint all.
//!
//! Files are processed one at a time in discovery order and the formatting
//! pass always completes before linting starts. The counters are returned
//! as a `Report` for the caller to print and turn into an exit status.

use crate::config::{RunConfig, CHKTEX_CONFIG, LATEXINDENT_CONFIG};
use crate::discover::find_sources;
use crate::error::Result;
use crate::format::format_file;
use crate::lint::lint_file;
use crate::models::{Report, Summary};
use crate::process::Runner;

/// Run the formatter and (when configured) linter over the workspace.
///
/// Returns `Ok(None)` when no source files were found; no tool is invoked
/// in that case.
pub fn run_pipeline<R: Runner>(runner: &mut R, cfg: &RunConfig) -> Result<Option<Report>> {
    let files = find_sources(&cfg.workspace)?;
    if files.is_empty() {
        return Ok(None);
    }

    let indent_cfg = cfg.resolve(LATEXINDENT_CONFIG);
    let chktex_cfg = cfg.resolve(CHKTEX_CONFIG);

    let mut summary = Summary {
        total: files.len(),
        ..Summary::default()
    };
    println!("\nFound {} files to process", files.len());

    println!("\n=== Running Formatter ===");
    for file in &files {
        let ok = format_file(runner, cfg, file, indent_cfg.path());
        summary.record_format(ok);
    }

    let lint_ran = chktex_cfg.is_found();
    if lint_ran {
        println!("\n=== Running Linter ===");
        for file in &files {
            let ok = lint_file(runner, cfg, file, chktex_cfg.path());
            summary.record_lint(ok);
        }
    } else {
        println!("\n=== Skipping Linter (no {} found) ===", CHKTEX_CONFIG);
    }

    Ok(Some(Report { summary, lint_ran }))
}
