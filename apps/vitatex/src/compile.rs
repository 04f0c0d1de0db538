//! Document build: two XeLaTeX passes over the main document so
//! cross-references resolve. The first failure aborts the build.

use crate::error::{Error, Result};
use crate::process::{Invocation, Runner};
use std::path::Path;

/// Main document compiled by `vitatex build`.
pub const MAIN_DOCUMENT: &str = "resume.tex";

/// Typesetting compiler executable.
pub const XELATEX: &str = "xelatex";

pub fn compiler_invocation(cwd: &Path) -> Invocation {
    Invocation::new(XELATEX, cwd).args(["-interaction=nonstopmode", MAIN_DOCUMENT])
}

/// Run both passes with live output.
pub fn run_build<R: Runner>(runner: &mut R, cwd: &Path) -> Result<()> {
    let inv = compiler_invocation(cwd);

    println!("First XeLaTeX pass...");
    run_pass(runner, &inv)?;

    println!("Second XeLaTeX pass for references...");
    run_pass(runner, &inv)?;

    println!("Successfully built document!");
    Ok(())
}

fn run_pass<R: Runner>(runner: &mut R, inv: &Invocation) -> Result<()> {
    let exit = runner.run_inherit(inv)?;
    if !exit.success() {
        return Err(Error::Failed {
            command: inv.to_string(),
            exit,
        });
    }
    Ok(())
}
