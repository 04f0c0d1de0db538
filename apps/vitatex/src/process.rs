//! Subprocess invocation for the external document tools.
//!
//! Two modes exist:
//! - inherit: the child shares our stdio so its output streams live
//!   (used for compiler passes);
//! - capture: stdout/stderr are buffered and returned with the exit code
//!   (used for formatter and linter classification).
//!
//! Callers go through the `Runner` trait so the orchestration can be
//! exercised without the real binaries installed.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A single external command shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: &str, cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for a in &self.args {
            write!(f, " {}", a)?;
        }
        Ok(())
    }
}

/// Exit status of a finished child. `None` means it was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit(pub Option<i32>);

impl Exit {
    pub fn success(&self) -> bool {
        self.0 == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.0
    }
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "exit status {}", c),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Buffered result of a capture-mode run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub exit: Exit,
    pub stdout: String,
    pub stderr: String,
}

pub trait Runner {
    /// Run with inherited stdio and wait for completion.
    fn run_inherit(&mut self, inv: &Invocation) -> Result<Exit>;

    /// Run with stdout/stderr piped and wait for completion.
    fn run_capture(&mut self, inv: &Invocation) -> Result<Captured>;
}

/// `Runner` backed by `std::process::Command`. Calls block with no timeout.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(inv: &Invocation) -> Command {
        let mut cmd = Command::new(&inv.program);
        cmd.args(&inv.args).current_dir(&inv.cwd);
        cmd
    }
}

impl Runner for SystemRunner {
    fn run_inherit(&mut self, inv: &Invocation) -> Result<Exit> {
        tracing::debug!("running `{}` in {}", inv, inv.cwd.display());
        let status = Self::command(inv)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Spawn {
                command: inv.to_string(),
                source,
            })?;
        Ok(Exit(status.code()))
    }

    fn run_capture(&mut self, inv: &Invocation) -> Result<Captured> {
        tracing::debug!("capturing `{}` in {}", inv, inv.cwd.display());
        let out = Self::command(inv)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|source| Error::Spawn {
                command: inv.to_string(),
                source,
            })?;
        Ok(Captured {
            exit: Exit(out.status.code()),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}
