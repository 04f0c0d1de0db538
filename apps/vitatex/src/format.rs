//! Formatter pass: runs `latexindent` on one source file.
//!
//! On failure the tool's stdout is a unified-diff style report; it is
//! recolored line by line before being shown:
//! - `@@ … @@` hunk headers in cyan,
//! - `-` lines in red,
//! - `+` lines in green.
//!
//! A failing file is reported and counted, never escalated.

use crate::config::RunConfig;
use crate::output::Palette;
use crate::process::{Invocation, Runner};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Formatter executable.
pub const LATEXINDENT: &str = "latexindent";

fn hunk_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(@@ .+ @@)").expect("static regex"))
}

/// Command shape: `latexindent -kv -s [-l <config>] <file>`.
pub fn formatter_invocation(file: &Path, config: Option<&Path>, cwd: &Path) -> Invocation {
    let mut inv = Invocation::new(LATEXINDENT, cwd).args(["-kv", "-s"]);
    if let Some(c) = config {
        inv = inv.arg("-l").arg(c.to_string_lossy());
    }
    inv.arg(file.to_string_lossy())
}

/// Recolor a diff-style report. Non-diff lines pass through unchanged.
pub fn colorize_diff(report: &str, palette: &Palette) -> String {
    report
        .split('\n')
        .map(|line| colorize_diff_line(line, palette))
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_diff_line(line: &str, palette: &Palette) -> String {
    if let Some(m) = hunk_header().find(line) {
        return format!("{}{}", palette.hunk(m.as_str()), &line[m.end()..]);
    }
    if line.starts_with('-') {
        palette.removed(line)
    } else if line.starts_with('+') {
        palette.added(line)
    } else {
        line.to_string()
    }
}

/// Format `file` in place. Returns true when the formatter succeeded.
pub fn format_file<R: Runner>(
    runner: &mut R,
    cfg: &RunConfig,
    file: &Path,
    config: Option<&Path>,
) -> bool {
    let p = &cfg.palette;
    println!("\nFormatting {}...", p.file(&file.to_string_lossy()));
    let inv = formatter_invocation(file, config, &cfg.workspace);
    match runner.run_capture(&inv) {
        Ok(out) if out.exit.success() => {
            println!("{} Formatting completed", p.ok_mark());
            true
        }
        Ok(out) => {
            if !out.stdout.is_empty() {
                println!("{}", colorize_diff(&out.stdout, p));
            }
            if !out.stderr.trim().is_empty() {
                eprint!("{}", out.stderr);
            }
            tracing::debug!("`{}` finished with {}", inv, out.exit);
            eprintln!("{} Formatting failed", p.fail_mark());
            false
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{} Formatting failed", p.fail_mark());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::process::{Captured, Exit};
    use std::path::PathBuf;

    struct OneShot {
        reply: Option<Result<Captured>>,
        seen: Vec<Invocation>,
    }

    impl Runner for OneShot {
        fn run_inherit(&mut self, _inv: &Invocation) -> Result<Exit> {
            unreachable!("formatter never inherits stdio")
        }

        fn run_capture(&mut self, inv: &Invocation) -> Result<Captured> {
            self.seen.push(inv.clone());
            self.reply.take().expect("single reply")
        }
    }

    fn cfg() -> RunConfig {
        RunConfig {
            workspace: PathBuf::from("/ws"),
            home: None,
            palette: Palette::plain(),
        }
    }

    fn captured(code: i32, stdout: &str) -> Captured {
        Captured {
            exit: Exit(Some(code)),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_invocation_without_config() {
        let inv = formatter_invocation(Path::new("a.tex"), None, Path::new("/ws"));
        assert_eq!(inv.program, "latexindent");
        assert_eq!(inv.args, vec!["-kv", "-s", "a.tex"]);
        assert_eq!(inv.cwd, PathBuf::from("/ws"));
    }

    #[test]
    fn test_invocation_with_config_override() {
        let inv = formatter_invocation(
            Path::new("sections/b.cls"),
            Some(Path::new("/home/u/latexindent.yaml")),
            Path::new("/ws"),
        );
        assert_eq!(
            inv.to_string(),
            "latexindent -kv -s -l /home/u/latexindent.yaml sections/b.cls"
        );
    }

    #[test]
    fn test_colorize_diff_plain_is_identity() {
        let report = "--- a.tex\n+++ a.tex\n@@ -1,2 +1,2 @@\n-\\foo\n+  \\foo\n context";
        assert_eq!(colorize_diff(report, &Palette::plain()), report);
    }

    #[test]
    fn test_colorize_diff_colors_each_kind() {
        let p = Palette { enabled: true };
        let out = colorize_diff("@@ -1 +1 @@ ctx\n-old\n+new\nsame", &p);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[0], format!("{} ctx", p.hunk("@@ -1 +1 @@")));
        assert_eq!(lines[1], p.removed("-old"));
        assert_eq!(lines[2], p.added("+new"));
        assert_eq!(lines[3], "same");
    }

    #[test]
    fn test_success_returns_true() {
        let mut r = OneShot {
            reply: Some(Ok(captured(0, ""))),
            seen: vec![],
        };
        assert!(format_file(&mut r, &cfg(), Path::new("a.tex"), None));
        assert_eq!(r.seen.len(), 1);
    }

    #[test]
    fn test_nonzero_exit_returns_false() {
        let mut r = OneShot {
            reply: Some(Ok(captured(1, "@@ -1 +1 @@\n-a\n+ a\n"))),
            seen: vec![],
        };
        assert!(!format_file(&mut r, &cfg(), Path::new("a.tex"), None));
    }

    #[test]
    fn test_spawn_failure_returns_false() {
        let mut r = OneShot {
            reply: Some(Err(Error::Spawn {
                command: "latexindent".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })),
            seen: vec![],
        };
        assert!(!format_file(&mut r, &cfg(), Path::new("a.tex"), None));
    }
}
