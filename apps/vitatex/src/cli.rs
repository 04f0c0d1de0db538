//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vitatex",
    version,
    about = "Build, format and lint a LaTeX document",
    long_about = "Vitatex — a thin wrapper around xelatex, latexindent and chktex.\n\nTool configs (latexindent.yaml, .chktexrc) are taken from the current directory, falling back to the home directory.",
    after_help = "Examples:\n  vitatex build\n  vitatex lint\n  NO_COLOR=1 vitatex -v lint",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Compile the document
    #[command(
        about = "Compile resume.tex with two XeLaTeX passes",
        long_about = "Run `xelatex -interaction=nonstopmode resume.tex` twice so cross-references resolve. Stops at the first failing pass."
    )]
    Build,
    /// Format and lint sources
    #[command(
        about = "Format and lint .tex/.cls sources",
        long_about = "Run latexindent over every discovered .tex/.cls file, then chktex when a .chktexrc is found. Exits non-zero when any file fails.",
        after_help = "Excluded: node_modules/, build/, dist/, _minted-*/ and python-data.tex"
    )]
    Lint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["vitatex", "build"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Build));
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["vitatex", "lint", "--verbose"]).unwrap();
        assert!(matches!(cli.cmd, Commands::Lint));
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["vitatex", "build", "--input", "x.tex"]).is_err());
    }
}
