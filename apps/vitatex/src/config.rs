//! Run configuration and tool config-file discovery.
//!
//! `latexindent.yaml` and `.chktexrc` are looked up in two places:
//! 1. the workspace (current directory),
//! 2. the user's home directory.
//!
//! A missing file is not an error: the formatter falls back to its defaults
//! and the linter is skipped for the whole run.

use crate::error::{Error, Result};
use crate::output::Palette;
use std::path::{Path, PathBuf};

/// Formatter settings file name.
pub const LATEXINDENT_CONFIG: &str = "latexindent.yaml";
/// Linter settings file name.
pub const CHKTEX_CONFIG: &str = ".chktexrc";

/// Settings fixed for the duration of a single command.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub workspace: PathBuf,
    pub home: Option<PathBuf>,
    pub palette: Palette,
}

impl RunConfig {
    /// Build from the process environment: cwd, `$HOME`, `NO_COLOR`.
    pub fn from_env() -> Result<Self> {
        let workspace = std::env::current_dir().map_err(Error::Workspace)?;
        Ok(Self {
            workspace,
            home: home::home_dir(),
            palette: Palette::from_env(),
        })
    }

    /// Resolve `filename` against this run's workspace and home directory.
    pub fn resolve(&self, filename: &str) -> ConfigSource {
        resolve_in(filename, &self.workspace, self.home.as_deref())
    }
}

/// Where a tool config was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Workspace(PathBuf),
    Home(PathBuf),
    Absent,
}

impl ConfigSource {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Workspace(p) | Self::Home(p) => Some(p),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}

/// Look up `filename` in `workspace`, then in `home`. Logs the outcome.
pub fn resolve_in(filename: &str, workspace: &Path, home: Option<&Path>) -> ConfigSource {
    let candidate = workspace.join(filename);
    if candidate.exists() {
        tracing::info!("Using {} from workspace: {}", filename, candidate.display());
        return ConfigSource::Workspace(candidate);
    }

    if let Some(dir) = home {
        let candidate = dir.join(filename);
        if candidate.exists() {
            tracing::info!("Using {} from home directory: {}", filename, candidate.display());
            return ConfigSource::Home(candidate);
        }
    }

    tracing::info!("No {} found, will use default settings", filename);
    ConfigSource::Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_workspace_preferred_over_home() {
        let ws = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(ws.path().join(CHKTEX_CONFIG), "").unwrap();
        fs::write(home.path().join(CHKTEX_CONFIG), "").unwrap();

        let got = resolve_in(CHKTEX_CONFIG, ws.path(), Some(home.path()));
        assert_eq!(got, ConfigSource::Workspace(ws.path().join(CHKTEX_CONFIG)));
    }

    #[test]
    fn test_home_fallback() {
        let ws = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(LATEXINDENT_CONFIG), "").unwrap();

        let got = resolve_in(LATEXINDENT_CONFIG, ws.path(), Some(home.path()));
        assert_eq!(got, ConfigSource::Home(home.path().join(LATEXINDENT_CONFIG)));
        assert!(got.is_found());
    }

    #[test]
    fn test_absent_everywhere() {
        let ws = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let got = resolve_in(CHKTEX_CONFIG, ws.path(), Some(home.path()));
        assert_eq!(got, ConfigSource::Absent);
        assert!(got.path().is_none());
    }

    #[test]
    fn test_absent_without_home_dir() {
        let ws = TempDir::new().unwrap();
        let got = resolve_in(LATEXINDENT_CONFIG, ws.path(), None);
        assert_eq!(got, ConfigSource::Absent);
    }

    #[test]
    fn test_run_config_resolve_uses_its_dirs() {
        let ws = TempDir::new().unwrap();
        fs::write(ws.path().join(LATEXINDENT_CONFIG), "defaultIndent: '  '").unwrap();
        let cfg = RunConfig {
            workspace: ws.path().to_path_buf(),
            home: None,
            palette: Palette::plain(),
        };
        let got = cfg.resolve(LATEXINDENT_CONFIG);
        assert_eq!(got.path(), Some(ws.path().join(LATEXINDENT_CONFIG).as_path()));
    }
}
