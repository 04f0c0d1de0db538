//! Error type shared by the build and lint commands.

use crate::process::Exit;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external program could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external program ran but reported failure.
    #[error("Command failed: {command} ({exit})")]
    Failed { command: String, exit: Exit },

    #[error("invalid discovery pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot determine working directory: {0}")]
    Workspace(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
