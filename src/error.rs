//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, JSON and directory-walk errors, and provides semantic
//! variants for storage CLI failures and invalid inputs.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{command}` printed no content identifier")]
    EmptyCid { command: String },

    #[error("Cannot reach the IPFS node ({reason}). Make sure it is running: `ipfs daemon`")]
    NodeUnavailable { reason: String },

    #[error("Path does not exist: {0:?}")]
    PathNotFound(PathBuf),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(PathBuf),

    #[error("Image stem {stem:?} is not a numeric token id ({path:?})")]
    InvalidTokenId { stem: String, path: PathBuf },

    #[error("Output already exists: {0:?}")]
    OutputExists(PathBuf),

    #[error("Invalid configuration {path:?}: {reason}")]
    Config { path: PathBuf, reason: String },
}
