//! Error types for the paste pipeline.
//!
//! Every failure in the pipeline is terminal. [`PasteError`] carries enough
//! context (the offending path or value) for the user to fix their input, and
//! [`PasteError::exit_code`] maps each kind to the process exit status.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause, as used across the submitter seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single submission attempt.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// DNS, connection refused, timeout, or a body that could not be read.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    #[error("failed to serialize paste request: {0}")]
    Serialization(String),
}

/// Top-level error type for the pastebin CLI.
#[derive(Error, Debug)]
pub enum PasteError {
    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("config file {path:?} could not be read: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path:?} is malformed: {reason}")]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error("input file not found: {path:?}")]
    InputFileNotFound { path: PathBuf },

    #[error("input file {path:?} could not be read: {source}")]
    InputFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid privacy value {0}: expected -1 (default), 0 (public), 1 (unlisted) or 2 (private)")]
    InvalidPrivacyValue(i64),

    #[error("expected exactly one file to paste, got {0}")]
    InvalidArgumentCount(usize),

    #[error("failed to serialize paste request: {0}")]
    Serialization(String),

    #[error("could not reach paste endpoint: {0}")]
    Transport(#[source] BoxError),

    #[error("paste API returned an error: {0}")]
    RemoteApi(String),
}

impl PasteError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            PasteError::InvalidPrivacyValue(_) | PasteError::InvalidArgumentCount(_) => 2,
            PasteError::ConfigNotFound { .. }
            | PasteError::ConfigUnreadable { .. }
            | PasteError::ConfigMalformed { .. } => 3,
            PasteError::InputFileNotFound { .. } | PasteError::InputFileUnreadable { .. } => 4,
            PasteError::Serialization(_) | PasteError::Transport(_) => 5,
            PasteError::RemoteApi(_) => 6,
        }
    }
}

impl From<SubmitError> for PasteError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Transport(cause) => PasteError::Transport(cause),
            SubmitError::Serialization(msg) => PasteError::Serialization(msg),
        }
    }
}
