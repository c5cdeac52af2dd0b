//! Error types for the sentiment pipelines.

use serde::Serialize;
use thiserror::Error;

/// Errors produced by pipeline construction and scoring.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Trained model weights could not be located.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// Trained model weights exist but could not be loaded.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// Entry has no usable text.
    #[error("entry has no usable text")]
    MissingText,

    /// Embedded image payload could not be decoded or materialized.
    #[error("image payload decode failed: {0}")]
    DecodeFailed(String),

    /// Scoring capability returned a label outside the canonical taxonomy.
    #[error("unrecognized sentiment label: {0:?}")]
    UnknownLabel(String),

    /// Scoring capability failed at inference time.
    #[error("scoring failed: {0}")]
    Scoring(String),

    /// Pass-through I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Per-entry error category surfaced in a batch's error list.
///
/// These never abort a batch; each one is recorded against the originating
/// entry and processing continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Entry text was empty or whitespace-only; entry skipped.
    MissingText,
    /// Embedded image payload was malformed; entry scored text-only.
    DecodeFailed,
    /// Scorer returned an unrecognized label; entry skipped.
    UnknownLabel,
    /// Scorer failed at inference time; entry skipped.
    ScoringFailed,
}

impl From<&PipelineError> for ErrorKind {
    fn from(err: &PipelineError) -> Self {
        match err {
            PipelineError::MissingText => ErrorKind::MissingText,
            PipelineError::DecodeFailed(_) => ErrorKind::DecodeFailed,
            PipelineError::UnknownLabel(_) => ErrorKind::UnknownLabel,
            _ => ErrorKind::ScoringFailed,
        }
    }
}
