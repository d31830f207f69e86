//! Error types for the algorithm runner.

use std::fmt;
use std::io;
use thiserror::Error;

/// Kind of background job; one of each may run at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    ListBranches,
    Checkout,
    Execute,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::ListBranches => write!(f, "Branch loader"),
            JobKind::Checkout => write!(f, "Branch changer"),
            JobKind::Execute => write!(f, "Script executor"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RunnerError {
    /// The external program could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The external program exited unsuccessfully.
    #[error(
        "{command} failed{}: {stderr}",
        .code.map(|c| format!(" with exit code {}", c)).unwrap_or_default()
    )]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No polygon with at least three points has been drawn.
    #[error("Please draw a boundary on the canvas")]
    MissingBoundary,

    /// A job of the same kind is still running.
    #[error("{0} already running")]
    Busy(JobKind),

    /// The background task ended without reporting a result.
    #[error("Background task ended without a result")]
    TaskDropped,
}

pub type RunnerResult<T> = Result<T, RunnerError>;
