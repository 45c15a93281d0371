//! Error taxonomy for the fmc pipeline.
//!
//! Three failure classes exist, with different propagation policies:
//!
//! - [`FmcError::InvalidInput`] — the normalizer could not derive a single
//!   observation. Always surfaced to the caller as a failure report.
//! - [`FmcError::ArtifactWrite`] — the renderer could not write the chart
//!   document. Fatal, never retried.
//! - [`FmcError::ViewerLaunch`] — the browser could not be started. Fully
//!   suppressed at the call site; logged at most, never surfaced.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FmcError {
    /// Input was missing, empty, or yielded zero valid observations after
    /// shape detection and extraction.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The chart document could not be written to disk.
    #[error("failed to write chart artifact to {}", .path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform viewer could not be launched. Best-effort only.
    #[error("failed to launch viewer")]
    ViewerLaunch(#[source] std::io::Error),
}

impl FmcError {
    /// Shorthand for the `InvalidInput` variant.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        FmcError::InvalidInput(msg.into())
    }
}
