//! Pipeline orchestration — one normalization→render cycle.
//!
//! [`generate`] is the single entry point: it runs the normalizer, computes
//! the display summary, renders and writes the artifact, and optionally
//! launches the viewer. Every raised error is converted into a
//! failure-shaped [`ChartReport`]; callers never see a raw error. The one
//! exception to fatality is the viewer launch, which is best-effort and
//! fully suppressed.

use std::path::PathBuf;

use serde_json::Value;

use fmc_core::config::Config;
use fmc_core::{normalize, summarize, ChartOptions, ChartReport, FmcError};
use fmc_render::{launch_viewer, render_document, write_artifact};

/// Run the full pipeline for one raw input value.
pub fn generate(raw: &Value, options: &ChartOptions, config: &Config) -> ChartReport {
    match run(raw, options, config) {
        Ok((artifact, points)) => ChartReport::success(artifact, options.kind, points),
        Err(err) => {
            tracing::debug!(%err, "pipeline failed");
            ChartReport::failure(options.kind, err)
        }
    }
}

fn run(
    raw: &Value,
    options: &ChartOptions,
    config: &Config,
) -> Result<(PathBuf, usize), FmcError> {
    let observations = normalize(raw)?;
    let summary = summarize(&observations, options.kind);

    let html = render_document(&observations, options, summary.as_ref(), &config.style);
    let path = options
        .output
        .clone()
        .unwrap_or_else(|| default_artifact_path(&config.output.dir));
    let artifact = write_artifact(&html, &path)?;

    if options.open_viewer || config.output.open_viewer {
        if let Err(err) = launch_viewer(&artifact) {
            tracing::warn!(%err, "viewer launch failed; continuing");
        }
    }

    Ok((artifact, observations.len()))
}

/// Derive a timestamped artifact path inside the configured output
/// directory; an empty directory setting means the system temp dir.
fn default_artifact_path(dir: &str) -> PathBuf {
    let dir = if dir.is_empty() {
        std::env::temp_dir()
    } else {
        PathBuf::from(dir)
    };
    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    dir.join(format!("fmc-{stamp}.html"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
