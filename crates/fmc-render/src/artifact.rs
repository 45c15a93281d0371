//! Chart document generation and artifact writing.
//!
//! The document template is embedded in the binary via [`include_str!`] so
//! rendering works without any files on disk. The observation data is
//! injected as a JSON payload; all chart-type-specific behaviour lives in
//! the template's client-side script, keyed off `payload.kind`.

use std::path::{Path, PathBuf};

use serde_json::json;

use fmc_core::config::StyleConfig;
use fmc_core::{ChartOptions, FmcError, Observation, SeriesSummary};

const TEMPLATE: &str = include_str!("assets/chart.html");

// ---------------------------------------------------------------------------
// Document generation
// ---------------------------------------------------------------------------

/// Render the observation sequence into a standalone interactive HTML
/// document. Pure string generation, no I/O.
pub fn render_document(
    observations: &[Observation],
    options: &ChartOptions,
    summary: Option<&SeriesSummary>,
    style: &StyleConfig,
) -> String {
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| format!("{} chart", options.kind));

    let labels: Vec<String> = observations
        .iter()
        .enumerate()
        .map(|(i, obs)| display_label(obs, i))
        .collect();
    let values: Vec<f64> = observations.iter().map(|obs| obs.value).collect();

    let candles: Option<Vec<serde_json::Value>> = options.kind.is_ohlc().then(|| {
        observations
            .iter()
            .map(|obs| {
                // Bars missing OHLC fields degrade to a flat candle at the
                // observation value.
                json!({
                    "o": obs.open.unwrap_or(obs.value),
                    "h": obs.high.unwrap_or(obs.value),
                    "l": obs.low.unwrap_or(obs.value),
                    "c": obs.close.unwrap_or(obs.value),
                })
            })
            .collect()
    });

    let payload = json!({
        "title": title,
        "kind": options.kind,
        "xLabel": options.x_label,
        "yLabel": options.y_label,
        "labels": labels,
        "values": values,
        "candles": candles,
        "summary": summary,
        "style": {
            "background": style.background,
            "foreground": style.foreground,
            "grid": style.grid,
            "palette": style.palette,
        },
    });

    // "</" must not appear inside the inline <script> block.
    let payload_json = payload.to_string().replace("</", "<\\/");

    TEMPLATE
        .replace("__FMC_TITLE__", &html_escape(&title))
        .replace("__FMC_BACKGROUND__", &style.background)
        .replace("__FMC_FOREGROUND__", &style.foreground)
        .replace("/*__FMC_PAYLOAD__*/ null", &payload_json)
}

/// Pick the display label for one observation: the derived label if present,
/// the formatted date as a fallback, then a positional default.
fn display_label(obs: &Observation, index: usize) -> String {
    if let Some(label) = &obs.label {
        return label.clone();
    }
    if let Some(date) = &obs.date {
        return fmc_core::format_date_label(date);
    }
    format!("Point {}", index + 1)
}

fn html_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ---------------------------------------------------------------------------
// Artifact writing
// ---------------------------------------------------------------------------

/// Write the rendered document to `path`, creating parent directories as
/// needed. I/O failure here is fatal to the overall operation.
pub fn write_artifact(html: &str, path: &Path) -> Result<PathBuf, FmcError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| FmcError::ArtifactWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(path, html).map_err(|source| FmcError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = html.len(), "wrote chart artifact");
    Ok(path.to_path_buf())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
