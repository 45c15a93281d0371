//! Core types for fmc-core — Feed Me Charts.
//!
//! This module defines the fundamental data structures shared across the
//! pipeline: the normalised [`Observation`], the [`ChartKind`] discriminant,
//! the caller-supplied [`ChartOptions`], and the caller-facing
//! [`ChartReport`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// A normalised observation produced by the normalizer and consumed by the
/// renderer.
///
/// Every field is optional except `value`. The normalizer populates as many
/// fields as it can from the raw input; the remainder are left as `None`.
/// Observations are immutable once constructed and live for exactly one
/// normalization→render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// The numeric magnitude. Always finite; NaN never passes normalization.
    pub value: f64,
    /// Human-readable x-axis tick. Derived, not required to be unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Original date/period string, preserved verbatim for downstream
    /// formatting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// OHLC copy-through fields, present only for candlestick-capable
    /// inputs. Independent of `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
}

impl Observation {
    /// Build a bare observation carrying only a value.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            date: None,
            open: None,
            high: None,
            low: None,
            close: None,
        }
    }

    /// Build an observation with a value and a label, the common case for
    /// array and flat-map inputs.
    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(value)
        }
    }
}

// ---------------------------------------------------------------------------
// ChartKind
// ---------------------------------------------------------------------------

/// The chart style the renderer should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
    Scatter,
    Pie,
    Doughnut,
    Radar,
    Candlestick,
}

impl ChartKind {
    /// Proportion-style kinds render parts-of-a-whole; min/max/mean display
    /// statistics are not meaningful for them.
    pub fn is_proportional(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }

    /// Whether the kind consumes the OHLC fields of an observation.
    pub fn is_ohlc(self) -> bool {
        matches!(self, ChartKind::Candlestick)
    }
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Line
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Area => write!(f, "area"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Doughnut => write!(f, "doughnut"),
            ChartKind::Radar => write!(f, "radar"),
            ChartKind::Candlestick => write!(f, "candlestick"),
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "area" => Ok(ChartKind::Area),
            "scatter" => Ok(ChartKind::Scatter),
            "pie" => Ok(ChartKind::Pie),
            "doughnut" => Ok(ChartKind::Doughnut),
            "radar" => Ok(ChartKind::Radar),
            "candlestick" => Ok(ChartKind::Candlestick),
            other => Err(format!(
                "unknown chart kind: {other} \
                 (expected line|bar|area|scatter|pie|doughnut|radar|candlestick)"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ChartOptions
// ---------------------------------------------------------------------------

/// Display configuration supplied by the caller, passed through the pipeline
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Chart title. Falls back to a generic title in the renderer.
    pub title: Option<String>,
    /// Chart style to emit.
    pub kind: ChartKind,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Explicit artifact path. When `None` the pipeline derives one from
    /// the configured output directory and a UTC timestamp.
    pub output: Option<PathBuf>,
    /// Whether to launch the platform viewer after writing the artifact.
    pub open_viewer: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            kind: ChartKind::Line,
            x_label: "Period".to_string(),
            y_label: "Value".to_string(),
            output: None,
            open_viewer: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ChartReport
// ---------------------------------------------------------------------------

/// Structured outcome of one normalization→render cycle.
///
/// The pipeline never lets an error escape: every failure is converted into
/// a report with `success == false` and a populated `error` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Path of the generated artifact. Present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PathBuf>,
    /// Chart kind that was rendered (or requested, on failure).
    pub kind: ChartKind,
    /// Number of observations rendered. Present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
    /// Error message. Present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChartReport {
    /// Build a success report for a written artifact.
    pub fn success(artifact: PathBuf, kind: ChartKind, points: usize) -> Self {
        Self {
            success: true,
            message: format!(
                "rendered {points} point{} as a {kind} chart",
                if points == 1 { "" } else { "s" }
            ),
            artifact: Some(artifact),
            kind,
            points: Some(points),
            error: None,
        }
    }

    /// Build a failure report from any pipeline error.
    pub fn failure(kind: ChartKind, error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("chart generation failed: {error}"),
            artifact: None,
            kind,
            points: None,
            error: Some(error.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
