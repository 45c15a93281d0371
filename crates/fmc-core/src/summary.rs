//! Display statistics for a normalised series.
//!
//! The summary is pure and stateless: minimum, maximum, and arithmetic mean
//! of all observation values, computed once per render for the artifact
//! footer. Proportion-style chart kinds (pie, doughnut) render parts of a
//! whole, so no summary is produced for them.

use serde::Serialize;

use crate::types::{ChartKind, Observation};

/// Min/max/mean of a normalised series, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Compute display statistics for the series, or `None` when they are not
/// meaningful for the chart kind. Empty input is already excluded by the
/// normalizer invariant, but an empty slice still yields `None` rather than
/// a nonsense summary.
pub fn summarize(observations: &[Observation], kind: ChartKind) -> Option<SeriesSummary> {
    if kind.is_proportional() || observations.is_empty() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for obs in observations {
        min = min.min(obs.value);
        max = max.max(obs.value);
        sum += obs.value;
    }

    Some(SeriesSummary {
        min,
        max,
        mean: sum / observations.len() as f64,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
