//! Test builders — ergonomic constructors for `Observation` and
//! `ChartOptions` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use std::path::PathBuf;

use fmc_core::{ChartKind, ChartOptions, Observation};

// ---------------------------------------------------------------------------
// ObservationBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Observation`] test fixtures.
///
/// # Example
///
/// ```rust
/// let obs = ObservationBuilder::new(101.5)
///     .label("Jun 3")
///     .date("2024-06-03")
///     .ohlc(100.0, 103.0, 99.0, 101.5)
///     .build();
/// ```
pub struct ObservationBuilder {
    inner: Observation,
}

impl ObservationBuilder {
    pub fn new(value: f64) -> Self {
        Self {
            inner: Observation::new(value),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.inner.label = Some(label.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.inner.date = Some(date.into());
        self
    }

    pub fn ohlc(mut self, open: f64, high: f64, low: f64, close: f64) -> Self {
        self.inner.open = Some(open);
        self.inner.high = Some(high);
        self.inner.low = Some(low);
        self.inner.close = Some(close);
        self
    }

    pub fn build(self) -> Observation {
        self.inner
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a bare value-only observation.
pub fn point(value: f64) -> Observation {
    Observation::new(value)
}

/// Build a labelled observation.
pub fn labelled(value: f64, label: &str) -> Observation {
    Observation::labelled(value, label)
}

/// Build a series of bare observations from values.
pub fn series(values: &[f64]) -> Vec<Observation> {
    values.iter().map(|v| Observation::new(*v)).collect()
}

/// Chart options pointing the artifact at a path inside `dir`, with the
/// viewer disabled so tests never spawn a browser.
pub fn options_into(dir: &std::path::Path, kind: ChartKind) -> ChartOptions {
    ChartOptions {
        kind,
        output: Some(PathBuf::from(dir).join("chart.html")),
        open_viewer: false,
        ..Default::default()
    }
}
