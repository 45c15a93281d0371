//! fmc — Feed Me Charts
//!
//! Turns heterogeneous financial data (raw arrays, objects, time series,
//! segmented breakdowns) into a self-contained interactive chart document.
//! This crate exposes the pipeline as a public module so that integration
//! tests and embedding callers can import it directly.
//!
//! # Architecture
//!
//! ```text
//! raw JSON ──► Normalizer ──► [Observation] ──► Renderer ──► artifact
//!                                   │
//!                                   └──► Summary (min/max/mean footer)
//! ```
//!
//! The normalizer and summary are pure and synchronous; the only
//! side-effecting steps are writing the artifact and the best-effort viewer
//! launch at the end of the pipeline.

pub mod pipeline;

pub use fmc_core::{
    config::Config, normalize, summarize, ChartKind, ChartOptions, ChartReport, FmcError,
    Observation,
};
pub use pipeline::generate;
