//! fmc-core — Feed Me Charts core library.
//!
//! This crate exposes the normalization engine and the shared types used
//! across the pipeline.
//!
//! # Architecture
//!
//! ```text
//! raw JSON ──► Normalizer ──► [Observation] ──► Summary ──► Renderer
//! ```
//!
//! The normalizer is a pure function: it borrows an arbitrary
//! `serde_json::Value`, classifies its shape, and produces an ordered
//! sequence of [`Observation`] records or an [`FmcError::InvalidInput`].
//! Everything downstream consumes that sequence unchanged.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod summary;
pub mod types;

pub use error::FmcError;
pub use normalizer::{format_date_label, normalize};
pub use summary::{summarize, SeriesSummary};
pub use types::{ChartKind, ChartOptions, ChartReport, Observation};
