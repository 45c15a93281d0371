//! fmc-render — chart artifact rendering for fmc.
//!
//! Consumes a normalised observation sequence plus display configuration and
//! produces a standalone interactive HTML document: the data is embedded
//! directly in the page, the chart is drawn client-side, and no server is
//! required to view it.
//!
//! Rendering is templated output generation with no algorithmic content; the
//! design lives in [`fmc_core`](fmc_core), which this crate only consumes.

pub mod artifact;
pub mod viewer;

pub use artifact::{render_document, write_artifact};
pub use viewer::launch_viewer;
