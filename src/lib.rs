//! crumble-chart: multi-series line charts with shaded bands.
//!
//! Series values are mapped into a padded pixel box, drawn as polylines with
//! hover-reactive markers, optionally banded with translucent fills, and
//! underlaid with labelled horizontal reference lines. Drawing goes through
//! the `render::DrawingSurface` contract; `render::Scene` is a retained
//! implementation that serializes to SVG.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartMetadata, ChartOptions, ChartStyle, RenderSummary, create, render_into};
pub use error::{ChartError, ChartResult};
