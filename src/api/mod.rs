//! Chart options, metadata derivation and the render pass.

mod chart;
mod gridline_renderer;
mod metadata;
mod options;
mod series_renderer;
mod shade_renderer;
mod style;
mod validation;

pub use chart::{RenderSummary, RenderedChart, create, render_into};
pub use gridline_renderer::{GridlineShapes, draw_gridlines};
pub use metadata::{ChartMetadata, DEFAULT_SEGMENTS, FLAT_RANGE_WIDENING};
pub use options::ChartOptions;
pub use series_renderer::{MappedSeries, MarkerShapes, map_values};
pub use shade_renderer::draw_shade_band;
pub use style::ChartStyle;
pub use validation::validate_options;
