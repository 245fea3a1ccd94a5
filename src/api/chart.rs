use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Point, band_polygon};
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface};

use super::{
    ChartMetadata, ChartOptions, draw_gridlines, draw_shade_band, map_values, validate_options,
};

/// Counts of what one render pass drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderSummary {
    pub series: usize,
    pub line_segments: usize,
    pub markers: usize,
    pub shade_bands: usize,
    pub gridlines: usize,
    pub label_offsets_cleared: usize,
}

/// Surface produced by `create`, with the metadata it was rendered from.
#[derive(Debug)]
pub struct RenderedChart<S> {
    pub surface: S,
    pub metadata: ChartMetadata,
    pub summary: RenderSummary,
}

/// Validates `options`, opens a surface at the requested container and size,
/// and renders the chart into it.
///
/// Validation failures are returned before the surface is opened.
pub fn create<S: DrawingSurface>(options: &ChartOptions) -> ChartResult<RenderedChart<S>> {
    validate_options(options)?;
    let mut surface = S::open(&options.container, options.width, options.height)?;
    let metadata = ChartMetadata::build(options);
    let summary = render_validated(&mut surface, options, &metadata)?;
    Ok(RenderedChart {
        surface,
        metadata,
        summary,
    })
}

/// Renders `options` into an already open surface.
///
/// A failure after validation leaves whatever was drawn so far on `surface`.
pub fn render_into<S: DrawingSurface>(
    surface: &mut S,
    options: &ChartOptions,
) -> ChartResult<RenderSummary> {
    validate_options(options)?;
    let metadata = ChartMetadata::build(options);
    render_validated(surface, options, &metadata)
}

fn render_validated<S: DrawingSurface>(
    surface: &mut S,
    options: &ChartOptions,
    metadata: &ChartMetadata,
) -> ChartResult<RenderSummary> {
    let style = &metadata.style;
    let sample_count = options.valuesy.first().map_or(0, Vec::len);
    debug!(
        series = options.valuesy.len(),
        samples = sample_count,
        top_value = metadata.top_value,
        bottom_value = metadata.bottom_value,
        segments = metadata.segment_count(),
        shades = metadata.shades,
        "render chart"
    );

    let mut summary = RenderSummary::default();
    let mut previous_points: Option<Vec<Point>> = None;

    for (index, values) in options.valuesy.iter().enumerate() {
        let color = metadata
            .colors
            .as_ref()
            .and_then(|colors| colors.get(index).copied())
            .unwrap_or(style.default_series_color);
        let mapped = map_values(surface, values, Some(color), metadata)?;
        summary.series += 1;
        summary.line_segments += mapped.segments.len();
        summary.markers += mapped.markers.len();
        trace!(series = index, "mapped series");

        if metadata.shades {
            if let Some(previous) = &previous_points {
                let polygon = band_polygon(previous, &mapped.points);
                let color = shade_color(options, index - 1, metadata);
                draw_shade_band(surface, &polygon, color, style)?;
                summary.shade_bands += 1;
            }
            previous_points = Some(mapped.points);
        }
    }

    if let Some(last) = previous_points {
        // Undrawn floor series closing the last band.
        let floor = vec![Some(metadata.bottom_value); last.len()];
        let baseline = map_values(surface, &floor, None, metadata)?;
        let polygon = band_polygon(&last, &baseline.points);
        let color = shade_color(options, options.valuesy.len() - 1, metadata);
        draw_shade_band(surface, &polygon, color, style)?;
        summary.shade_bands += 1;
    }

    let gridlines = draw_gridlines(surface, metadata)?;
    summary.gridlines = gridlines.len();
    summary.label_offsets_cleared = gridlines
        .iter()
        .filter(|gridline| gridline.offset_cleared)
        .count();

    debug!(
        line_segments = summary.line_segments,
        markers = summary.markers,
        shade_bands = summary.shade_bands,
        gridlines = summary.gridlines,
        "chart rendered"
    );
    Ok(summary)
}

fn shade_color(options: &ChartOptions, band_index: usize, metadata: &ChartMetadata) -> Color {
    options
        .shade_colors
        .as_ref()
        .and_then(|colors| colors.get(band_index).copied())
        .unwrap_or(metadata.style.default_shade_color)
}
