use tracing::trace;

use crate::core::{Point, project_series};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, DrawingSurface, HoverFill, PathPrimitive, ShapeId, segment_path,
};

use super::ChartMetadata;

/// Shapes of one two-layer value marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerShapes {
    /// Filled, hover-reactive circle carrying the sample value attributes.
    pub inner: ShapeId,
    /// Plain ring around `inner`.
    pub outer: ShapeId,
}

/// Geometry and shapes produced for one series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MappedSeries {
    pub points: Vec<Point>,
    pub segments: Vec<ShapeId>,
    pub markers: Vec<MarkerShapes>,
}

/// Maps `values` to pixel points and, when `color` is set, draws the series.
///
/// Drawing emits one line segment between consecutive points and one marker
/// per point. Before a marker is drawn the previous marker is raised to the
/// front, so a segment never covers the markers at its ends. With `color`
/// unset nothing is drawn and only the points are returned.
pub fn map_values<S: DrawingSurface>(
    surface: &mut S,
    values: &[Option<f64>],
    color: Option<Color>,
    metadata: &ChartMetadata,
) -> ChartResult<MappedSeries> {
    let points = project_series(values, metadata.plot_area());
    let Some(color) = color else {
        return Ok(MappedSeries {
            points,
            ..MappedSeries::default()
        });
    };

    let style = &metadata.style;
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
    let mut markers: Vec<MarkerShapes> = Vec::with_capacity(points.len());

    for (index, point) in points.iter().copied().enumerate() {
        if index > 0 {
            let data = segment_path(points[index - 1], point);
            let segment = surface.path(PathPrimitive::stroked(
                data,
                color,
                style.series_line_width,
            ))?;
            segments.push(segment);
        }

        if let Some(previous) = markers.last() {
            surface.bring_to_front(previous.inner)?;
            surface.bring_to_front(previous.outer)?;
        }

        let marker = draw_marker(surface, point, color, metadata)?;
        let value = values[index].unwrap_or(0.0);
        surface.set_node_attribute(marker.inner, "data-point", "1")?;
        surface.set_node_attribute(marker.inner, "data-point-y", &value.to_string())?;
        markers.push(marker);
    }

    trace!(
        points = points.len(),
        segments = segments.len(),
        "drew series"
    );

    Ok(MappedSeries {
        points,
        segments,
        markers,
    })
}

fn draw_marker<S: DrawingSurface>(
    surface: &mut S,
    point: Point,
    color: Color,
    metadata: &ChartMetadata,
) -> ChartResult<MarkerShapes> {
    let style = &metadata.style;
    let inner = surface.circle(
        CirclePrimitive::new(
            point.x,
            point.y,
            style.marker_inner_radius,
            color,
            style.marker_inner_stroke_width,
        )
        .with_fill(style.marker_idle_fill)
        .with_hover(HoverFill {
            enter: color,
            leave: style.marker_idle_fill,
        }),
    )?;

    let mut ring = CirclePrimitive::new(
        point.x,
        point.y,
        style.marker_outer_radius,
        style.marker_outer_stroke,
        style.marker_outer_stroke_width,
    );
    if metadata.shades {
        // Rings would outline every vertex of the bands.
        ring = ring.with_stroke_opacity(0.0);
    }
    let outer = surface.circle(ring)?;

    Ok(MarkerShapes { inner, outer })
}
