use tracing::trace;

use crate::core::Point;
use crate::error::ChartResult;
use crate::render::{Color, DrawingSurface, PathPrimitive, ShapeId, polygon_path};

use super::ChartStyle;

/// Fills the closed `polygon` and sends it behind everything drawn so far.
pub fn draw_shade_band<S: DrawingSurface>(
    surface: &mut S,
    polygon: &[Point],
    color: Color,
    style: &ChartStyle,
) -> ChartResult<ShapeId> {
    let band = surface.path(PathPrimitive::filled(
        polygon_path(polygon),
        color,
        style.shade_opacity,
    ))?;
    surface.send_to_back(band)?;
    trace!(vertices = polygon.len(), "drew shade band");
    Ok(band)
}
