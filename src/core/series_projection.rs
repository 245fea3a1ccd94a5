use crate::core::{PlotArea, Point};

/// Maps one series to pixel points, one per sample, in input order.
///
/// Missing samples are mapped as `0.0`.
#[must_use]
pub fn project_series(values: &[Option<f64>], area: PlotArea) -> Vec<Point> {
    let len = values.len();
    values
        .iter()
        .enumerate()
        .map(|(index, value)| area.map_sample(index, len, value.unwrap_or(0.0)))
        .collect()
}
