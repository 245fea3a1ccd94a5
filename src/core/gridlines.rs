use serde::{Deserialize, Serialize};

use crate::core::PlotArea;

/// One horizontal reference line with its axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Lays out `segments` evenly spaced reference lines from the bottom value up
/// to the top value.
///
/// A single segment yields one line at the top value; zero segments yield none.
/// Labels carry the absolute value `bottom + i * step`, not the offset from the
/// bottom value, so they agree with where `value_to_y` places each line.
#[must_use]
pub fn layout_gridlines(area: PlotArea, segments: u32) -> Vec<Gridline> {
    match segments {
        0 => Vec::new(),
        1 => vec![gridline_at(area, area.top_value)],
        _ => {
            let step = area.value_range() / f64::from(segments - 1);
            (0..segments)
                .map(|i| gridline_at(area, area.bottom_value + step * f64::from(i)))
                .collect()
        }
    }
}

fn gridline_at(area: PlotArea, value: f64) -> Gridline {
    Gridline {
        value,
        y: area.value_to_y(value),
        label: format_gridline_label(value),
    }
}

/// Formats a reference value rounded to the nearest integer.
#[must_use]
pub fn format_gridline_label(value: f64) -> String {
    let rounded = value.round();
    // Avoid "-0" for small negative values.
    if rounded == 0.0 {
        return "0".to_owned();
    }
    format!("{rounded}")
}
