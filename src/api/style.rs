use serde::{Deserialize, Serialize};

use crate::render::{Color, FontWeight};

/// Visual constants used while drawing a chart.
///
/// Every field has a serde default, so a partial JSON object overrides only
/// the fields it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Line and marker color of series without an entry in `colors`. Black.
    #[serde(default = "default_series_color")]
    pub default_series_color: Color,
    /// Band fill of bands without an entry in `shade_colors`. Red.
    #[serde(default = "default_shade_color")]
    pub default_shade_color: Color,
    /// Stroke width of series line segments. 4 px.
    #[serde(default = "default_series_line_width")]
    pub series_line_width: f64,
    /// Radius of the hover-reactive inner marker circle. 4 px.
    #[serde(default = "default_marker_inner_radius")]
    pub marker_inner_radius: f64,
    /// Stroke width of the inner marker circle. 3 px.
    #[serde(default = "default_marker_inner_stroke_width")]
    pub marker_inner_stroke_width: f64,
    /// Fill of the inner marker circle while not hovered. White.
    #[serde(default = "default_marker_idle_fill")]
    pub marker_idle_fill: Color,
    /// Radius of the outer marker ring. 6 px.
    #[serde(default = "default_marker_outer_radius")]
    pub marker_outer_radius: f64,
    /// Stroke of the outer marker ring. White.
    #[serde(default = "default_marker_outer_stroke")]
    pub marker_outer_stroke: Color,
    /// Stroke width of the outer marker ring. 2 px.
    #[serde(default = "default_marker_outer_stroke_width")]
    pub marker_outer_stroke_width: f64,
    /// Fill opacity of shade bands. 0.2.
    #[serde(default = "default_shade_opacity")]
    pub shade_opacity: f64,
    /// Stroke of horizontal reference lines. `#ccc`.
    #[serde(default = "default_gridline_color")]
    pub gridline_color: Color,
    /// Stroke width of horizontal reference lines. 1 px.
    #[serde(default = "default_gridline_width")]
    pub gridline_width: f64,
    /// Gridline label font size. 12 px.
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_font_weight")]
    pub label_font_weight: FontWeight,
    /// Gridline label color. `#bbb`.
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    /// Distance between a gridline and the baseline of its label. 6 px.
    #[serde(default = "default_label_lift_px")]
    pub label_lift_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            default_series_color: default_series_color(),
            default_shade_color: default_shade_color(),
            series_line_width: default_series_line_width(),
            marker_inner_radius: default_marker_inner_radius(),
            marker_inner_stroke_width: default_marker_inner_stroke_width(),
            marker_idle_fill: default_marker_idle_fill(),
            marker_outer_radius: default_marker_outer_radius(),
            marker_outer_stroke: default_marker_outer_stroke(),
            marker_outer_stroke_width: default_marker_outer_stroke_width(),
            shade_opacity: default_shade_opacity(),
            gridline_color: default_gridline_color(),
            gridline_width: default_gridline_width(),
            label_font_size_px: default_label_font_size_px(),
            label_font_weight: default_label_font_weight(),
            label_color: default_label_color(),
            label_lift_px: default_label_lift_px(),
        }
    }
}

fn default_series_color() -> Color {
    Color::BLACK
}

fn default_shade_color() -> Color {
    Color::RED
}

fn default_series_line_width() -> f64 {
    4.0
}

fn default_marker_inner_radius() -> f64 {
    4.0
}

fn default_marker_inner_stroke_width() -> f64 {
    3.0
}

fn default_marker_idle_fill() -> Color {
    Color::WHITE
}

fn default_marker_outer_radius() -> f64 {
    6.0
}

fn default_marker_outer_stroke() -> Color {
    Color::WHITE
}

fn default_marker_outer_stroke_width() -> f64 {
    2.0
}

fn default_shade_opacity() -> f64 {
    0.2
}

fn default_gridline_color() -> Color {
    Color::from_rgb8(0xcc, 0xcc, 0xcc)
}

fn default_gridline_width() -> f64 {
    1.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_label_font_weight() -> FontWeight {
    FontWeight::Bold
}

fn default_label_color() -> Color {
    Color::from_rgb8(0xbb, 0xbb, 0xbb)
}

fn default_label_lift_px() -> f64 {
    6.0
}
