pub mod gridlines;
pub mod plot_area;
pub mod point;
pub mod series_projection;
pub mod shade;

pub use gridlines::{Gridline, format_gridline_label, layout_gridlines};
pub use plot_area::PlotArea;
pub use point::Point;
pub use series_projection::project_series;
pub use shade::band_polygon;
