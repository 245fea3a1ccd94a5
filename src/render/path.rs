use kurbo::BezPath;

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// Path data for a straight segment: `M{x0} {y0}L{x1} {y1}`.
#[must_use]
pub fn segment_path(from: Point, to: Point) -> String {
    format!("M{} {}L{} {}", from.x, from.y, to.x, to.y)
}

/// Closed path data visiting every vertex: `M x,y x,y ... Z`.
///
/// Vertices after the first are implicit line-to commands.
#[must_use]
pub fn polygon_path(vertices: &[Point]) -> String {
    let mut data = String::from("M");
    for vertex in vertices {
        data.push_str(&vertex.to_key());
        data.push(' ');
    }
    data.push('Z');
    data
}

/// Parses SVG path data (as emitted by `segment_path` and `polygon_path`)
/// into a `kurbo::BezPath`.
pub fn parse_path_data(data: &str) -> ChartResult<BezPath> {
    BezPath::from_svg(data)
        .map_err(|err| ChartError::InvalidData(format!("invalid path data `{data}`: {err}")))
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Point as KurboPoint};

    use super::{parse_path_data, polygon_path, segment_path};
    use crate::core::Point;

    #[test]
    fn segment_path_uses_move_then_line() {
        let data = segment_path(Point::new(10.0, 140.0), Point::new(150.0, 75.5));
        assert_eq!(data, "M10 140L150 75.5");
    }

    #[test]
    fn polygon_path_closes_the_loop() {
        let data = polygon_path(&[Point::new(0.0, 1.0), Point::new(2.0, 3.0)]);
        assert_eq!(data, "M0,1 2,3 Z");
    }

    #[test]
    fn polygon_vertices_after_the_first_are_line_tos() {
        let path = parse_path_data(&polygon_path(&[
            Point::new(0.0, 1.0),
            Point::new(2.0, 3.0),
            Point::new(4.0, -5.0),
        ]))
        .expect("parse");
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(KurboPoint::new(0.0, 1.0)),
                PathEl::LineTo(KurboPoint::new(2.0, 3.0)),
                PathEl::LineTo(KurboPoint::new(4.0, -5.0)),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn segment_paths_parse_to_a_single_line() {
        let path = parse_path_data(&segment_path(Point::new(1.5, 2.0), Point::new(-3.0, 0.25)))
            .expect("parse");
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(KurboPoint::new(1.5, 2.0)),
                PathEl::LineTo(KurboPoint::new(-3.0, 0.25)),
            ]
        );
    }

    #[test]
    fn truncated_curves_are_invalid_data() {
        assert!(parse_path_data("M1 2C3 4").is_err());
    }
}
