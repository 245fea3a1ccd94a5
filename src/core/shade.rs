use crate::core::Point;

/// Closed boundary of the band between two point sequences.
///
/// The polygon visits `upper` in order and then `lower` in reverse, so the
/// result is a simple loop for two series sharing the same x positions.
#[must_use]
pub fn band_polygon(upper: &[Point], lower: &[Point]) -> Vec<Point> {
    let mut polygon = Vec::with_capacity(upper.len() + lower.len());
    polygon.extend_from_slice(upper);
    polygon.extend(lower.iter().rev().copied());
    polygon
}

#[cfg(test)]
mod tests {
    use super::band_polygon;
    use crate::core::Point;

    #[test]
    fn band_reverses_the_lower_boundary() {
        let upper = [Point::new(0.0, 1.0), Point::new(5.0, 2.0)];
        let lower = [Point::new(0.0, 9.0), Point::new(5.0, 8.0)];

        let polygon = band_polygon(&upper, &lower);
        assert_eq!(
            polygon,
            vec![
                Point::new(0.0, 1.0),
                Point::new(5.0, 2.0),
                Point::new(5.0, 8.0),
                Point::new(0.0, 9.0),
            ]
        );
    }
}
