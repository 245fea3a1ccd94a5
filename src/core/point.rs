use serde::{Deserialize, Serialize};

/// Pixel-space coordinate produced by the chart geometry.
///
/// Transforms take `self` by value and return a new point, so a point held as
/// a snapshot (for example the previous series of a shade band) can never be
/// altered through another binding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves the point by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Moves the point by `d` on both axes.
    #[must_use]
    pub fn translate_uniform(self, d: f64) -> Self {
        self.translate(d, d)
    }

    /// Multiplies the coordinates by `(sx, sy)`.
    #[must_use]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Multiplies both coordinates by `s`.
    #[must_use]
    pub fn scale_uniform(self, s: f64) -> Self {
        self.scale(s, s)
    }

    /// Serializes the point as `"x,y"`, the vertex form used in path data.
    #[must_use]
    pub fn to_key(self) -> String {
        format!("{},{}", self.x, self.y)
    }
}
