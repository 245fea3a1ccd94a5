use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Affine mapping from series values to padded pixel space.
///
/// Raw coordinates are laid out over the nominal `width x height` box with y
/// growing downward, then shrunk by `((width - 2p) / width, (height - 2p) / height)`
/// and translated by `p`, so every mapped point stays inside the padded area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub top_value: f64,
    pub bottom_value: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(
        width: f64,
        height: f64,
        padding: f64,
        top_value: f64,
        bottom_value: f64,
    ) -> Self {
        Self {
            width,
            height,
            padding,
            top_value,
            bottom_value,
        }
    }

    /// Value span covered by the vertical axis.
    #[must_use]
    pub fn value_range(self) -> f64 {
        self.top_value - self.bottom_value
    }

    /// Pixels per value unit before the padding shrink.
    #[must_use]
    pub fn vertical_scale(self) -> f64 {
        self.height / self.value_range()
    }

    #[must_use]
    pub fn shrink_factors(self) -> (f64, f64) {
        (
            (self.width - self.padding * 2.0) / self.width,
            (self.height - self.padding * 2.0) / self.height,
        )
    }

    /// Horizontal distance between consecutive samples of a `len`-sample series.
    ///
    /// A single sample has no spacing and sits on the left edge.
    #[must_use]
    pub fn horizontal_step(self, len: usize) -> f64 {
        if len < 2 {
            return 0.0;
        }
        self.width / (len - 1) as f64
    }

    /// Maps sample `index` of a `len`-sample series holding `value` to pixel space.
    #[must_use]
    pub fn map_sample(self, index: usize, len: usize, value: f64) -> Point {
        let raw = Point::new(index as f64 * self.horizontal_step(len), self.raw_y(value));
        let (shrink_x, shrink_y) = self.shrink_factors();
        raw.scale(shrink_x, shrink_y).translate_uniform(self.padding)
    }

    /// Padded y coordinate of `value`, as used by horizontal reference lines.
    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        let (_, shrink_y) = self.shrink_factors();
        self.raw_y(value) * shrink_y + self.padding
    }

    fn raw_y(self, value: f64) -> f64 {
        self.height - (value - self.bottom_value) * self.vertical_scale()
    }
}
