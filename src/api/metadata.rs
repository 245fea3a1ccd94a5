use serde::{Deserialize, Serialize};

use crate::core::PlotArea;
use crate::render::Color;

use super::{ChartOptions, ChartStyle};

/// Reference line count used when `segments` is unset.
pub const DEFAULT_SEGMENTS: u32 = 3;

/// Amount added to the top of a flat (zero-height) value range.
pub const FLAT_RANGE_WIDENING: f64 = 10.0;

/// Render parameters derived once per render from `ChartOptions`.
///
/// `top_value > bottom_value` holds for every value built by `build`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub top_value: f64,
    pub bottom_value: f64,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub colors: Option<Vec<Color>>,
    pub segments: Option<u32>,
    pub shades: bool,
    pub style: ChartStyle,
}

impl ChartMetadata {
    /// Derives the effective value range and carries geometry and styling through.
    ///
    /// 1. Unset range ends come from the finite samples of every series.
    /// 2. Even-top rule: when the top comes from the data and `segments` is
    ///    unset, an odd top is raised by one so the three default gridlines
    ///    land on integral labels. Flat data skips this rule.
    /// 3. A flat range is widened by `FLAT_RANGE_WIDENING`, or by a few ulps
    ///    where adding that amount no longer changes the value.
    /// 4. Overrides that invert the range are swapped.
    #[must_use]
    pub fn build(options: &ChartOptions) -> Self {
        let (scanned_min, scanned_max) =
            if options.top_value.is_none() || options.bottom_value.is_none() {
                scan_value_range(&options.valuesy)
            } else {
                (0.0, 0.0)
            };

        let mut top = options.top_value.unwrap_or(scanned_max);
        let mut bottom = options.bottom_value.unwrap_or(scanned_min);

        if options.top_value.is_none() && options.segments.is_none() && top != bottom {
            top = round_top_to_even(top);
        }
        if top == bottom {
            (top, bottom) = widen_flat_range(top);
        }
        if top < bottom {
            std::mem::swap(&mut top, &mut bottom);
        }

        Self {
            top_value: top,
            bottom_value: bottom,
            width: options.width,
            height: options.height,
            padding: options.padding,
            colors: options.colors.clone(),
            segments: options.segments,
            shades: options.shades,
            style: options.style,
        }
    }

    /// Gridline count, falling back to `DEFAULT_SEGMENTS`.
    #[must_use]
    pub fn segment_count(&self) -> u32 {
        self.segments.unwrap_or(DEFAULT_SEGMENTS)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::new(
            self.width,
            self.height,
            self.padding,
            self.top_value,
            self.bottom_value,
        )
    }
}

/// Minimum and maximum over the finite samples, `(0, 0)` when there are none.
fn scan_value_range(valuesy: &[Vec<Option<f64>>]) -> (f64, f64) {
    let mut finite = valuesy
        .iter()
        .flatten()
        .filter_map(|value| value.filter(|v| v.is_finite()));
    let Some(first) = finite.next() else {
        return (0.0, 0.0);
    };
    finite.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

/// Opens a flat range at `value` into a non-empty `(top, bottom)` pair.
fn widen_flat_range(value: f64) -> (f64, f64) {
    let top = value + FLAT_RANGE_WIDENING;
    if top > value {
        return (top, value);
    }
    let step = value.abs() * f64::EPSILON * 16.0;
    if (value + step).is_finite() {
        (value + step, value)
    } else {
        (value, value - step)
    }
}

/// Raises a top value that is not a multiple of two by one.
fn round_top_to_even(top: f64) -> f64 {
    if top % 2.0 != 0.0 { top + 1.0 } else { top }
}

#[cfg(test)]
mod tests {
    use super::{ChartMetadata, DEFAULT_SEGMENTS};
    use crate::api::ChartOptions;

    fn options() -> ChartOptions {
        ChartOptions::new("chart", 300.0, 150.0)
    }

    #[test]
    fn explicit_segments_keep_the_scanned_top() {
        let metadata = ChartMetadata::build(
            &options()
                .with_series([1.0, 3.0, 2.0])
                .with_series([4.0, 5.0, 4.0])
                .with_segments(3),
        );
        assert_eq!(metadata.top_value, 5.0);
        assert_eq!(metadata.bottom_value, 1.0);
    }

    #[test]
    fn auto_segments_raise_an_odd_top() {
        let metadata = ChartMetadata::build(&options().with_series([1.0, 3.0, 2.0]));
        assert_eq!(metadata.top_value, 4.0);
        assert_eq!(metadata.bottom_value, 1.0);
        assert_eq!(metadata.segment_count(), DEFAULT_SEGMENTS);
    }

    #[test]
    fn explicit_top_is_never_rounded() {
        let mut opts = options().with_series([1.0, 2.0]);
        opts.top_value = Some(7.0);
        let metadata = ChartMetadata::build(&opts);
        assert_eq!(metadata.top_value, 7.0);
        assert_eq!(metadata.bottom_value, 1.0);
    }

    #[test]
    fn flat_series_is_widened_by_ten() {
        let metadata = ChartMetadata::build(&options().with_series([5.0, 5.0, 5.0]));
        assert_eq!(metadata.top_value, 15.0);
        assert_eq!(metadata.bottom_value, 5.0);
    }

    #[test]
    fn missing_and_non_finite_samples_are_ignored_by_the_scan() {
        let metadata = ChartMetadata::build(
            &options()
                .with_sparse_series([None, Some(2.0), Some(f64::NAN), Some(8.0)])
                .with_segments(4),
        );
        assert_eq!(metadata.top_value, 8.0);
        assert_eq!(metadata.bottom_value, 2.0);
    }

    #[test]
    fn flat_range_stays_open_at_large_magnitudes() {
        for value in [1e18, -1e18, f64::MAX] {
            let metadata =
                ChartMetadata::build(&options().with_series([value, value, value]));
            assert!(metadata.top_value > metadata.bottom_value, "flat at {value}");
            assert!(metadata.top_value.is_finite());
            assert!(metadata.plot_area().vertical_scale().is_finite());
        }
    }

    #[test]
    fn inverted_overrides_are_swapped() {
        let metadata =
            ChartMetadata::build(&options().with_series([1.0]).with_value_range(9.0, 3.0));
        assert_eq!(metadata.top_value, 9.0);
        assert_eq!(metadata.bottom_value, 3.0);
    }

    #[test]
    fn build_is_pure() {
        let opts = options()
            .with_series([2.0, 9.0])
            .with_padding(4.0)
            .with_shades(true);
        let before = opts.clone();

        let first = ChartMetadata::build(&opts);
        let second = ChartMetadata::build(&opts);

        assert_eq!(first, second);
        assert_eq!(opts, before);
        assert_eq!(first.padding, 4.0);
        assert!(first.shades);
    }
}
