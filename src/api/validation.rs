use crate::error::{ChartError, ChartResult};

use super::ChartOptions;

fn ensure(condition: bool, message: impl FnOnce() -> String) -> ChartResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ChartError::InvalidOptions(message()))
    }
}

/// Checks caller options before anything is drawn.
pub fn validate_options(options: &ChartOptions) -> ChartResult<()> {
    ensure(options.width.is_finite() && options.width > 0.0, || {
        format!("`width` must be a positive number, got {}", options.width)
    })?;
    ensure(options.height.is_finite() && options.height > 0.0, || {
        format!("`height` must be a positive number, got {}", options.height)
    })?;
    ensure(!options.container.trim().is_empty(), || {
        "`container` is missing".to_owned()
    })?;
    ensure(!options.valuesy.is_empty(), || {
        "`valuesy` must hold at least one series".to_owned()
    })?;

    let series_count = options.valuesy.len();
    if let Some(colors) = &options.colors {
        ensure(colors.len() == series_count, || {
            format!(
                "`colors` has {} entries for {series_count} series",
                colors.len()
            )
        })?;
    }
    if let Some(shade_colors) = options.shade_colors.as_ref().filter(|_| options.shades) {
        ensure(shade_colors.len() == series_count, || {
            format!(
                "`shade_colors` has {} entries for {series_count} series",
                shade_colors.len()
            )
        })?;
    }

    let expected_len = options.valuesy[0].len();
    ensure(expected_len > 0, || "series must not be empty".to_owned())?;
    for (index, series) in options.valuesy.iter().enumerate() {
        ensure(series.len() == expected_len, || {
            format!(
                "series {index} has {} values, expected {expected_len}",
                series.len()
            )
        })?;
    }

    ensure(options.padding.is_finite() && options.padding >= 0.0, || {
        format!("`padding` must be finite and >= 0, got {}", options.padding)
    })?;
    if let Some(segments) = options.segments {
        ensure(segments > 0, || "`segments` must be positive".to_owned())?;
    }
    for (name, value) in [
        ("top_value", options.top_value),
        ("bottom_value", options.bottom_value),
    ] {
        if let Some(value) = value {
            ensure(value.is_finite(), || format!("`{name}` must be finite"))?;
        }
    }

    Ok(())
}
