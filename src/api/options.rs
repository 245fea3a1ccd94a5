use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartStyle;

/// Caller-supplied chart description.
///
/// Field names follow the JSON form accepted by `from_json_str`. Each inner
/// `valuesy` sequence is one series; `null` samples are drawn as `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub container: String,
    pub valuesy: Vec<Vec<Option<f64>>>,
    #[serde(default)]
    pub padding: f64,
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    /// Number of horizontal reference lines; 3 when unset.
    #[serde(default)]
    pub segments: Option<u32>,
    #[serde(default)]
    pub shades: bool,
    #[serde(default)]
    pub shade_colors: Option<Vec<Color>>,
    #[serde(default)]
    pub top_value: Option<f64>,
    #[serde(default)]
    pub bottom_value: Option<f64>,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartOptions {
    /// Creates options without series, padding or overrides.
    #[must_use]
    pub fn new(container: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            container: container.into(),
            valuesy: Vec::new(),
            padding: 0.0,
            colors: None,
            segments: None,
            shades: false,
            shade_colors: None,
            top_value: None,
            bottom_value: None,
            style: ChartStyle::default(),
        }
    }

    /// Appends one fully populated series.
    #[must_use]
    pub fn with_series<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        self.valuesy.push(values.into_iter().map(Some).collect());
        self
    }

    /// Appends one series that may contain missing samples.
    #[must_use]
    pub fn with_sparse_series<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        self.valuesy.push(values.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }

    #[must_use]
    pub fn with_shades(mut self, shades: bool) -> Self {
        self.shades = shades;
        self
    }

    #[must_use]
    pub fn with_shade_colors(mut self, shade_colors: Vec<Color>) -> Self {
        self.shade_colors = Some(shade_colors);
        self
    }

    /// Pins the vertical range instead of deriving it from the data.
    #[must_use]
    pub fn with_value_range(mut self, bottom_value: f64, top_value: f64) -> Self {
        self.bottom_value = Some(bottom_value);
        self.top_value = Some(top_value);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.valuesy.len()
    }

    /// Parses options from JSON. Missing required fields are option errors.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to parse options json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options json: {e}")))
    }
}
