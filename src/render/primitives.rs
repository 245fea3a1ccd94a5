use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS-like string (`#rrggbb`, `#rrggbbaa`) and parsed from
/// hex notation or a small set of named colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Hex notation, with an alpha byte only when the color is translucent.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = [self.red, self.green, self.blue, self.alpha].map(channel_to_u8);
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::RED,
        "green" => Color::from_rgb8(0, 128, 0),
        "blue" => Color::from_rgb8(0, 0, 255),
        "gray" | "grey" => Color::from_rgb8(128, 128, 128),
        "orange" => Color::from_rgb8(255, 165, 0),
        "yellow" => Color::from_rgb8(255, 255, 0),
        "purple" => Color::from_rgb8(128, 0, 128),
        "transparent" => Color::rgba(0.0, 0.0, 0.0, 0.0),
        _ => return None,
    };
    Some(color)
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Some(color) = named_color(&trimmed.to_ascii_lowercase()) {
            return Ok(color);
        }

        let invalid = || ChartError::InvalidData(format!("unsupported color `{input}`"));
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_owned(),
            _ => return Err(invalid()),
        };
        let mut channels = [255u8; 4];
        for (slot, index) in channels.iter_mut().zip((0..expanded.len()).step_by(2)) {
            *slot = u8::from_str_radix(&expanded[index..index + 2], 16).map_err(|_| invalid())?;
        }

        let [r, g, b, a] = channels;
        Ok(Self::from_rgb8(r, g, b).with_alpha(f64::from(a) / 255.0))
    }
}

impl Color {
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Fill swap applied while the pointer hovers a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverFill {
    pub enter: Color,
    pub leave: Color,
}

/// Draw command for one circle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Option<Color>,
    pub stroke: Color,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub hover: Option<HoverFill>,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, stroke: Color, stroke_width: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill: None,
            stroke,
            stroke_width,
            stroke_opacity: 1.0,
            hover: None,
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_stroke_opacity(mut self, stroke_opacity: f64) -> Self {
        self.stroke_opacity = stroke_opacity;
        self
    }

    #[must_use]
    pub const fn with_hover(mut self, hover: HoverFill) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.stroke_opacity) {
            return Err(ChartError::InvalidData(
                "circle stroke opacity must be in [0, 1]".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(hover) = self.hover {
            hover.enter.validate()?;
            hover.leave.validate()?;
        }
        self.stroke.validate()
    }
}

/// Draw command for an SVG-style path (`M`, `L`, `Z` commands).
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub data: String,
    pub fill: Option<Color>,
    pub fill_opacity: f64,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    /// Stroked, unfilled path.
    #[must_use]
    pub fn stroked(data: impl Into<String>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            data: data.into(),
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    /// Filled path without outline.
    #[must_use]
    pub fn filled(data: impl Into<String>, fill: Color, fill_opacity: f64) -> Self {
        Self {
            data: data.into(),
            fill: Some(fill),
            fill_opacity,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.data.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "path data must not be empty".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ChartError::InvalidData(
                "path fill opacity must be in [0, 1]".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "path stroke width must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_weight: FontWeight,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        font_weight: FontWeight,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            font_weight,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{CirclePrimitive, Color, PathPrimitive};

    #[test]
    fn color_parses_hex_and_names() {
        assert_eq!("black".parse::<Color>().expect("named"), Color::BLACK);
        assert_eq!("#fff".parse::<Color>().expect("short hex"), Color::WHITE);
        assert_eq!(
            "#cccccc".parse::<Color>().expect("long hex"),
            Color::from_rgb8(0xcc, 0xcc, 0xcc)
        );

        let translucent = "#ff000080".parse::<Color>().expect("hex with alpha");
        assert!((translucent.alpha - 128.0 / 255.0).abs() <= 1e-9);
        assert_eq!(translucent.to_hex(), "#ff000080");
    }

    #[test]
    fn color_rejects_unknown_notation() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzz".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn color_serializes_as_string() {
        let json = serde_json::to_string(&Color::RED).expect("serialize");
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str("\"red\"").expect("deserialize");
        assert_eq!(back, Color::RED);
    }

    #[test]
    fn primitives_reject_non_finite_geometry() {
        let circle = CirclePrimitive::new(f64::NAN, 1.0, 4.0, Color::BLACK, 3.0);
        assert!(circle.validate().is_err());

        let path = PathPrimitive::stroked("", Color::BLACK, 1.0);
        assert!(path.validate().is_err());
    }
}
