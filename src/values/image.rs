//! `<image>` values: URLs and linear gradients.

use super::{
    Angle, Color, LengthPercentage, NamedColor, ToCss, Url, enum_property, write_comma_separated,
};
use crate::error::{Error, Result};

enum_property! {
    /// `to <side-or-corner>` gradient directions.
    pub enum GradientSide {
        ToTop => "to top",
        ToRight => "to right",
        ToBottom => "to bottom",
        ToLeft => "to left",
        ToTopLeft => "to top left",
        ToTopRight => "to top right",
        ToBottomLeft => "to bottom left",
        ToBottomRight => "to bottom right",
    }
}

/// Direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientDirection {
    Angle(Angle),
    Side(GradientSide),
}

impl From<Angle> for GradientDirection {
    fn from(angle: Angle) -> Self {
        GradientDirection::Angle(angle)
    }
}

impl From<GradientSide> for GradientDirection {
    fn from(side: GradientSide) -> Self {
        GradientDirection::Side(side)
    }
}

impl ToCss for GradientDirection {
    fn to_css(&self, buf: &mut String) {
        match self {
            GradientDirection::Angle(angle) => angle.to_css(buf),
            GradientDirection::Side(side) => side.to_css(buf),
        }
    }
}

/// `<color> [<length-percentage>]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Color,
    pub position: Option<LengthPercentage>,
}

impl ColorStop {
    pub fn new(color: impl Into<Color>) -> Self {
        ColorStop {
            color: color.into(),
            position: None,
        }
    }

    pub fn at(self, position: impl Into<LengthPercentage>) -> Self {
        ColorStop {
            position: Some(position.into()),
            ..self
        }
    }
}

impl From<Color> for ColorStop {
    fn from(color: Color) -> Self {
        ColorStop::new(color)
    }
}

impl From<NamedColor> for ColorStop {
    fn from(color: NamedColor) -> Self {
        ColorStop::new(color)
    }
}

impl ToCss for ColorStop {
    fn to_css(&self, buf: &mut String) {
        self.color.to_css(buf);
        if let Some(position) = &self.position {
            buf.push(' ');
            position.to_css(buf);
        }
    }
}

/// `linear-gradient()` or `repeating-linear-gradient()`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    repeating: bool,
    direction: Option<GradientDirection>,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// A gradient needs at least two color stops.
    pub fn new<S: Into<ColorStop>>(stops: impl IntoIterator<Item = S>) -> Result<Self> {
        let stops: Vec<ColorStop> = stops.into_iter().map(Into::into).collect();
        if stops.len() < 2 {
            return Err(Error::TooSmall {
                what: "linear-gradient() color stops",
                value: stops.len() as i64,
                min: 2,
            });
        }
        Ok(LinearGradient {
            repeating: false,
            direction: None,
            stops,
        })
    }

    pub fn direction(self, direction: impl Into<GradientDirection>) -> Self {
        LinearGradient {
            direction: Some(direction.into()),
            ..self
        }
    }

    pub fn repeating(self) -> Self {
        LinearGradient {
            repeating: true,
            ..self
        }
    }
}

impl ToCss for LinearGradient {
    fn to_css(&self, buf: &mut String) {
        if self.repeating {
            buf.push_str("repeating-");
        }
        buf.push_str("linear-gradient(");
        if let Some(direction) = &self.direction {
            direction.to_css(buf);
            buf.push_str(", ");
        }
        write_comma_separated(buf, &self.stops);
        buf.push(')');
    }
}

/// `<image>`, plus the `none` keyword accepted by image-valued properties.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    None,
    Url(Url),
    LinearGradient(LinearGradient),
}

impl From<Url> for Image {
    fn from(url: Url) -> Self {
        Image::Url(url)
    }
}

impl From<LinearGradient> for Image {
    fn from(gradient: LinearGradient) -> Self {
        Image::LinearGradient(gradient)
    }
}

impl ToCss for Image {
    fn to_css(&self, buf: &mut String) {
        match self {
            Image::None => buf.push_str("none"),
            Image::Url(url) => url.to_css(buf),
            Image::LinearGradient(gradient) => gradient.to_css(buf),
        }
    }
}
