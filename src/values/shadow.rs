//! Shadows for `box-shadow` and `text-shadow`.

use super::{Color, Length, NonNegative, ToCss, write_comma_separated};
use crate::error::Result;

/// One `box-shadow` layer: `[inset] <x> <y> [<blur> [<spread>]] [<color>]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub inset: bool,
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur: Option<NonNegative<Length>>,
    pub spread: Option<Length>,
    pub color: Option<Color>,
}

impl Shadow {
    pub fn new(offset_x: Length, offset_y: Length) -> Self {
        Shadow {
            inset: false,
            offset_x,
            offset_y,
            blur: None,
            spread: None,
            color: None,
        }
    }

    /// Set the blur radius, which must not be negative.
    pub fn blur(self, radius: Length) -> Result<Self> {
        Ok(Shadow {
            blur: Some(NonNegative::new(radius)?),
            ..self
        })
    }

    pub fn spread(self, spread: Length) -> Self {
        Shadow {
            spread: Some(spread),
            ..self
        }
    }

    pub fn color(self, color: impl Into<Color>) -> Self {
        Shadow {
            color: Some(color.into()),
            ..self
        }
    }

    pub fn inset(self) -> Self {
        Shadow {
            inset: true,
            ..self
        }
    }
}

impl ToCss for Shadow {
    fn to_css(&self, buf: &mut String) {
        if self.inset {
            buf.push_str("inset ");
        }
        self.offset_x.to_css(buf);
        buf.push(' ');
        self.offset_y.to_css(buf);

        match (&self.blur, &self.spread) {
            (Some(blur), spread) => {
                buf.push(' ');
                blur.to_css(buf);
                if let Some(spread) = spread {
                    buf.push(' ');
                    spread.to_css(buf);
                }
            }
            // spread needs a blur before it
            (None, Some(spread)) => {
                buf.push(' ');
                Length::zero().to_css(buf);
                buf.push(' ');
                spread.to_css(buf);
            }
            (None, None) => {}
        }

        if let Some(color) = &self.color {
            buf.push(' ');
            color.to_css(buf);
        }
    }
}

/// One `text-shadow` layer: `<x> <y> [<blur>] [<color>]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextShadow {
    pub offset_x: Length,
    pub offset_y: Length,
    pub blur: Option<NonNegative<Length>>,
    pub color: Option<Color>,
}

impl TextShadow {
    pub fn new(offset_x: Length, offset_y: Length) -> Self {
        TextShadow {
            offset_x,
            offset_y,
            blur: None,
            color: None,
        }
    }

    pub fn blur(self, radius: Length) -> Result<Self> {
        Ok(TextShadow {
            blur: Some(NonNegative::new(radius)?),
            ..self
        })
    }

    pub fn color(self, color: impl Into<Color>) -> Self {
        TextShadow {
            color: Some(color.into()),
            ..self
        }
    }
}

impl ToCss for TextShadow {
    fn to_css(&self, buf: &mut String) {
        self.offset_x.to_css(buf);
        buf.push(' ');
        self.offset_y.to_css(buf);
        if let Some(blur) = &self.blur {
            buf.push(' ');
            blur.to_css(buf);
        }
        if let Some(color) = &self.color {
            buf.push(' ');
            color.to_css(buf);
        }
    }
}

/// `none | <shadow>#`. An empty list serializes as `none`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowList<S>(Vec<S>);

impl<S> ShadowList<S> {
    pub fn none() -> Self {
        ShadowList(Vec::new())
    }

    pub fn new(shadows: impl IntoIterator<Item = S>) -> Self {
        ShadowList(shadows.into_iter().collect())
    }

    pub fn shadows(&self) -> &[S] {
        &self.0
    }
}

impl<S> From<S> for ShadowList<S> {
    fn from(shadow: S) -> Self {
        ShadowList(vec![shadow])
    }
}

impl<S: ToCss> ToCss for ShadowList<S> {
    fn to_css(&self, buf: &mut String) {
        if self.0.is_empty() {
            buf.push_str("none");
        } else {
            write_comma_separated(buf, &self.0);
        }
    }
}
