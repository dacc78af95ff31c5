//! Line styles and widths shared by `border-*`, `outline-*` and `column-rule-*`.

use super::{Color, Length, NonNegative, ToCss, enum_property};
use crate::error::Result;

enum_property! {
    /// `<line-style>`
    pub enum LineStyle {
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

/// `<line-width>`: `thin | medium | thick | <length [0,∞]>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineWidth {
    Thin,
    Medium,
    Thick,
    Length(NonNegative<Length>),
}

impl LineWidth {
    pub fn length(length: Length) -> Result<Self> {
        Ok(LineWidth::Length(NonNegative::new(length)?))
    }

    pub fn px(value: f32) -> Result<Self> {
        LineWidth::length(Length::px(value))
    }
}

impl ToCss for LineWidth {
    fn to_css(&self, buf: &mut String) {
        match self {
            LineWidth::Thin => buf.push_str("thin"),
            LineWidth::Medium => buf.push_str("medium"),
            LineWidth::Thick => buf.push_str("thick"),
            LineWidth::Length(length) => length.to_css(buf),
        }
    }
}

/// `<line-width> || <line-style> || <color>`, the value of `border`,
/// `border-top`, `outline` and friends.
///
/// Components are written in width, style, color order. A side with no
/// component serializes as `none`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderSide {
    pub width: Option<LineWidth>,
    pub style: Option<LineStyle>,
    pub color: Option<Color>,
}

impl BorderSide {
    pub fn new() -> Self {
        BorderSide::default()
    }

    pub fn width(self, width: LineWidth) -> Self {
        BorderSide {
            width: Some(width),
            ..self
        }
    }

    pub fn style(self, style: LineStyle) -> Self {
        BorderSide {
            style: Some(style),
            ..self
        }
    }

    pub fn color(self, color: impl Into<Color>) -> Self {
        BorderSide {
            color: Some(color.into()),
            ..self
        }
    }
}

impl ToCss for BorderSide {
    fn to_css(&self, buf: &mut String) {
        let start = buf.len();
        let separate = |buf: &mut String| {
            if buf.len() > start {
                buf.push(' ');
            }
        };
        if let Some(width) = &self.width {
            width.to_css(buf);
        }
        if let Some(style) = &self.style {
            separate(buf);
            style.to_css(buf);
        }
        if let Some(color) = &self.color {
            separate(buf);
            color.to_css(buf);
        }
        if buf.len() == start {
            buf.push_str("none");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::NamedColor;

    #[test]
    fn test_line_width() {
        assert_eq!(LineWidth::Thick.to_css_string(), "thick");
        assert_eq!(LineWidth::px(5.0).unwrap().to_css_string(), "5px");
        assert!(LineWidth::px(-5.0).is_err());
    }

    #[test]
    fn test_border_side() {
        let side = BorderSide::new()
            .width(LineWidth::px(1.0).unwrap())
            .style(LineStyle::Solid)
            .color(NamedColor::Red);
        assert_eq!(side.to_css_string(), "1px solid red");
        assert_eq!(
            BorderSide::new().style(LineStyle::Dashed).color(Color::CurrentColor).to_css_string(),
            "dashed currentcolor"
        );
        assert_eq!(BorderSide::new().to_css_string(), "none");
    }

    #[test]
    fn test_border_side_appends_to_existing_buffer() {
        let mut buf = String::from("border:");
        BorderSide::new().style(LineStyle::Solid).to_css(&mut buf);
        assert_eq!(buf, "border:solid");
    }
}
