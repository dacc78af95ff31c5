//! Border properties: colors, styles, widths, radii, spacing and collapse.
//!
//! <https://drafts.csswg.org/css-backgrounds-3/#borders>

use super::{keyword_property, value_property};
use crate::error::Result;
use crate::values::{
    BorderSide, Color, Length, LengthPercentage, LineStyle, LineWidth, NonNegative, Rect, ToCss,
};

value_property! {
    /// `border-color`
    pub BorderColor: "border-color" => Rect<Color>;
    /// `border-style`
    pub BorderStyle: "border-style" => Rect<LineStyle>;
    /// `border-width`
    pub BorderWidth: "border-width" => Rect<LineWidth>;

    pub BorderTopColor: "border-top-color" => Color;
    pub BorderRightColor: "border-right-color" => Color;
    pub BorderBottomColor: "border-bottom-color" => Color;
    pub BorderLeftColor: "border-left-color" => Color;

    pub BorderTopStyle: "border-top-style" => LineStyle;
    pub BorderRightStyle: "border-right-style" => LineStyle;
    pub BorderBottomStyle: "border-bottom-style" => LineStyle;
    pub BorderLeftStyle: "border-left-style" => LineStyle;

    pub BorderTopWidth: "border-top-width" => LineWidth;
    pub BorderRightWidth: "border-right-width" => LineWidth;
    pub BorderBottomWidth: "border-bottom-width" => LineWidth;
    pub BorderLeftWidth: "border-left-width" => LineWidth;

    /// `border`
    pub Border: "border" => BorderSide;
    pub BorderTop: "border-top" => BorderSide;
    pub BorderRight: "border-right" => BorderSide;
    pub BorderBottom: "border-bottom" => BorderSide;
    pub BorderLeft: "border-left" => BorderSide;

    /// `border-radius` with circular corners, in `top-left top-right
    /// bottom-right bottom-left` order.
    pub BorderRadius: "border-radius" => Rect<NonNegative<LengthPercentage>>;
    pub BorderTopLeftRadius: "border-top-left-radius" => NonNegative<LengthPercentage>;
    pub BorderTopRightRadius: "border-top-right-radius" => NonNegative<LengthPercentage>;
    pub BorderBottomRightRadius: "border-bottom-right-radius" => NonNegative<LengthPercentage>;
    pub BorderBottomLeftRadius: "border-bottom-left-radius" => NonNegative<LengthPercentage>;

    /// `border-spacing`
    pub BorderSpacing: "border-spacing" => Spacing;
}

keyword_property! {
    /// `border-collapse`
    pub enum BorderCollapse: "border-collapse" {
        Separate => "separate",
        Collapse => "collapse",
    }
}

impl BorderColor {
    /// One color per side, in `top right bottom left` order.
    pub fn sides(
        top: impl Into<Color>,
        right: impl Into<Color>,
        bottom: impl Into<Color>,
        left: impl Into<Color>,
    ) -> Self {
        BorderColor::Value(Rect::new(top.into(), right.into(), bottom.into(), left.into()))
    }

    pub fn all(color: impl Into<Color>) -> Self {
        BorderColor::Value(Rect::all(color.into()))
    }
}

impl BorderStyle {
    pub fn all(style: LineStyle) -> Self {
        BorderStyle::Value(Rect::all(style))
    }
}

impl BorderWidth {
    pub fn all(width: LineWidth) -> Self {
        BorderWidth::Value(Rect::all(width))
    }

    pub fn px(value: f32) -> Result<Self> {
        Ok(BorderWidth::all(LineWidth::px(value)?))
    }
}

impl BorderRadius {
    /// The same radius on every corner.
    pub fn all(radius: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(BorderRadius::Value(Rect::all(NonNegative::length_percentage(
            radius,
        )?)))
    }

    /// One radius per corner, starting top-left and going clockwise.
    pub fn corners(
        top_left: impl Into<LengthPercentage>,
        top_right: impl Into<LengthPercentage>,
        bottom_right: impl Into<LengthPercentage>,
        bottom_left: impl Into<LengthPercentage>,
    ) -> Result<Self> {
        Ok(BorderRadius::Value(Rect::new(
            NonNegative::length_percentage(top_left)?,
            NonNegative::length_percentage(top_right)?,
            NonNegative::length_percentage(bottom_right)?,
            NonNegative::length_percentage(bottom_left)?,
        )))
    }
}

/// `<length [0,∞]> <length [0,∞]>?`, the `border-spacing` value.
///
/// A missing vertical spacing means both directions share the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub horizontal: NonNegative<Length>,
    pub vertical: Option<NonNegative<Length>>,
}

impl Spacing {
    pub fn new(horizontal: Length, vertical: Option<Length>) -> Result<Self> {
        Ok(Spacing {
            horizontal: NonNegative::new(horizontal)?,
            vertical: vertical.map(NonNegative::new).transpose()?,
        })
    }
}

impl ToCss for Spacing {
    fn to_css(&self, buf: &mut String) {
        self.horizontal.to_css(buf);
        if let Some(vertical) = &self.vertical {
            buf.push(' ');
            vertical.to_css(buf);
        }
    }
}

impl BorderSpacing {
    /// `0px`
    pub fn zero() -> Self {
        BorderSpacing::Value(Spacing {
            horizontal: NonNegative::<Length>::zero(),
            vertical: None,
        })
    }

    pub fn length(length: Length) -> Result<Self> {
        Ok(BorderSpacing::Value(Spacing::new(length, None)?))
    }

    pub fn lengths(horizontal: Length, vertical: Length) -> Result<Self> {
        Ok(BorderSpacing::Value(Spacing::new(horizontal, Some(vertical))?))
    }
}
