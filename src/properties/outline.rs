//! Outline properties.
//!
//! <https://drafts.csswg.org/css-ui-4/#outline-props>

use super::value_property;
use crate::error::Result;
use crate::values::{BorderSide, Color, Length, LineStyle, LineWidth};

value_property! {
    /// `outline`
    pub Outline: "outline" => BorderSide;
    /// `outline-color`
    pub OutlineColor: "outline-color" => Color;
    /// `outline-style`
    pub OutlineStyle: "outline-style" => LineStyle;
    /// `outline-width`
    pub OutlineWidth: "outline-width" => LineWidth;
    /// `outline-offset`
    pub OutlineOffset: "outline-offset" => Length;
}

impl OutlineWidth {
    pub fn thin() -> Self {
        OutlineWidth::Value(LineWidth::Thin)
    }

    pub fn medium() -> Self {
        OutlineWidth::Value(LineWidth::Medium)
    }

    pub fn thick() -> Self {
        OutlineWidth::Value(LineWidth::Thick)
    }

    /// A width in pixels. Fails for negative widths.
    pub fn px(value: f32) -> Result<Self> {
        Ok(OutlineWidth::Value(LineWidth::px(value)?))
    }
}

impl Outline {
    /// `outline: none`
    pub fn none() -> Self {
        Outline::Value(BorderSide::new().style(LineStyle::None))
    }
}
