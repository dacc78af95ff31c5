//! Box model properties: margins, padding and sizing.
//!
//! <https://drafts.csswg.org/css-box-4/> and <https://drafts.csswg.org/css-sizing-3/>

use super::{keyword_property, value_property};
use crate::error::Result;
use crate::values::{
    LengthPercentage, LengthPercentageOrAuto, MaxSize, NonNegative, Rect, Size,
};

value_property! {
    /// `margin`
    pub Margin: "margin" => Rect<LengthPercentageOrAuto>;
    pub MarginTop: "margin-top" => LengthPercentageOrAuto;
    pub MarginRight: "margin-right" => LengthPercentageOrAuto;
    pub MarginBottom: "margin-bottom" => LengthPercentageOrAuto;
    pub MarginLeft: "margin-left" => LengthPercentageOrAuto;

    /// `padding`
    pub Padding: "padding" => Rect<NonNegative<LengthPercentage>>;
    pub PaddingTop: "padding-top" => NonNegative<LengthPercentage>;
    pub PaddingRight: "padding-right" => NonNegative<LengthPercentage>;
    pub PaddingBottom: "padding-bottom" => NonNegative<LengthPercentage>;
    pub PaddingLeft: "padding-left" => NonNegative<LengthPercentage>;

    pub Width: "width" => Size;
    pub Height: "height" => Size;
    pub MinWidth: "min-width" => Size;
    pub MinHeight: "min-height" => Size;
    pub MaxWidth: "max-width" => MaxSize;
    pub MaxHeight: "max-height" => MaxSize;
}

keyword_property! {
    /// `box-sizing`
    pub enum BoxSizing: "box-sizing" {
        ContentBox => "content-box",
        BorderBox => "border-box",
    }
}

impl Margin {
    /// The same margin on all four sides.
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Self {
        Margin::Value(Rect::all(LengthPercentageOrAuto::LengthPercentage(value.into())))
    }

    /// `margin: auto`
    pub fn auto() -> Self {
        Margin::Value(Rect::all(LengthPercentageOrAuto::Auto))
    }

    /// `vertical` for top and bottom, `horizontal` for left and right.
    pub fn symmetric(
        vertical: impl Into<LengthPercentageOrAuto>,
        horizontal: impl Into<LengthPercentageOrAuto>,
    ) -> Self {
        Margin::Value(Rect::symmetric(vertical.into(), horizontal.into()))
    }

    pub fn sides(
        top: impl Into<LengthPercentageOrAuto>,
        right: impl Into<LengthPercentageOrAuto>,
        bottom: impl Into<LengthPercentageOrAuto>,
        left: impl Into<LengthPercentageOrAuto>,
    ) -> Self {
        Margin::Value(Rect::new(top.into(), right.into(), bottom.into(), left.into()))
    }
}

impl Padding {
    /// The same padding on all four sides. Fails for negative input.
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(Padding::Value(Rect::all(NonNegative::length_percentage(value)?)))
    }

    pub fn symmetric(
        vertical: impl Into<LengthPercentage>,
        horizontal: impl Into<LengthPercentage>,
    ) -> Result<Self> {
        Ok(Padding::Value(Rect::symmetric(
            NonNegative::length_percentage(vertical)?,
            NonNegative::length_percentage(horizontal)?,
        )))
    }

    pub fn sides(
        top: impl Into<LengthPercentage>,
        right: impl Into<LengthPercentage>,
        bottom: impl Into<LengthPercentage>,
        left: impl Into<LengthPercentage>,
    ) -> Result<Self> {
        Ok(Padding::Value(Rect::new(
            NonNegative::length_percentage(top)?,
            NonNegative::length_percentage(right)?,
            NonNegative::length_percentage(bottom)?,
            NonNegative::length_percentage(left)?,
        )))
    }
}

impl Width {
    pub fn px(value: f32) -> Result<Self> {
        Ok(Width::Value(Size::px(value)?))
    }

    pub fn percent(value: f32) -> Result<Self> {
        Ok(Width::Value(Size::percent(value)?))
    }
}

impl Height {
    pub fn px(value: f32) -> Result<Self> {
        Ok(Height::Value(Size::px(value)?))
    }

    pub fn percent(value: f32) -> Result<Self> {
        Ok(Height::Value(Size::percent(value)?))
    }
}

impl MaxWidth {
    pub fn px(value: f32) -> Result<Self> {
        Ok(MaxWidth::Value(MaxSize::px(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::properties::Property;
    use crate::values::{Length, Percentage, ToCss};

    #[test]
    fn test_margin() {
        assert_eq!(
            Margin::length_percentage(Percentage::new(10.0)).to_css_string(),
            "10%"
        );
        assert_eq!(Margin::auto().to_css_string(), "auto");
        assert_eq!(
            Margin::symmetric(Length::px(0.0), LengthPercentageOrAuto::Auto).to_css_string(),
            "0px auto"
        );
        assert_eq!(
            Margin::sides(Length::px(1.0), Length::px(2.0), Length::px(3.0), Length::px(4.0))
                .to_css_string(),
            "1px 2px 3px 4px"
        );
        assert_eq!(MarginTop::new(Length::px(-8.0)).to_css_string(), "-8px");
    }

    #[test]
    fn test_padding_rejects_negative() {
        assert_eq!(
            Padding::length_percentage(Length::em(1.0)).unwrap().to_css_string(),
            "1em"
        );
        assert!(matches!(
            Padding::length_percentage(Length::px(-1.0)),
            Err(Error::Negative { .. })
        ));
        assert!(Padding::sides(Length::px(1.0), Length::px(1.0), Length::px(-1.0), Length::px(1.0)).is_err());
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Width::px(320.0).unwrap().to_css_string(), "320px");
        assert_eq!(Height::percent(100.0).unwrap().to_css_string(), "100%");
        assert_eq!(Width::new(Size::Auto).to_css_string(), "auto");
        assert_eq!(MinHeight::new(Size::MinContent).to_css_string(), "min-content");
        assert_eq!(MaxWidth::new(MaxSize::None).to_css_string(), "none");
        assert_eq!(
            MaxWidth::px(960.0).unwrap().declaration().to_css_string(),
            "max-width:960px"
        );
        assert!(Width::px(-1.0).is_err());
    }

    #[test]
    fn test_box_sizing() {
        assert_eq!(BoxSizing::BorderBox.to_css_string(), "border-box");
    }

    #[test]
    fn test_names() {
        assert_eq!(Margin::NAME, "margin");
        assert_eq!(MarginTop::NAME, "margin-top");
        assert_eq!(MarginRight::NAME, "margin-right");
        assert_eq!(MarginBottom::NAME, "margin-bottom");
        assert_eq!(MarginLeft::NAME, "margin-left");
        assert_eq!(Padding::NAME, "padding");
        assert_eq!(PaddingTop::NAME, "padding-top");
        assert_eq!(PaddingLeft::NAME, "padding-left");
        assert_eq!(Width::NAME, "width");
        assert_eq!(Height::NAME, "height");
        assert_eq!(MinWidth::NAME, "min-width");
        assert_eq!(MinHeight::NAME, "min-height");
        assert_eq!(MaxWidth::NAME, "max-width");
        assert_eq!(MaxHeight::NAME, "max-height");
        assert_eq!(BoxSizing::NAME, "box-sizing");
    }
}
