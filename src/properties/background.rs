//! Background properties.
//!
//! <https://drafts.csswg.org/css-backgrounds-3/#backgrounds>

use super::{keyword_property, value_property};
use crate::error::Result;
use crate::values::{Color, Image, LengthPercentage, NonNegative, Position, ToCss};

value_property! {
    /// `background-color`
    pub BackgroundColor: "background-color" => Color;

    /// `background-image`, one layer.
    pub BackgroundImage: "background-image" => Image;

    /// `background-position`
    pub BackgroundPosition: "background-position" => Position;

    /// `background-size`
    pub BackgroundSize: "background-size" => BackgroundSizeValue;
}

keyword_property! {
    /// `background-repeat`
    pub enum BackgroundRepeat: "background-repeat" {
        Repeat => "repeat",
        RepeatX => "repeat-x",
        RepeatY => "repeat-y",
        NoRepeat => "no-repeat",
        Space => "space",
        Round => "round",
    }
}

keyword_property! {
    /// `background-attachment`
    pub enum BackgroundAttachment: "background-attachment" {
        Scroll => "scroll",
        Fixed => "fixed",
        Local => "local",
    }
}

keyword_property! {
    /// `background-clip`
    pub enum BackgroundClip: "background-clip" {
        BorderBox => "border-box",
        PaddingBox => "padding-box",
        ContentBox => "content-box",
        Text => "text",
    }
}

keyword_property! {
    /// `background-origin`
    pub enum BackgroundOrigin: "background-origin" {
        BorderBox => "border-box",
        PaddingBox => "padding-box",
        ContentBox => "content-box",
    }
}

/// `cover | contain | [<length-percentage [0,∞]> | auto]{1,2}`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundSizeValue {
    Cover,
    Contain,
    Explicit {
        width: SizeComponent,
        height: Option<SizeComponent>,
    },
}

/// One side of an explicit background size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeComponent {
    Auto,
    LengthPercentage(NonNegative<LengthPercentage>),
}

impl SizeComponent {
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(SizeComponent::LengthPercentage(NonNegative::length_percentage(value)?))
    }
}

impl ToCss for SizeComponent {
    fn to_css(&self, buf: &mut String) {
        match self {
            SizeComponent::Auto => buf.push_str("auto"),
            SizeComponent::LengthPercentage(value) => value.to_css(buf),
        }
    }
}

impl BackgroundSizeValue {
    /// `width [height]`. A `None` height means `auto`.
    pub fn explicit(width: SizeComponent, height: Option<SizeComponent>) -> Self {
        BackgroundSizeValue::Explicit { width, height }
    }
}

impl ToCss for BackgroundSizeValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            BackgroundSizeValue::Cover => buf.push_str("cover"),
            BackgroundSizeValue::Contain => buf.push_str("contain"),
            BackgroundSizeValue::Explicit { width, height } => {
                width.to_css(buf);
                if let Some(height) = height {
                    buf.push(' ');
                    height.to_css(buf);
                }
            }
        }
    }
}

impl BackgroundSize {
    pub fn cover() -> Self {
        BackgroundSize::Value(BackgroundSizeValue::Cover)
    }

    pub fn contain() -> Self {
        BackgroundSize::Value(BackgroundSizeValue::Contain)
    }

    /// Both dimensions given. Fails for negative sizes.
    pub fn dimensions(
        width: impl Into<LengthPercentage>,
        height: impl Into<LengthPercentage>,
    ) -> Result<Self> {
        Ok(BackgroundSize::Value(BackgroundSizeValue::explicit(
            SizeComponent::length_percentage(width)?,
            Some(SizeComponent::length_percentage(height)?),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{GlobalKeyword, Property};
    use crate::values::{
        HorizontalKeyword, Length, LinearGradient, NamedColor, Percentage, Url, VerticalKeyword,
    };

    #[test]
    fn test_background_color() {
        let value = BackgroundColor::new(Color::rgba(255, 0, 0, 0.5));
        assert_eq!(
            value.declaration().to_css_string(),
            "background-color:rgba(255, 0, 0, 0.5)"
        );
        assert_eq!(value.name(), "background-color");
    }

    #[test]
    fn test_background_image() {
        assert_eq!(BackgroundImage::new(Image::None).to_css_string(), "none");
        assert_eq!(
            BackgroundImage::new(Url::new("bg.png")).to_css_string(),
            "url(\"bg.png\")"
        );
        let gradient = LinearGradient::new([NamedColor::Red, NamedColor::Blue]).unwrap();
        assert_eq!(
            BackgroundImage::new(gradient).to_css_string(),
            "linear-gradient(red, blue)"
        );
    }

    #[test]
    fn test_background_position() {
        let value = BackgroundPosition::new(Position::Keywords(
            HorizontalKeyword::Right,
            VerticalKeyword::Top,
        ));
        assert_eq!(value.to_css_string(), "right top");
    }

    #[test]
    fn test_background_size() {
        assert_eq!(BackgroundSize::cover().to_css_string(), "cover");
        assert_eq!(BackgroundSize::contain().to_css_string(), "contain");
        assert_eq!(
            BackgroundSize::dimensions(Length::px(100.0), Percentage::new(50.0))
                .unwrap()
                .to_css_string(),
            "100px 50%"
        );
        assert!(BackgroundSize::dimensions(Length::px(-1.0), Length::px(1.0)).is_err());
        assert_eq!(
            BackgroundSize::new(BackgroundSizeValue::explicit(SizeComponent::Auto, None))
                .to_css_string(),
            "auto"
        );
    }

    #[test]
    fn test_background_keywords() {
        assert_eq!(BackgroundRepeat::NoRepeat.to_css_string(), "no-repeat");
        assert_eq!(BackgroundAttachment::Fixed.to_css_string(), "fixed");
        assert_eq!(BackgroundClip::Text.to_css_string(), "text");
        assert_eq!(BackgroundOrigin::ContentBox.to_css_string(), "content-box");
        assert_eq!(
            BackgroundRepeat::global(GlobalKeyword::Inherit).to_css_string(),
            "inherit"
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(BackgroundColor::NAME, "background-color");
        assert_eq!(BackgroundImage::NAME, "background-image");
        assert_eq!(BackgroundPosition::NAME, "background-position");
        assert_eq!(BackgroundSize::NAME, "background-size");
        assert_eq!(BackgroundRepeat::NAME, "background-repeat");
        assert_eq!(BackgroundAttachment::NAME, "background-attachment");
        assert_eq!(BackgroundClip::NAME, "background-clip");
        assert_eq!(BackgroundOrigin::NAME, "background-origin");
    }
}
