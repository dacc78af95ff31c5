//! Box sizing values for `width`/`height` and their min/max variants.

use super::{LengthPercentage, NonNegative, ToCss};
use crate::error::Result;

/// `auto | <length-percentage [0,∞]> | min-content | max-content | fit-content | fit-content(<length-percentage>)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    Auto,
    LengthPercentage(NonNegative<LengthPercentage>),
    MinContent,
    MaxContent,
    FitContent,
    FitContentFunction(NonNegative<LengthPercentage>),
}

impl Size {
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(Size::LengthPercentage(NonNegative::length_percentage(value)?))
    }

    pub fn px(value: f32) -> Result<Self> {
        Size::length_percentage(LengthPercentage::px(value))
    }

    pub fn percent(value: f32) -> Result<Self> {
        Size::length_percentage(LengthPercentage::percent(value))
    }

    pub fn fit_content(limit: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(Size::FitContentFunction(NonNegative::length_percentage(limit)?))
    }
}

impl ToCss for Size {
    fn to_css(&self, buf: &mut String) {
        match self {
            Size::Auto => buf.push_str("auto"),
            Size::LengthPercentage(value) => value.to_css(buf),
            Size::MinContent => buf.push_str("min-content"),
            Size::MaxContent => buf.push_str("max-content"),
            Size::FitContent => buf.push_str("fit-content"),
            Size::FitContentFunction(limit) => write_fit_content(buf, limit),
        }
    }
}

/// `none | <length-percentage [0,∞]> | min-content | max-content | fit-content | fit-content(<length-percentage>)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxSize {
    None,
    LengthPercentage(NonNegative<LengthPercentage>),
    MinContent,
    MaxContent,
    FitContent,
    FitContentFunction(NonNegative<LengthPercentage>),
}

impl MaxSize {
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(MaxSize::LengthPercentage(NonNegative::length_percentage(
            value,
        )?))
    }

    pub fn px(value: f32) -> Result<Self> {
        MaxSize::length_percentage(LengthPercentage::px(value))
    }

    pub fn percent(value: f32) -> Result<Self> {
        MaxSize::length_percentage(LengthPercentage::percent(value))
    }
}

impl ToCss for MaxSize {
    fn to_css(&self, buf: &mut String) {
        match self {
            MaxSize::None => buf.push_str("none"),
            MaxSize::LengthPercentage(value) => value.to_css(buf),
            MaxSize::MinContent => buf.push_str("min-content"),
            MaxSize::MaxContent => buf.push_str("max-content"),
            MaxSize::FitContent => buf.push_str("fit-content"),
            MaxSize::FitContentFunction(limit) => write_fit_content(buf, limit),
        }
    }
}

fn write_fit_content(buf: &mut String, limit: &NonNegative<LengthPercentage>) {
    buf.push_str("fit-content(");
    limit.to_css(buf);
    buf.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Length;

    #[test]
    fn test_size() {
        assert_eq!(Size::Auto.to_css_string(), "auto");
        assert_eq!(Size::px(100.0).unwrap().to_css_string(), "100px");
        assert_eq!(Size::percent(50.0).unwrap().to_css_string(), "50%");
        assert_eq!(
            Size::fit_content(Length::em(20.0)).unwrap().to_css_string(),
            "fit-content(20em)"
        );
        assert_eq!(Size::MinContent.to_css_string(), "min-content");
    }

    #[test]
    fn test_size_rejects_negative() {
        assert!(Size::px(-1.0).is_err());
        assert!(MaxSize::percent(-10.0).is_err());
    }

    #[test]
    fn test_max_size() {
        assert_eq!(MaxSize::None.to_css_string(), "none");
        assert_eq!(MaxSize::px(960.0).unwrap().to_css_string(), "960px");
    }
}
