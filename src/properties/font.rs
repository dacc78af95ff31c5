//! Font properties.
//!
//! <https://drafts.csswg.org/css-fonts-4/>

use super::{keyword_property, value_property};
use crate::error::{Error, Result};
use crate::values::{
    Angle, CssString, LengthPercentage, NonNegative, Percentage, ToCss, clamp_finite,
    enum_property, write_comma_separated, write_number,
};

value_property! {
    /// `font-family`
    pub FontFamily: "font-family" => FamilyList;
    /// `font-size`
    pub FontSize: "font-size" => FontSizeValue;
    /// `font-weight`
    pub FontWeight: "font-weight" => FontWeightValue;
    /// `font-style`
    pub FontStyle: "font-style" => FontStyleValue;
    /// `font-stretch`
    pub FontStretch: "font-stretch" => FontStretchValue;
}

keyword_property! {
    /// `font-variant-caps`
    pub enum FontVariantCaps: "font-variant-caps" {
        Normal => "normal",
        SmallCaps => "small-caps",
        AllSmallCaps => "all-small-caps",
        PetiteCaps => "petite-caps",
        AllPetiteCaps => "all-petite-caps",
        Unicase => "unicase",
        TitlingCaps => "titling-caps",
    }
}

keyword_property! {
    /// `font-kerning`
    pub enum FontKerning: "font-kerning" {
        Auto => "auto",
        Normal => "normal",
        None => "none",
    }
}

// ============================================================================
// Families
// ============================================================================

enum_property! {
    /// `<generic-family>`
    pub enum GenericFamily {
        Serif => "serif",
        SansSerif => "sans-serif",
        Monospace => "monospace",
        Cursive => "cursive",
        Fantasy => "fantasy",
        SystemUi => "system-ui",
        UiSerif => "ui-serif",
        UiSansSerif => "ui-sans-serif",
        UiMonospace => "ui-monospace",
        UiRounded => "ui-rounded",
        Math => "math",
        Emoji => "emoji",
        Fangsong => "fangsong",
    }
}

/// A font family: a generic family keyword or a quoted family name.
#[derive(Debug, Clone, PartialEq)]
pub enum FamilyName {
    Generic(GenericFamily),
    Named(CssString),
}

impl FamilyName {
    pub fn named(name: impl Into<String>) -> Self {
        FamilyName::Named(CssString::new(name))
    }
}

impl From<GenericFamily> for FamilyName {
    fn from(generic: GenericFamily) -> Self {
        FamilyName::Generic(generic)
    }
}

impl From<&str> for FamilyName {
    fn from(name: &str) -> Self {
        FamilyName::named(name)
    }
}

impl ToCss for FamilyName {
    fn to_css(&self, buf: &mut String) {
        match self {
            FamilyName::Generic(generic) => generic.to_css(buf),
            FamilyName::Named(name) => name.to_css(buf),
        }
    }
}

/// A non-empty, comma-separated family list in fallback order.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyList(Vec<FamilyName>);

impl FamilyList {
    pub fn new<F: Into<FamilyName>>(families: impl IntoIterator<Item = F>) -> Result<Self> {
        let families: Vec<FamilyName> = families.into_iter().map(Into::into).collect();
        if families.is_empty() {
            return Err(Error::EmptyList("font-family"));
        }
        Ok(FamilyList(families))
    }

    pub fn families(&self) -> &[FamilyName] {
        &self.0
    }
}

impl From<FamilyName> for FamilyList {
    fn from(family: FamilyName) -> Self {
        FamilyList(vec![family])
    }
}

impl From<GenericFamily> for FamilyList {
    fn from(generic: GenericFamily) -> Self {
        FamilyList(vec![generic.into()])
    }
}

impl ToCss for FamilyList {
    fn to_css(&self, buf: &mut String) {
        write_comma_separated(buf, &self.0);
    }
}

impl FontFamily {
    pub fn families<F: Into<FamilyName>>(families: impl IntoIterator<Item = F>) -> Result<Self> {
        Ok(FontFamily::Value(FamilyList::new(families)?))
    }
}

// ============================================================================
// Size
// ============================================================================

enum_property! {
    /// `<absolute-size>`
    pub enum AbsoluteSize {
        XxSmall => "xx-small",
        XSmall => "x-small",
        Small => "small",
        Medium => "medium",
        Large => "large",
        XLarge => "x-large",
        XxLarge => "xx-large",
        XxxLarge => "xxx-large",
    }
}

enum_property! {
    /// `<relative-size>`
    pub enum RelativeSize {
        Larger => "larger",
        Smaller => "smaller",
    }
}

/// `<absolute-size> | <relative-size> | <length-percentage [0,∞]> | math`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSizeValue {
    Absolute(AbsoluteSize),
    Relative(RelativeSize),
    LengthPercentage(NonNegative<LengthPercentage>),
    Math,
}

impl From<AbsoluteSize> for FontSizeValue {
    fn from(size: AbsoluteSize) -> Self {
        FontSizeValue::Absolute(size)
    }
}

impl From<RelativeSize> for FontSizeValue {
    fn from(size: RelativeSize) -> Self {
        FontSizeValue::Relative(size)
    }
}

impl ToCss for FontSizeValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            FontSizeValue::Absolute(size) => size.to_css(buf),
            FontSizeValue::Relative(size) => size.to_css(buf),
            FontSizeValue::LengthPercentage(value) => value.to_css(buf),
            FontSizeValue::Math => buf.push_str("math"),
        }
    }
}

impl FontSize {
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(FontSize::Value(FontSizeValue::LengthPercentage(
            NonNegative::length_percentage(value)?,
        )))
    }

    pub fn px(value: f32) -> Result<Self> {
        FontSize::length_percentage(LengthPercentage::px(value))
    }
}

// ============================================================================
// Weight
// ============================================================================

/// A numeric weight in `[1, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontWeightNumber(f32);

impl FontWeightNumber {
    pub const MIN: f32 = 1.0;
    pub const MAX: f32 = 1000.0;

    /// Clamps into `[1, 1000]`; NaN becomes the regular weight, 400.
    pub fn new(weight: f32) -> Self {
        FontWeightNumber(clamp_finite("font weight", weight, Self::MIN, Self::MAX, 400.0))
    }

    pub fn get(&self) -> f32 {
        self.0
    }
}

impl ToCss for FontWeightNumber {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.0);
    }
}

/// `normal | bold | bolder | lighter | <number [1,1000]>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontWeightValue {
    Normal,
    Bold,
    Bolder,
    Lighter,
    /// Built with [`FontWeightValue::absolute`].
    Absolute(FontWeightNumber),
}

impl FontWeightValue {
    /// A numeric weight, clamped into `[1, 1000]`.
    pub fn absolute(weight: f32) -> Self {
        FontWeightValue::Absolute(FontWeightNumber::new(weight))
    }
}

impl From<u16> for FontWeightValue {
    fn from(weight: u16) -> Self {
        FontWeightValue::absolute(weight.into())
    }
}

impl ToCss for FontWeightValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            FontWeightValue::Normal => buf.push_str("normal"),
            FontWeightValue::Bold => buf.push_str("bold"),
            FontWeightValue::Bolder => buf.push_str("bolder"),
            FontWeightValue::Lighter => buf.push_str("lighter"),
            FontWeightValue::Absolute(weight) => weight.to_css(buf),
        }
    }
}

impl FontWeight {
    pub fn bold() -> Self {
        FontWeight::Value(FontWeightValue::Bold)
    }

    pub fn normal() -> Self {
        FontWeight::Value(FontWeightValue::Normal)
    }
}

// ============================================================================
// Style and stretch
// ============================================================================

/// `normal | italic | oblique <angle>?`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontStyleValue {
    Normal,
    Italic,
    Oblique(Option<Angle>),
}

impl ToCss for FontStyleValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            FontStyleValue::Normal => buf.push_str("normal"),
            FontStyleValue::Italic => buf.push_str("italic"),
            FontStyleValue::Oblique(angle) => {
                buf.push_str("oblique");
                if let Some(angle) = angle {
                    buf.push(' ');
                    angle.to_css(buf);
                }
            }
        }
    }
}

enum_property! {
    /// Keyword widths of `font-stretch`.
    pub enum StretchKeyword {
        UltraCondensed => "ultra-condensed",
        ExtraCondensed => "extra-condensed",
        Condensed => "condensed",
        SemiCondensed => "semi-condensed",
        Normal => "normal",
        SemiExpanded => "semi-expanded",
        Expanded => "expanded",
        ExtraExpanded => "extra-expanded",
        UltraExpanded => "ultra-expanded",
    }
}

/// `<font-stretch-absolute>`: a keyword or a non-negative percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontStretchValue {
    Keyword(StretchKeyword),
    Percentage(NonNegative<Percentage>),
}

impl From<StretchKeyword> for FontStretchValue {
    fn from(keyword: StretchKeyword) -> Self {
        FontStretchValue::Keyword(keyword)
    }
}

impl ToCss for FontStretchValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            FontStretchValue::Keyword(keyword) => keyword.to_css(buf),
            FontStretchValue::Percentage(value) => value.to_css(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;
    use crate::values::Length;

    #[test]
    fn test_font_family() {
        let family = FontFamily::families([
            FamilyName::named("Helvetica Neue"),
            FamilyName::from("Arial"),
            GenericFamily::SansSerif.into(),
        ])
        .unwrap();
        assert_eq!(
            family.declaration().to_css_string(),
            "font-family:\"Helvetica Neue\", \"Arial\", sans-serif"
        );
        assert_eq!(
            FontFamily::new(GenericFamily::Monospace).to_css_string(),
            "monospace"
        );
        assert!(FontFamily::families(Vec::<FamilyName>::new()).is_err());
    }

    #[test]
    fn test_font_size() {
        assert_eq!(FontSize::px(16.0).unwrap().to_css_string(), "16px");
        assert_eq!(FontSize::new(AbsoluteSize::XxLarge).to_css_string(), "xx-large");
        assert_eq!(FontSize::new(RelativeSize::Smaller).to_css_string(), "smaller");
        assert_eq!(
            FontSize::length_percentage(Length::rem(1.25)).unwrap().to_css_string(),
            "1.25rem"
        );
        assert!(FontSize::px(-1.0).is_err());
    }

    #[test]
    fn test_font_weight_clamps() {
        assert_eq!(FontWeight::new(700u16).to_css_string(), "700");
        assert_eq!(FontWeight::bold().to_css_string(), "bold");
        assert_eq!(FontWeightValue::absolute(0.0).to_css_string(), "1");
        assert_eq!(FontWeightValue::absolute(1200.0).to_css_string(), "1000");
        assert_eq!(FontWeightValue::absolute(350.5).to_css_string(), "350.5");
        assert_eq!(FontWeightValue::absolute(f32::NAN).to_css_string(), "400");
    }

    #[test]
    fn test_font_weight_number_only_through_constructor() {
        let FontWeightValue::Absolute(weight) = FontWeightValue::absolute(-50.0) else {
            panic!("expected a numeric weight");
        };
        assert_eq!(weight.get(), FontWeightNumber::MIN);
        assert_eq!(
            FontWeightValue::Absolute(FontWeightNumber::new(f32::INFINITY)).to_css_string(),
            "1000"
        );
    }

    #[test]
    fn test_font_style() {
        assert_eq!(FontStyle::new(FontStyleValue::Italic).to_css_string(), "italic");
        assert_eq!(
            FontStyle::new(FontStyleValue::Oblique(Some(Angle::deg(14.0)))).to_css_string(),
            "oblique 14deg"
        );
        assert_eq!(FontStyle::new(FontStyleValue::Oblique(None)).to_css_string(), "oblique");
    }

    #[test]
    fn test_font_stretch_and_caps() {
        assert_eq!(
            FontStretch::new(StretchKeyword::SemiCondensed).to_css_string(),
            "semi-condensed"
        );
        let wide = NonNegative::new(Percentage::new(125.0)).unwrap();
        assert_eq!(FontStretch::new(FontStretchValue::Percentage(wide)).to_css_string(), "125%");
        assert_eq!(FontVariantCaps::SmallCaps.to_css_string(), "small-caps");
        assert_eq!(FontKerning::None.to_css_string(), "none");
    }

    #[test]
    fn test_names() {
        assert_eq!(FontFamily::NAME, "font-family");
        assert_eq!(FontSize::NAME, "font-size");
        assert_eq!(FontWeight::NAME, "font-weight");
        assert_eq!(FontStyle::NAME, "font-style");
        assert_eq!(FontStretch::NAME, "font-stretch");
        assert_eq!(FontVariantCaps::NAME, "font-variant-caps");
        assert_eq!(FontKerning::NAME, "font-kerning");
    }
}
