//! `@media` queries and rules.
//!
//! A [`Media`] value is a non-empty list of [`MediaQuery`]s. Composition is
//! textual: [`Media::and`] extends the last query, [`Media::or`] appends
//! queries, and [`Media::not`] / [`Media::only`] prefix the first query.
//!
//! <https://drafts.csswg.org/mediaqueries-4/>

use std::ops::{BitAnd, BitOr, Not};

use super::{CssRule, collect_rules, write_rule_block};
use crate::error::{Error, Result};
use crate::values::{Length, Resolution, ToCss, enum_property, push_display, write_separated};

enum_property! {
    pub enum MediaType {
        All => "all",
        Screen => "screen",
        Print => "print",
    }
}

enum_property! {
    /// Prefix keyword of a media query.
    pub enum MediaModifier {
        Not => "not",
        Only => "only",
    }
}

// ============================================================================
// Feature values
// ============================================================================

enum_property! {
    pub enum Orientation {
        Portrait => "portrait",
        Landscape => "landscape",
    }
}

enum_property! {
    pub enum Hover {
        None => "none",
        Hover => "hover",
    }
}

enum_property! {
    pub enum Pointer {
        None => "none",
        Coarse => "coarse",
        Fine => "fine",
    }
}

enum_property! {
    pub enum ColorScheme {
        Light => "light",
        Dark => "dark",
    }
}

enum_property! {
    /// Value of `prefers-reduced-motion`, `prefers-reduced-transparency`
    /// and `prefers-reduced-data`.
    pub enum Reduce {
        NoPreference => "no-preference",
        Reduce => "reduce",
    }
}

enum_property! {
    pub enum Contrast {
        NoPreference => "no-preference",
        More => "more",
        Less => "less",
        Custom => "custom",
    }
}

enum_property! {
    pub enum ForcedColors {
        None => "none",
        Active => "active",
    }
}

enum_property! {
    pub enum DisplayMode {
        Fullscreen => "fullscreen",
        Standalone => "standalone",
        MinimalUi => "minimal-ui",
        Browser => "browser",
        PictureInPicture => "picture-in-picture",
    }
}

/// A `<ratio>`, written `16/9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: u32,
    denominator: u32,
}

impl Ratio {
    /// Fails for a zero denominator.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::TooSmall {
                what: "ratio denominator",
                value: 0,
                min: 1,
            });
        }
        Ok(Ratio {
            numerator,
            denominator,
        })
    }
}

impl ToCss for Ratio {
    fn to_css(&self, buf: &mut String) {
        push_display(buf, self.numerator);
        buf.push('/');
        push_display(buf, self.denominator);
    }
}

// ============================================================================
// Range syntax
// ============================================================================

enum_property! {
    /// Features usable in the level 4 range syntax.
    pub enum RangeFeature {
        Width => "width",
        Height => "height",
        InlineSize => "inline-size",
        BlockSize => "block-size",
        AspectRatio => "aspect-ratio",
        Resolution => "resolution",
    }
}

enum_property! {
    pub enum Comparison {
        LessThan => "<",
        LessThanEqual => "<=",
        GreaterThan => ">",
        GreaterThanEqual => ">=",
        Equal => "=",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeValue {
    Length(Length),
    Ratio(Ratio),
    Resolution(Resolution),
}

impl From<Length> for RangeValue {
    fn from(length: Length) -> Self {
        RangeValue::Length(length)
    }
}

impl From<Ratio> for RangeValue {
    fn from(ratio: Ratio) -> Self {
        RangeValue::Ratio(ratio)
    }
}

impl From<Resolution> for RangeValue {
    fn from(resolution: Resolution) -> Self {
        RangeValue::Resolution(resolution)
    }
}

impl ToCss for RangeValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            RangeValue::Length(length) => length.to_css(buf),
            RangeValue::Ratio(ratio) => ratio.to_css(buf),
            RangeValue::Resolution(resolution) => resolution.to_css(buf),
        }
    }
}

/// `(feature op value)` or `(lower op feature op upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Range {
    Compare {
        feature: RangeFeature,
        comparison: Comparison,
        value: RangeValue,
    },
    Interval {
        lower: RangeValue,
        lower_comparison: Comparison,
        feature: RangeFeature,
        upper_comparison: Comparison,
        upper: RangeValue,
    },
}

impl ToCss for Range {
    fn to_css(&self, buf: &mut String) {
        buf.push('(');
        match self {
            Range::Compare {
                feature,
                comparison,
                value,
            } => {
                feature.to_css(buf);
                buf.push(' ');
                comparison.to_css(buf);
                buf.push(' ');
                value.to_css(buf);
            }
            Range::Interval {
                lower,
                lower_comparison,
                feature,
                upper_comparison,
                upper,
            } => {
                lower.to_css(buf);
                buf.push(' ');
                lower_comparison.to_css(buf);
                buf.push(' ');
                feature.to_css(buf);
                buf.push(' ');
                upper_comparison.to_css(buf);
                buf.push(' ');
                upper.to_css(buf);
            }
        }
        buf.push(')');
    }
}

/// Write `(name: value)`, or `(name)` for a boolean test.
pub(crate) fn write_feature(buf: &mut String, name: &str, value: Option<&dyn ToCss>) {
    buf.push('(');
    buf.push_str(name);
    if let Some(value) = value {
        buf.push_str(": ");
        value.to_css(buf);
    }
    buf.push(')');
}

// ============================================================================
// MediaFeature
// ============================================================================

/// A parenthesized media feature test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaFeature {
    Width(Length),
    MinWidth(Length),
    MaxWidth(Length),
    Height(Length),
    MinHeight(Length),
    MaxHeight(Length),
    AspectRatio(Ratio),
    MinAspectRatio(Ratio),
    MaxAspectRatio(Ratio),
    Orientation(Orientation),
    Resolution(Resolution),
    MinResolution(Resolution),
    MaxResolution(Resolution),
    /// `(color)`, or bits per color component with `(color: 8)`.
    Color(Option<u32>),
    MinColor(u32),
    Monochrome(Option<u32>),
    Hover(Hover),
    AnyHover(Hover),
    Pointer(Pointer),
    AnyPointer(Pointer),
    PrefersColorScheme(ColorScheme),
    PrefersReducedMotion(Reduce),
    PrefersReducedTransparency(Reduce),
    PrefersReducedData(Reduce),
    PrefersContrast(Contrast),
    ForcedColors(ForcedColors),
    DisplayMode(DisplayMode),
    Range(Range),
}

impl MediaFeature {
    pub fn width(width: Length) -> Self {
        MediaFeature::Width(width)
    }

    pub fn min_width(width: Length) -> Self {
        MediaFeature::MinWidth(width)
    }

    pub fn max_width(width: Length) -> Self {
        MediaFeature::MaxWidth(width)
    }

    pub fn height(height: Length) -> Self {
        MediaFeature::Height(height)
    }

    pub fn min_height(height: Length) -> Self {
        MediaFeature::MinHeight(height)
    }

    pub fn max_height(height: Length) -> Self {
        MediaFeature::MaxHeight(height)
    }

    pub fn orientation(orientation: Orientation) -> Self {
        MediaFeature::Orientation(orientation)
    }

    pub fn min_resolution(resolution: Resolution) -> Self {
        MediaFeature::MinResolution(resolution)
    }

    pub fn prefers_color_scheme(scheme: ColorScheme) -> Self {
        MediaFeature::PrefersColorScheme(scheme)
    }

    pub fn prefers_reduced_motion() -> Self {
        MediaFeature::PrefersReducedMotion(Reduce::Reduce)
    }

    /// `(feature op value)`, e.g. `(width >= 600px)`.
    pub fn compare(feature: RangeFeature, comparison: Comparison, value: impl Into<RangeValue>) -> Self {
        MediaFeature::Range(Range::Compare {
            feature,
            comparison,
            value: value.into(),
        })
    }

    /// `(lower <= feature <= upper)`, e.g. `(400px <= width <= 700px)`.
    pub fn between(lower: impl Into<RangeValue>, feature: RangeFeature, upper: impl Into<RangeValue>) -> Self {
        MediaFeature::Range(Range::Interval {
            lower: lower.into(),
            lower_comparison: Comparison::LessThanEqual,
            feature,
            upper_comparison: Comparison::LessThanEqual,
            upper: upper.into(),
        })
    }

    /// The feature name, `None` for range tests.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            MediaFeature::Width(_) => "width",
            MediaFeature::MinWidth(_) => "min-width",
            MediaFeature::MaxWidth(_) => "max-width",
            MediaFeature::Height(_) => "height",
            MediaFeature::MinHeight(_) => "min-height",
            MediaFeature::MaxHeight(_) => "max-height",
            MediaFeature::AspectRatio(_) => "aspect-ratio",
            MediaFeature::MinAspectRatio(_) => "min-aspect-ratio",
            MediaFeature::MaxAspectRatio(_) => "max-aspect-ratio",
            MediaFeature::Orientation(_) => "orientation",
            MediaFeature::Resolution(_) => "resolution",
            MediaFeature::MinResolution(_) => "min-resolution",
            MediaFeature::MaxResolution(_) => "max-resolution",
            MediaFeature::Color(_) => "color",
            MediaFeature::MinColor(_) => "min-color",
            MediaFeature::Monochrome(_) => "monochrome",
            MediaFeature::Hover(_) => "hover",
            MediaFeature::AnyHover(_) => "any-hover",
            MediaFeature::Pointer(_) => "pointer",
            MediaFeature::AnyPointer(_) => "any-pointer",
            MediaFeature::PrefersColorScheme(_) => "prefers-color-scheme",
            MediaFeature::PrefersReducedMotion(_) => "prefers-reduced-motion",
            MediaFeature::PrefersReducedTransparency(_) => "prefers-reduced-transparency",
            MediaFeature::PrefersReducedData(_) => "prefers-reduced-data",
            MediaFeature::PrefersContrast(_) => "prefers-contrast",
            MediaFeature::ForcedColors(_) => "forced-colors",
            MediaFeature::DisplayMode(_) => "display-mode",
            MediaFeature::Range(_) => return None,
        };
        Some(name)
    }
}

/// Bits per color component.
struct Bits(u32);

impl ToCss for Bits {
    fn to_css(&self, buf: &mut String) {
        push_display(buf, self.0);
    }
}

impl ToCss for MediaFeature {
    fn to_css(&self, buf: &mut String) {
        let Some(name) = self.name() else {
            if let MediaFeature::Range(range) = self {
                range.to_css(buf);
            }
            return;
        };
        match self {
            MediaFeature::Width(length)
            | MediaFeature::MinWidth(length)
            | MediaFeature::MaxWidth(length)
            | MediaFeature::Height(length)
            | MediaFeature::MinHeight(length)
            | MediaFeature::MaxHeight(length) => write_feature(buf, name, Some(length)),
            MediaFeature::AspectRatio(ratio)
            | MediaFeature::MinAspectRatio(ratio)
            | MediaFeature::MaxAspectRatio(ratio) => write_feature(buf, name, Some(ratio)),
            MediaFeature::Orientation(orientation) => write_feature(buf, name, Some(orientation)),
            MediaFeature::Resolution(resolution)
            | MediaFeature::MinResolution(resolution)
            | MediaFeature::MaxResolution(resolution) => write_feature(buf, name, Some(resolution)),
            MediaFeature::Color(Some(bits)) | MediaFeature::Monochrome(Some(bits)) => {
                write_feature(buf, name, Some(&Bits(*bits)))
            }
            MediaFeature::Color(None) | MediaFeature::Monochrome(None) => {
                write_feature(buf, name, None)
            }
            MediaFeature::MinColor(bits) => write_feature(buf, name, Some(&Bits(*bits))),
            MediaFeature::Hover(hover) | MediaFeature::AnyHover(hover) => {
                write_feature(buf, name, Some(hover))
            }
            MediaFeature::Pointer(pointer) | MediaFeature::AnyPointer(pointer) => {
                write_feature(buf, name, Some(pointer))
            }
            MediaFeature::PrefersColorScheme(scheme) => write_feature(buf, name, Some(scheme)),
            MediaFeature::PrefersReducedMotion(reduce)
            | MediaFeature::PrefersReducedTransparency(reduce)
            | MediaFeature::PrefersReducedData(reduce) => write_feature(buf, name, Some(reduce)),
            MediaFeature::PrefersContrast(contrast) => write_feature(buf, name, Some(contrast)),
            MediaFeature::ForcedColors(forced) => write_feature(buf, name, Some(forced)),
            MediaFeature::DisplayMode(mode) => write_feature(buf, name, Some(mode)),
            MediaFeature::Range(_) => {}
        }
    }
}

// ============================================================================
// Media queries
// ============================================================================

/// `[not | only]* <media-type>? [and <feature>]*`
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQuery {
    modifiers: Vec<MediaModifier>,
    media_type: Option<MediaType>,
    features: Vec<MediaFeature>,
}

impl MediaQuery {
    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    pub fn features(&self) -> &[MediaFeature] {
        &self.features
    }
}

impl ToCss for MediaQuery {
    fn to_css(&self, buf: &mut String) {
        for modifier in &self.modifiers {
            modifier.to_css(buf);
            buf.push(' ');
        }
        if let Some(media_type) = self.media_type {
            media_type.to_css(buf);
            if !self.features.is_empty() {
                buf.push_str(" and ");
            }
        }
        write_separated(buf, &self.features, " and ");
    }
}

/// A media query list, serialized as `@media <query>, <query>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    queries: Vec<MediaQuery>,
}

impl Media {
    pub fn new(media_type: MediaType) -> Self {
        Media::single(Some(media_type), Vec::new())
    }

    pub fn all() -> Self {
        Media::new(MediaType::All)
    }

    pub fn screen() -> Self {
        Media::new(MediaType::Screen)
    }

    pub fn print() -> Self {
        Media::new(MediaType::Print)
    }

    /// A query made of a single feature, `@media (hover: hover)`.
    pub fn feature(feature: MediaFeature) -> Self {
        Media::single(None, vec![feature])
    }

    fn single(media_type: Option<MediaType>, features: Vec<MediaFeature>) -> Self {
        Media {
            queries: vec![MediaQuery {
                modifiers: Vec::new(),
                media_type,
                features,
            }],
        }
    }

    /// Extend the last query with ` and <feature>`.
    pub fn and(mut self, feature: MediaFeature) -> Self {
        if let Some(last) = self.queries.last_mut() {
            last.features.push(feature);
        }
        self
    }

    /// Append the queries of `other` to this list.
    pub fn or(mut self, other: impl Into<Media>) -> Self {
        self.queries.extend(other.into().queries);
        self
    }

    /// Prefix the first query with `not`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        self.prefix(MediaModifier::Not)
    }

    /// Prefix the first query with `only`.
    pub fn only(self) -> Self {
        self.prefix(MediaModifier::Only)
    }

    fn prefix(mut self, modifier: MediaModifier) -> Self {
        if let Some(first) = self.queries.first_mut() {
            first.modifiers.insert(0, modifier);
        }
        self
    }

    pub fn queries(&self) -> &[MediaQuery] {
        &self.queries
    }

    /// Write the query list without the `@media` keyword.
    pub(crate) fn write_queries(&self, buf: &mut String) {
        write_separated(buf, &self.queries, ", ");
    }

    /// Wrap rules in this condition.
    pub fn block<R: Into<CssRule>>(self, rules: impl IntoIterator<Item = R>) -> MediaRule {
        MediaRule {
            media: self,
            rules: collect_rules(rules),
        }
    }
}

impl From<MediaType> for Media {
    fn from(media_type: MediaType) -> Self {
        Media::new(media_type)
    }
}

impl From<MediaFeature> for Media {
    fn from(feature: MediaFeature) -> Self {
        Media::feature(feature)
    }
}

impl BitAnd<MediaFeature> for Media {
    type Output = Media;

    fn bitand(self, feature: MediaFeature) -> Media {
        self.and(feature)
    }
}

impl BitOr for Media {
    type Output = Media;

    fn bitor(self, other: Media) -> Media {
        self.or(other)
    }
}

impl Not for Media {
    type Output = Media;

    fn not(self) -> Media {
        self.prefix(MediaModifier::Not)
    }
}

impl ToCss for Media {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@media ");
        self.write_queries(buf);
    }
}

/// `@media <queries> { rules }`
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRule {
    pub media: Media,
    pub rules: Vec<CssRule>,
}

impl ToCss for MediaRule {
    fn to_css(&self, buf: &mut String) {
        self.media.to_css(buf);
        write_rule_block(buf, &self.rules);
    }
}
