//! `@font-face` and the font resource types shared with `@supports`.
//!
//! <https://drafts.csswg.org/css-fonts-4/#font-face-rule>

use super::descriptor::DescriptorBlock;
use crate::error::{Error, Result};
use crate::properties::font::{FontStretchValue, FontStyleValue, FontWeightValue};
use crate::values::string::write_string;
use crate::values::{
    CssString, NonNegative, Percentage, ToCss, Url, enum_property, push_display,
    write_comma_separated,
};

enum_property! {
    /// `<font-format>`
    pub enum FontFormat {
        Collection => "collection",
        EmbeddedOpentype => "embedded-opentype",
        Opentype => "opentype",
        Svg => "svg",
        Truetype => "truetype",
        Woff => "woff",
        Woff2 => "woff2",
    }
}

enum_property! {
    /// `<font-tech>`
    pub enum FontTech {
        FeaturesOpentype => "features-opentype",
        FeaturesAat => "features-aat",
        FeaturesGraphite => "features-graphite",
        ColorColrv0 => "color-COLRv0",
        ColorColrv1 => "color-COLRv1",
        ColorSvg => "color-SVG",
        ColorSbix => "color-sbix",
        ColorCbdt => "color-CBDT",
        Variations => "variations",
        Palettes => "palettes",
        Incremental => "incremental",
    }
}

enum_property! {
    /// Value of the `font-display` descriptor.
    pub enum FontDisplay {
        Auto => "auto",
        Block => "block",
        Swap => "swap",
        Fallback => "fallback",
        Optional => "optional",
    }
}

// ============================================================================
// Sources
// ============================================================================

/// One entry of the `src` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontSource {
    /// `url(...) format(...)? tech(...)?`
    Url {
        url: Url,
        format: Option<FontFormat>,
        tech: Vec<FontTech>,
    },
    /// `local("Family Name")`
    Local(CssString),
}

impl FontSource {
    pub fn url(url: impl Into<String>) -> Self {
        FontSource::Url {
            url: Url::new(url),
            format: None,
            tech: Vec::new(),
        }
    }

    pub fn local(name: impl Into<String>) -> Self {
        FontSource::Local(CssString::new(name))
    }

    /// Add a format hint. Has no effect on `local()` sources.
    pub fn format(self, hint: FontFormat) -> Self {
        match self {
            FontSource::Url { url, tech, .. } => FontSource::Url {
                url,
                format: Some(hint),
                tech,
            },
            local => local,
        }
    }

    /// Add a required font technology. Has no effect on `local()` sources.
    pub fn tech(mut self, required: FontTech) -> Self {
        if let FontSource::Url { tech, .. } = &mut self {
            tech.push(required);
        }
        self
    }
}

impl ToCss for FontSource {
    fn to_css(&self, buf: &mut String) {
        match self {
            FontSource::Url { url, format, tech } => {
                url.to_css(buf);
                if let Some(format) = format {
                    buf.push_str(" format(");
                    write_string(buf, format.as_str());
                    buf.push(')');
                }
                if !tech.is_empty() {
                    buf.push_str(" tech(");
                    write_comma_separated(buf, tech);
                    buf.push(')');
                }
            }
            FontSource::Local(name) => {
                buf.push_str("local(");
                name.to_css(buf);
                buf.push(')');
            }
        }
    }
}

// ============================================================================
// Unicode ranges
// ============================================================================

/// A `<unicode-range-token>`: `U+26` or `U+0-7F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnicodeRange {
    start: u32,
    end: u32,
}

impl UnicodeRange {
    pub const MAX: u32 = 0x10FFFF;

    /// Fails when `start > end` or `end` is past the last code point.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end || end > Self::MAX {
            return Err(Error::InvalidUnicodeRange { start, end });
        }
        Ok(UnicodeRange { start, end })
    }

    pub fn single(code_point: u32) -> Result<Self> {
        UnicodeRange::new(code_point, code_point)
    }
}

impl ToCss for UnicodeRange {
    fn to_css(&self, buf: &mut String) {
        push_display(buf, format_args!("U+{:X}", self.start));
        if self.end != self.start {
            push_display(buf, format_args!("-{:X}", self.end));
        }
    }
}

// ============================================================================
// FontFaceRule
// ============================================================================

/// `@font-face { descriptors }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFaceRule {
    descriptors: DescriptorBlock,
}

/// A space-separated pair, as taken by the range forms of the descriptors.
struct Pair<'a, T>(&'a T, &'a T);

impl<T: ToCss> ToCss for Pair<'_, T> {
    fn to_css(&self, buf: &mut String) {
        self.0.to_css(buf);
        buf.push(' ');
        self.1.to_css(buf);
    }
}

/// A comma-separated descriptor value.
struct Comma<'a, T>(&'a [T]);

impl<T: ToCss> ToCss for Comma<'_, T> {
    fn to_css(&self, buf: &mut String) {
        write_comma_separated(buf, self.0);
    }
}

impl FontFaceRule {
    /// A face with its two required descriptors, `font-family` and `src`.
    ///
    /// Fails when `sources` is empty.
    pub fn new(family: impl Into<String>, sources: impl IntoIterator<Item = FontSource>) -> Result<Self> {
        let sources: Vec<_> = sources.into_iter().collect();
        if sources.is_empty() {
            return Err(Error::EmptyList("@font-face src"));
        }
        let mut descriptors = DescriptorBlock::new();
        descriptors.set("font-family", &CssString::new(family));
        descriptors.set("src", &Comma(&sources));
        Ok(FontFaceRule { descriptors })
    }

    fn with(mut self, name: &'static str, value: &dyn ToCss) -> Self {
        self.descriptors.set(name, value);
        self
    }

    pub fn style(self, style: FontStyleValue) -> Self {
        self.with("font-style", &style)
    }

    pub fn weight(self, weight: FontWeightValue) -> Self {
        self.with("font-weight", &weight)
    }

    /// A variable font's weight axis, `font-weight: 100 900`.
    pub fn weight_range(self, min: FontWeightValue, max: FontWeightValue) -> Self {
        self.with("font-weight", &Pair(&min, &max))
    }

    pub fn stretch(self, stretch: FontStretchValue) -> Self {
        self.with("font-stretch", &stretch)
    }

    pub fn display(self, display: FontDisplay) -> Self {
        self.with("font-display", &display)
    }

    /// Fails when `ranges` is empty.
    pub fn unicode_range(self, ranges: impl IntoIterator<Item = UnicodeRange>) -> Result<Self> {
        let ranges: Vec<_> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(Error::EmptyList("unicode-range"));
        }
        Ok(self.with("unicode-range", &Comma(&ranges)))
    }

    pub fn size_adjust(self, adjust: NonNegative<Percentage>) -> Self {
        self.with("size-adjust", &adjust)
    }

    pub fn ascent_override(self, ascent: NonNegative<Percentage>) -> Self {
        self.with("ascent-override", &ascent)
    }

    pub fn descent_override(self, descent: NonNegative<Percentage>) -> Self {
        self.with("descent-override", &descent)
    }

    pub fn line_gap_override(self, gap: NonNegative<Percentage>) -> Self {
        self.with("line-gap-override", &gap)
    }

    pub fn descriptors(&self) -> &DescriptorBlock {
        &self.descriptors
    }
}

impl ToCss for FontFaceRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@font-face ");
        self.descriptors.to_css(buf);
    }
}
