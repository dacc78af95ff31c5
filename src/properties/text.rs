//! Text, decoration and writing-mode properties.
//!
//! <https://drafts.csswg.org/css-text-3/> and <https://drafts.csswg.org/css-text-decor-3/>

use super::{keyword_property, value_property};
use crate::error::Result;
use crate::values::{
    Color, LengthPercentage, NonNegative, Number, ShadowList, TextShadow, ToCss, enum_property,
};

value_property! {
    /// `color`
    pub ColorProperty: "color" => Color;
    /// `text-indent`
    pub TextIndent: "text-indent" => LengthPercentage;
    /// `text-decoration-line`
    pub TextDecorationLine: "text-decoration-line" => DecorationLines;
    /// `text-decoration-color`
    pub TextDecorationColor: "text-decoration-color" => Color;
    /// `text-shadow`
    pub TextShadowProperty: "text-shadow" => ShadowList<TextShadow>;
    /// `line-height`
    pub LineHeight: "line-height" => LineHeightValue;
    /// `letter-spacing`
    pub LetterSpacing: "letter-spacing" => Spacing;
    /// `word-spacing`
    pub WordSpacing: "word-spacing" => Spacing;
    /// `vertical-align`
    pub VerticalAlign: "vertical-align" => VerticalAlignValue;
}

keyword_property! {
    /// `text-align`
    pub enum TextAlign: "text-align" {
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
        MatchParent => "match-parent",
    }
}

keyword_property! {
    /// `text-decoration-style`
    pub enum TextDecorationStyle: "text-decoration-style" {
        Solid => "solid",
        Double => "double",
        Dotted => "dotted",
        Dashed => "dashed",
        Wavy => "wavy",
    }
}

keyword_property! {
    /// `text-transform`
    pub enum TextTransform: "text-transform" {
        None => "none",
        Capitalize => "capitalize",
        Uppercase => "uppercase",
        Lowercase => "lowercase",
        FullWidth => "full-width",
        FullSizeKana => "full-size-kana",
    }
}

keyword_property! {
    /// `text-overflow`
    pub enum TextOverflow: "text-overflow" {
        Clip => "clip",
        Ellipsis => "ellipsis",
    }
}

keyword_property! {
    /// `white-space`
    pub enum WhiteSpace: "white-space" {
        Normal => "normal",
        Pre => "pre",
        Nowrap => "nowrap",
        PreWrap => "pre-wrap",
        BreakSpaces => "break-spaces",
        PreLine => "pre-line",
    }
}

keyword_property! {
    /// `word-break`
    pub enum WordBreak: "word-break" {
        Normal => "normal",
        BreakAll => "break-all",
        KeepAll => "keep-all",
        BreakWord => "break-word",
    }
}

keyword_property! {
    /// `overflow-wrap`
    pub enum OverflowWrap: "overflow-wrap" {
        Normal => "normal",
        BreakWord => "break-word",
        Anywhere => "anywhere",
    }
}

keyword_property! {
    /// `hyphens`
    pub enum Hyphens: "hyphens" {
        None => "none",
        Manual => "manual",
        Auto => "auto",
    }
}

keyword_property! {
    /// `direction`
    pub enum Direction: "direction" {
        Ltr => "ltr",
        Rtl => "rtl",
    }
}

keyword_property! {
    /// `writing-mode`
    pub enum WritingMode: "writing-mode" {
        HorizontalTb => "horizontal-tb",
        VerticalRl => "vertical-rl",
        VerticalLr => "vertical-lr",
        SidewaysRl => "sideways-rl",
        SidewaysLr => "sideways-lr",
    }
}

/// `none | [underline || overline || line-through || blink]`
///
/// Lines are written in that fixed order; no line set is `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DecorationLines {
    pub underline: bool,
    pub overline: bool,
    pub line_through: bool,
    pub blink: bool,
}

impl DecorationLines {
    pub const NONE: DecorationLines = DecorationLines {
        underline: false,
        overline: false,
        line_through: false,
        blink: false,
    };

    pub const UNDERLINE: DecorationLines = DecorationLines {
        underline: true,
        ..DecorationLines::NONE
    };

    pub const OVERLINE: DecorationLines = DecorationLines {
        overline: true,
        ..DecorationLines::NONE
    };

    pub const LINE_THROUGH: DecorationLines = DecorationLines {
        line_through: true,
        ..DecorationLines::NONE
    };

    pub fn is_none(&self) -> bool {
        *self == DecorationLines::NONE
    }
}

impl std::ops::BitOr for DecorationLines {
    type Output = DecorationLines;

    fn bitor(self, rhs: DecorationLines) -> DecorationLines {
        DecorationLines {
            underline: self.underline || rhs.underline,
            overline: self.overline || rhs.overline,
            line_through: self.line_through || rhs.line_through,
            blink: self.blink || rhs.blink,
        }
    }
}

impl ToCss for DecorationLines {
    fn to_css(&self, buf: &mut String) {
        if self.is_none() {
            buf.push_str("none");
            return;
        }
        let lines = [
            (self.underline, "underline"),
            (self.overline, "overline"),
            (self.line_through, "line-through"),
            (self.blink, "blink"),
        ];
        let mut first = true;
        for (set, keyword) in lines {
            if !set {
                continue;
            }
            if !first {
                buf.push(' ');
            }
            buf.push_str(keyword);
            first = false;
        }
    }
}

/// `normal | <number [0,∞]> | <length-percentage [0,∞]>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeightValue {
    Normal,
    Number(NonNegative<Number>),
    LengthPercentage(NonNegative<LengthPercentage>),
}

impl ToCss for LineHeightValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            LineHeightValue::Normal => buf.push_str("normal"),
            LineHeightValue::Number(value) => value.to_css(buf),
            LineHeightValue::LengthPercentage(value) => value.to_css(buf),
        }
    }
}

impl LineHeight {
    pub fn normal() -> Self {
        LineHeight::Value(LineHeightValue::Normal)
    }

    /// A unit-less multiplier of the font size.
    pub fn number(value: f32) -> Result<Self> {
        Ok(LineHeight::Value(LineHeightValue::Number(NonNegative::new(
            Number(value),
        )?)))
    }

    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(LineHeight::Value(LineHeightValue::LengthPercentage(
            NonNegative::length_percentage(value)?,
        )))
    }
}

/// `normal | <length-percentage>`, for letter and word spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    Normal,
    LengthPercentage(LengthPercentage),
}

impl From<LengthPercentage> for Spacing {
    fn from(value: LengthPercentage) -> Self {
        Spacing::LengthPercentage(value)
    }
}

impl ToCss for Spacing {
    fn to_css(&self, buf: &mut String) {
        match self {
            Spacing::Normal => buf.push_str("normal"),
            Spacing::LengthPercentage(value) => value.to_css(buf),
        }
    }
}

enum_property! {
    /// Keyword alignments of `vertical-align`.
    pub enum VerticalAlignKeyword {
        Baseline => "baseline",
        Sub => "sub",
        Super => "super",
        TextTop => "text-top",
        TextBottom => "text-bottom",
        Middle => "middle",
        Top => "top",
        Bottom => "bottom",
    }
}

/// `<keyword> | <length-percentage>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAlignValue {
    Keyword(VerticalAlignKeyword),
    LengthPercentage(LengthPercentage),
}

impl From<VerticalAlignKeyword> for VerticalAlignValue {
    fn from(keyword: VerticalAlignKeyword) -> Self {
        VerticalAlignValue::Keyword(keyword)
    }
}

impl From<LengthPercentage> for VerticalAlignValue {
    fn from(value: LengthPercentage) -> Self {
        VerticalAlignValue::LengthPercentage(value)
    }
}

impl ToCss for VerticalAlignValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            VerticalAlignValue::Keyword(keyword) => keyword.to_css(buf),
            VerticalAlignValue::LengthPercentage(value) => value.to_css(buf),
        }
    }
}
