//! Flexbox and box alignment properties.
//!
//! <https://drafts.csswg.org/css-flexbox-1/> and <https://drafts.csswg.org/css-align-3/>

use super::{keyword_property, value_property};
use crate::error::Result;
use crate::values::{Integer, LengthPercentage, NonNegative, Number, Size, ToCss};

keyword_property! {
    /// `flex-direction`
    pub enum FlexDirection: "flex-direction" {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

keyword_property! {
    /// `flex-wrap`
    pub enum FlexWrap: "flex-wrap" {
        Nowrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

value_property! {
    /// `flex-grow`
    pub FlexGrow: "flex-grow" => NonNegative<Number>;
    /// `flex-shrink`
    pub FlexShrink: "flex-shrink" => NonNegative<Number>;
    /// `flex-basis`
    pub FlexBasis: "flex-basis" => FlexBasisValue;
    /// `order`
    pub Order: "order" => Integer;
    /// `row-gap`
    pub RowGap: "row-gap" => GapValue;
    /// `column-gap`
    pub ColumnGap: "column-gap" => GapValue;
    /// `gap`
    pub Gap: "gap" => Gaps;
}

impl FlexGrow {
    pub fn number(value: f32) -> Result<Self> {
        Ok(FlexGrow::Value(NonNegative::new(Number(value))?))
    }
}

impl FlexShrink {
    pub fn number(value: f32) -> Result<Self> {
        Ok(FlexShrink::Value(NonNegative::new(Number(value))?))
    }
}

/// `content | <'width'>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlexBasisValue {
    Content,
    Size(Size),
}

impl From<Size> for FlexBasisValue {
    fn from(size: Size) -> Self {
        FlexBasisValue::Size(size)
    }
}

impl ToCss for FlexBasisValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            FlexBasisValue::Content => buf.push_str("content"),
            FlexBasisValue::Size(size) => size.to_css(buf),
        }
    }
}

/// `normal | <length-percentage [0,∞]>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapValue {
    Normal,
    LengthPercentage(NonNegative<LengthPercentage>),
}

impl GapValue {
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(GapValue::LengthPercentage(NonNegative::length_percentage(value)?))
    }
}

impl ToCss for GapValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            GapValue::Normal => buf.push_str("normal"),
            GapValue::LengthPercentage(value) => value.to_css(buf),
        }
    }
}

/// `<'row-gap'> <'column-gap'>?`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaps {
    pub row: GapValue,
    pub column: Option<GapValue>,
}

impl From<GapValue> for Gaps {
    fn from(row: GapValue) -> Self {
        Gaps { row, column: None }
    }
}

impl ToCss for Gaps {
    fn to_css(&self, buf: &mut String) {
        self.row.to_css(buf);
        if let Some(column) = &self.column {
            buf.push(' ');
            column.to_css(buf);
        }
    }
}

impl Gap {
    /// One gap for rows and columns.
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        Ok(Gap::Value(GapValue::length_percentage(value)?.into()))
    }

    pub fn row_column(
        row: impl Into<LengthPercentage>,
        column: impl Into<LengthPercentage>,
    ) -> Result<Self> {
        Ok(Gap::Value(Gaps {
            row: GapValue::length_percentage(row)?,
            column: Some(GapValue::length_percentage(column)?),
        }))
    }
}

keyword_property! {
    /// `justify-content`
    pub enum JustifyContent: "justify-content" {
        Normal => "normal",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Left => "left",
        Right => "right",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
    }
}

keyword_property! {
    /// `justify-items`
    pub enum JustifyItems: "justify-items" {
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Center => "center",
        Left => "left",
        Right => "right",
        Baseline => "baseline",
    }
}

keyword_property! {
    /// `justify-self`
    pub enum JustifySelf: "justify-self" {
        Auto => "auto",
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Center => "center",
        Left => "left",
        Right => "right",
        Baseline => "baseline",
    }
}

keyword_property! {
    /// `align-items`
    pub enum AlignItems: "align-items" {
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        SelfStart => "self-start",
        SelfEnd => "self-end",
        Center => "center",
        Baseline => "baseline",
    }
}

keyword_property! {
    /// `align-content`
    pub enum AlignContent: "align-content" {
        Normal => "normal",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
        Baseline => "baseline",
    }
}

keyword_property! {
    /// `align-self`
    pub enum AlignSelf: "align-self" {
        Auto => "auto",
        Normal => "normal",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        SelfStart => "self-start",
        SelfEnd => "self-end",
        Center => "center",
        Baseline => "baseline",
    }
}
