//! Layout properties: display, positioning, floats, visibility and overflow.

use super::{GlobalKeyword, Property, keyword_property, value_property};
use crate::values::{Integer, LengthPercentageOrAuto, Position as PositionValue, Rect, ToCss};

keyword_property! {
    /// `display`
    ///
    /// <https://drafts.csswg.org/css-display-3/#the-display-properties>
    pub enum Display: "display" {
        Block => "block",
        Inline => "inline",
        InlineBlock => "inline-block",
        Flex => "flex",
        InlineFlex => "inline-flex",
        Grid => "grid",
        InlineGrid => "inline-grid",
        FlowRoot => "flow-root",
        Contents => "contents",
        None => "none",
        ListItem => "list-item",
        Table => "table",
        InlineTable => "inline-table",
        TableRowGroup => "table-row-group",
        TableHeaderGroup => "table-header-group",
        TableFooterGroup => "table-footer-group",
        TableRow => "table-row",
        TableCell => "table-cell",
        TableColumnGroup => "table-column-group",
        TableColumn => "table-column",
        TableCaption => "table-caption",
    }
}

keyword_property! {
    /// `position`
    pub enum Position: "position" {
        Static => "static",
        Relative => "relative",
        Absolute => "absolute",
        Fixed => "fixed",
        Sticky => "sticky",
    }
}

value_property! {
    pub Top: "top" => LengthPercentageOrAuto;
    pub Right: "right" => LengthPercentageOrAuto;
    pub Bottom: "bottom" => LengthPercentageOrAuto;
    pub Left: "left" => LengthPercentageOrAuto;
    /// `inset`, the `top right bottom left` shorthand.
    pub Inset: "inset" => Rect<LengthPercentageOrAuto>;
    /// `object-position`
    pub ObjectPosition: "object-position" => PositionValue;
}

/// `z-index`: `auto | <integer>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZIndex {
    Auto,
    Integer(Integer),
    Global(GlobalKeyword),
}

impl ZIndex {
    pub fn new(value: i32) -> Self {
        ZIndex::Integer(Integer(value))
    }
}

impl ToCss for ZIndex {
    fn to_css(&self, buf: &mut String) {
        match self {
            ZIndex::Auto => buf.push_str("auto"),
            ZIndex::Integer(value) => value.to_css(buf),
            ZIndex::Global(keyword) => keyword.to_css(buf),
        }
    }
}

impl Property for ZIndex {
    const NAME: &'static str = "z-index";

    fn global(keyword: GlobalKeyword) -> Self {
        ZIndex::Global(keyword)
    }
}

impl From<GlobalKeyword> for ZIndex {
    fn from(keyword: GlobalKeyword) -> Self {
        ZIndex::Global(keyword)
    }
}

keyword_property! {
    /// `float`
    pub enum Float: "float" {
        Left => "left",
        Right => "right",
        None => "none",
        InlineStart => "inline-start",
        InlineEnd => "inline-end",
    }
}

keyword_property! {
    /// `clear`
    pub enum Clear: "clear" {
        None => "none",
        Left => "left",
        Right => "right",
        Both => "both",
        InlineStart => "inline-start",
        InlineEnd => "inline-end",
    }
}

keyword_property! {
    /// `visibility`
    pub enum Visibility: "visibility" {
        Visible => "visible",
        Hidden => "hidden",
        Collapse => "collapse",
    }
}

keyword_property! {
    /// `overflow`, with one keyword for both axes.
    pub enum Overflow: "overflow" {
        Visible => "visible",
        Hidden => "hidden",
        Clip => "clip",
        Scroll => "scroll",
        Auto => "auto",
    }
}

keyword_property! {
    /// `overflow-x`
    pub enum OverflowX: "overflow-x" {
        Visible => "visible",
        Hidden => "hidden",
        Clip => "clip",
        Scroll => "scroll",
        Auto => "auto",
    }
}

keyword_property! {
    /// `overflow-y`
    pub enum OverflowY: "overflow-y" {
        Visible => "visible",
        Hidden => "hidden",
        Clip => "clip",
        Scroll => "scroll",
        Auto => "auto",
    }
}

keyword_property! {
    /// `object-fit`
    pub enum ObjectFit: "object-fit" {
        Fill => "fill",
        Contain => "contain",
        Cover => "cover",
        None => "none",
        ScaleDown => "scale-down",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Length, Percentage};

    #[test]
    fn test_display() {
        assert_eq!(Display::InlineBlock.to_css_string(), "inline-block");
        assert_eq!(Display::None.declaration().to_css_string(), "display:none");
        assert_eq!(Display::TableHeaderGroup.to_css_string(), "table-header-group");
    }

    #[test]
    fn test_insets() {
        assert_eq!(Top::new(Length::px(0.0)).to_css_string(), "0px");
        assert_eq!(Left::new(LengthPercentageOrAuto::Auto).to_css_string(), "auto");
        assert_eq!(
            Inset::new(Rect::all(LengthPercentageOrAuto::from(Percentage::new(5.0))))
                .declaration()
                .to_css_string(),
            "inset:5%"
        );
    }

    #[test]
    fn test_z_index() {
        assert_eq!(ZIndex::new(-1).to_css_string(), "-1");
        assert_eq!(ZIndex::Auto.to_css_string(), "auto");
        assert_eq!(ZIndex::global(GlobalKeyword::Initial).to_css_string(), "initial");
        assert_eq!(ZIndex::new(10).declaration().to_css_string(), "z-index:10");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Position::Sticky.to_css_string(), "sticky");
        assert_eq!(Float::InlineStart.to_css_string(), "inline-start");
        assert_eq!(Clear::Both.to_css_string(), "both");
        assert_eq!(Visibility::Collapse.to_css_string(), "collapse");
        assert_eq!(Overflow::Clip.to_css_string(), "clip");
        assert_eq!(ObjectFit::ScaleDown.to_css_string(), "scale-down");
        assert_eq!(
            ObjectPosition::new(PositionValue::center()).to_css_string(),
            "center center"
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Display::NAME, "display");
        assert_eq!(Position::NAME, "position");
        assert_eq!(Top::NAME, "top");
        assert_eq!(Right::NAME, "right");
        assert_eq!(Bottom::NAME, "bottom");
        assert_eq!(Left::NAME, "left");
        assert_eq!(Inset::NAME, "inset");
        assert_eq!(ZIndex::NAME, "z-index");
        assert_eq!(Float::NAME, "float");
        assert_eq!(Clear::NAME, "clear");
        assert_eq!(Visibility::NAME, "visibility");
        assert_eq!(Overflow::NAME, "overflow");
        assert_eq!(OverflowX::NAME, "overflow-x");
        assert_eq!(OverflowY::NAME, "overflow-y");
        assert_eq!(ObjectFit::NAME, "object-fit");
        assert_eq!(ObjectPosition::NAME, "object-position");
    }
}
