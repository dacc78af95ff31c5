//! `@page` and its margin rules.
//!
//! <https://drafts.csswg.org/css-page-3/>

use super::descriptor::DescriptorBlock;
use crate::declaration::{write_block, write_nested};
use crate::error::Result;
use crate::properties::Property;
use crate::values::{CustomIdent, Length, NonNegative, ToCss, enum_property, write_comma_separated};

enum_property! {
    /// Page pseudo-classes.
    pub enum PagePseudo {
        First => "first",
        Left => "left",
        Right => "right",
        Blank => "blank",
    }
}

/// `<page-type>? <pseudo-page>*`, e.g. `chapter:first`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PageSelector {
    name: Option<CustomIdent>,
    pseudos: Vec<PagePseudo>,
}

impl PageSelector {
    pub fn named(name: CustomIdent) -> Self {
        PageSelector {
            name: Some(name),
            pseudos: Vec::new(),
        }
    }

    pub fn pseudo(mut self, pseudo: PagePseudo) -> Self {
        self.pseudos.push(pseudo);
        self
    }
}

impl From<PagePseudo> for PageSelector {
    fn from(pseudo: PagePseudo) -> Self {
        PageSelector::default().pseudo(pseudo)
    }
}

impl ToCss for PageSelector {
    fn to_css(&self, buf: &mut String) {
        if let Some(name) = &self.name {
            name.to_css(buf);
        }
        for pseudo in &self.pseudos {
            buf.push(':');
            pseudo.to_css(buf);
        }
    }
}

enum_property! {
    /// Named page sizes.
    pub enum PaperSize {
        A5 => "A5",
        A4 => "A4",
        A3 => "A3",
        B5 => "B5",
        B4 => "B4",
        JisB5 => "JIS-B5",
        JisB4 => "JIS-B4",
        Letter => "letter",
        Legal => "legal",
        Ledger => "ledger",
    }
}

enum_property! {
    pub enum PageOrientation {
        Portrait => "portrait",
        Landscape => "landscape",
    }
}

/// Value of the `size` descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    Auto,
    /// Width and optional height; a single length makes a square page.
    Dimensions(NonNegative<Length>, Option<NonNegative<Length>>),
    Paper(PaperSize, Option<PageOrientation>),
    Orientation(PageOrientation),
}

impl PageSize {
    pub fn dimensions(width: Length, height: Length) -> Result<Self> {
        Ok(PageSize::Dimensions(
            NonNegative::new(width)?,
            Some(NonNegative::new(height)?),
        ))
    }
}

impl ToCss for PageSize {
    fn to_css(&self, buf: &mut String) {
        match self {
            PageSize::Auto => buf.push_str("auto"),
            PageSize::Dimensions(width, height) => {
                width.to_css(buf);
                if let Some(height) = height {
                    buf.push(' ');
                    height.to_css(buf);
                }
            }
            PageSize::Paper(size, orientation) => {
                size.to_css(buf);
                if let Some(orientation) = orientation {
                    buf.push(' ');
                    orientation.to_css(buf);
                }
            }
            PageSize::Orientation(orientation) => orientation.to_css(buf),
        }
    }
}

// ============================================================================
// Margin boxes
// ============================================================================

enum_property! {
    /// The sixteen page-margin boxes.
    pub enum MarginBox {
        TopLeftCorner => "top-left-corner",
        TopLeft => "top-left",
        TopCenter => "top-center",
        TopRight => "top-right",
        TopRightCorner => "top-right-corner",
        BottomLeftCorner => "bottom-left-corner",
        BottomLeft => "bottom-left",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
        BottomRightCorner => "bottom-right-corner",
        LeftTop => "left-top",
        LeftMiddle => "left-middle",
        LeftBottom => "left-bottom",
        RightTop => "right-top",
        RightMiddle => "right-middle",
        RightBottom => "right-bottom",
    }
}

/// `@top-center { declarations }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarginRule {
    pub margin_box: MarginBox,
    declarations: DescriptorBlock,
}

impl MarginRule {
    pub fn new(margin_box: MarginBox) -> Self {
        MarginRule {
            margin_box,
            declarations: DescriptorBlock::new(),
        }
    }

    pub fn declare(mut self, property: &impl Property) -> Self {
        self.declarations.declare(property);
        self
    }

    pub fn declarations(&self) -> &DescriptorBlock {
        &self.declarations
    }
}

impl ToCss for MarginRule {
    fn to_css(&self, buf: &mut String) {
        buf.push('@');
        self.margin_box.to_css(buf);
        buf.push(' ');
        self.declarations.to_css(buf);
    }
}

// ============================================================================
// PageRule
// ============================================================================

/// `@page <selectors>? { declarations margin-rules }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PageRule {
    selectors: Vec<PageSelector>,
    descriptors: DescriptorBlock,
    margins: Vec<MarginRule>,
}

impl PageRule {
    /// A rule matching every page.
    pub fn new() -> Self {
        PageRule::default()
    }

    pub fn selector(mut self, selector: impl Into<PageSelector>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    pub fn size(mut self, size: PageSize) -> Self {
        self.descriptors.set("size", &size);
        self
    }

    /// Set a property such as `margin` for the page box.
    pub fn declare(mut self, property: &impl Property) -> Self {
        self.descriptors.declare(property);
        self
    }

    /// Add a margin box rule. A rule for a box that is already present replaces it.
    pub fn margin(mut self, rule: MarginRule) -> Self {
        match self
            .margins
            .iter_mut()
            .find(|existing| existing.margin_box == rule.margin_box)
        {
            Some(existing) => {
                log::trace!("replacing @{} margin rule", rule.margin_box.as_str());
                *existing = rule;
            }
            None => self.margins.push(rule),
        }
        self
    }

    pub fn descriptors(&self) -> &DescriptorBlock {
        &self.descriptors
    }

    pub fn margins(&self) -> &[MarginRule] {
        &self.margins
    }
}

impl ToCss for PageRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@page ");
        if !self.selectors.is_empty() {
            write_comma_separated(buf, &self.selectors);
            buf.push(' ');
        }
        write_block(buf, |buf| {
            self.descriptors.write_entries(buf);
            for margin in &self.margins {
                write_nested(buf, margin);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::box_model::Margin;
    use crate::properties::font::FontSize;
    use crate::properties::text::TextAlign;

    #[test]
    fn test_page_with_margin_boxes() {
        let rule = PageRule::new()
            .selector(PagePseudo::First)
            .size(PageSize::Paper(PaperSize::A4, Some(PageOrientation::Portrait)))
            .declare(&Margin::length_percentage(Length::inches(1.0)))
            .margin(
                MarginRule::new(MarginBox::TopCenter)
                    .declare(&TextAlign::Center)
                    .declare(&FontSize::px(9.0).unwrap()),
            );
        assert_eq!(
            rule.to_css_string(),
            "@page :first { size:A4 portrait; margin:1in; \
             @top-center { text-align:center; font-size:9px; } }"
        );
    }

    #[test]
    fn test_page_selectors() {
        let chapter = PageSelector::named(CustomIdent::new("chapter").unwrap())
            .pseudo(PagePseudo::Left);
        let rule = PageRule::new()
            .selector(chapter)
            .selector(PagePseudo::Blank);
        assert_eq!(rule.to_css_string(), "@page chapter:left, :blank { }");
        assert_eq!(PageRule::new().to_css_string(), "@page { }");
    }

    #[test]
    fn test_size_values() {
        let letter = PageSize::dimensions(Length::inches(8.5), Length::inches(11.0)).unwrap();
        assert_eq!(letter.to_css_string(), "8.5in 11in");
        assert_eq!(PageSize::Orientation(PageOrientation::Landscape).to_css_string(), "landscape");
        assert!(PageSize::dimensions(Length::px(-1.0), Length::px(1.0)).is_err());
    }

    #[test]
    fn test_replacements() {
        let rule = PageRule::new()
            .size(PageSize::Auto)
            .margin(MarginRule::new(MarginBox::BottomRight).declare(&TextAlign::Left))
            .size(PageSize::Paper(PaperSize::Letter, None))
            .margin(MarginRule::new(MarginBox::BottomRight).declare(&TextAlign::Right));
        assert_eq!(rule.descriptors().len(), 1);
        assert_eq!(rule.margins().len(), 1);
        assert_eq!(
            rule.to_css_string(),
            "@page { size:letter; @bottom-right { text-align:right; } }"
        );
    }
}
