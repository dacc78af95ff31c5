//! Style rules.

use crate::declaration::DeclarationBlock;
use crate::properties::Property;
use crate::selector::SelectorList;
use crate::values::ToCss;

/// `selectors { declarations }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleRule {
    pub selectors: SelectorList,
    pub declarations: DeclarationBlock,
}

impl StyleRule {
    pub fn new(selectors: impl Into<SelectorList>, declarations: DeclarationBlock) -> Self {
        StyleRule {
            selectors: selectors.into(),
            declarations,
        }
    }

    /// Append one property declaration.
    pub fn declare(self, property: &impl Property) -> Self {
        StyleRule {
            declarations: self.declarations.declare(property),
            ..self
        }
    }
}

impl ToCss for StyleRule {
    fn to_css(&self, buf: &mut String) {
        self.selectors.to_css(buf);
        buf.push(' ');
        self.declarations.to_css(buf);
    }
}
