//! Pseudo-elements.
//!
//! <https://drafts.csswg.org/css-pseudo-4/>

use crate::error::Result;
use crate::values::{CustomIdent, NonEmpty, ToCss, write_separated};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoElement {
    Before,
    After,
    FirstLine,
    FirstLetter,
    Marker,
    Placeholder,
    Selection,
    Backdrop,
    FileSelectorButton,
    /// `::part(name ...)`
    Part(NonEmpty<CustomIdent>),
}

impl PseudoElement {
    pub fn part(names: impl IntoIterator<Item = CustomIdent>) -> Result<Self> {
        NonEmpty::new("::part()", names).map(PseudoElement::Part)
    }

    fn name(&self) -> &'static str {
        match self {
            PseudoElement::Before => "before",
            PseudoElement::After => "after",
            PseudoElement::FirstLine => "first-line",
            PseudoElement::FirstLetter => "first-letter",
            PseudoElement::Marker => "marker",
            PseudoElement::Placeholder => "placeholder",
            PseudoElement::Selection => "selection",
            PseudoElement::Backdrop => "backdrop",
            PseudoElement::FileSelectorButton => "file-selector-button",
            PseudoElement::Part(_) => "part",
        }
    }
}

impl ToCss for PseudoElement {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("::");
        buf.push_str(self.name());
        if let PseudoElement::Part(names) = self {
            buf.push('(');
            write_separated(buf, names, " ");
            buf.push(')');
        }
    }
}
