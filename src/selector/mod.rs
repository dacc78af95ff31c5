//! Selector types.
//!
//! A [`Selector`] is a chain of [`Compound`] selectors joined by
//! [`Combinator`]s; a [`SelectorList`] joins selectors with `, `.
//!
//! <https://drafts.csswg.org/selectors-4/>

pub mod attribute;
pub mod combinator;
pub mod pseudo_class;
pub mod pseudo_element;

#[cfg(test)]
mod tests;

pub use attribute::{AttributeMatcher, AttributeModifier, AttributeSelector};
pub use combinator::Combinator;
pub use pseudo_class::{LanguageRange, Nth, PseudoClass, PseudoClassKeyword, TextDirection};
pub use pseudo_element::PseudoElement;

use crate::error::{Error, Result};
use crate::values::ident::write_ident;
use crate::values::{ToCss, write_comma_separated};

/// Reject empty names; every other string is escaped on output.
pub(crate) fn non_empty(name: impl Into<String>) -> Result<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(Error::EmptyIdent);
    }
    Ok(name)
}

// ============================================================================
// Compound selectors
// ============================================================================

/// `*` or an element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    Universal,
    Element(String),
}

impl ToCss for TypeSelector {
    fn to_css(&self, buf: &mut String) {
        match self {
            TypeSelector::Universal => buf.push('*'),
            TypeSelector::Element(name) => write_ident(buf, name),
        }
    }
}

/// A selector that filters the subject without naming its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubclassSelector {
    Id(String),
    Class(String),
    Attribute(AttributeSelector),
    PseudoClass(PseudoClass),
}

impl ToCss for SubclassSelector {
    fn to_css(&self, buf: &mut String) {
        match self {
            SubclassSelector::Id(id) => {
                buf.push('#');
                write_ident(buf, id);
            }
            SubclassSelector::Class(class) => {
                buf.push('.');
                write_ident(buf, class);
            }
            SubclassSelector::Attribute(attribute) => attribute.to_css(buf),
            SubclassSelector::PseudoClass(pseudo) => pseudo.to_css(buf),
        }
    }
}

/// A type selector, then subclass selectors, then an optional pseudo-element.
///
/// A compound with nothing in it serializes as `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Compound {
    type_selector: Option<TypeSelector>,
    subclasses: Vec<SubclassSelector>,
    pseudo_element: Option<PseudoElement>,
}

impl Compound {
    /// An empty compound, to be filled with subclass selectors.
    pub fn new() -> Self {
        Compound::default()
    }

    pub fn universal() -> Self {
        Compound {
            type_selector: Some(TypeSelector::Universal),
            ..Compound::default()
        }
    }

    pub fn element(name: impl Into<String>) -> Result<Self> {
        Ok(Compound {
            type_selector: Some(TypeSelector::Element(non_empty(name)?)),
            ..Compound::default()
        })
    }

    pub fn id(self, id: impl Into<String>) -> Result<Self> {
        Ok(self.subclass(SubclassSelector::Id(non_empty(id)?)))
    }

    pub fn class(self, class: impl Into<String>) -> Result<Self> {
        Ok(self.subclass(SubclassSelector::Class(non_empty(class)?)))
    }

    pub fn attribute(self, attribute: AttributeSelector) -> Self {
        self.subclass(SubclassSelector::Attribute(attribute))
    }

    pub fn pseudo_class(self, pseudo: impl Into<PseudoClass>) -> Self {
        self.subclass(SubclassSelector::PseudoClass(pseudo.into()))
    }

    /// Set the trailing pseudo-element, replacing any earlier one.
    pub fn pseudo_element(self, pseudo: PseudoElement) -> Self {
        Compound {
            pseudo_element: Some(pseudo),
            ..self
        }
    }

    fn subclass(mut self, selector: SubclassSelector) -> Self {
        self.subclasses.push(selector);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.type_selector.is_none() && self.subclasses.is_empty() && self.pseudo_element.is_none()
    }
}

impl ToCss for Compound {
    fn to_css(&self, buf: &mut String) {
        if self.is_empty() {
            buf.push('*');
            return;
        }
        if let Some(type_selector) = &self.type_selector {
            type_selector.to_css(buf);
        }
        for subclass in &self.subclasses {
            subclass.to_css(buf);
        }
        if let Some(pseudo) = &self.pseudo_element {
            pseudo.to_css(buf);
        }
    }
}

// ============================================================================
// Complex selectors and lists
// ============================================================================

/// A compound followed by `(combinator, compound)` steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    first: Compound,
    rest: Vec<(Combinator, Compound)>,
}

impl Selector {
    pub fn new(first: Compound) -> Self {
        Selector {
            first,
            rest: Vec::new(),
        }
    }

    pub fn combine(mut self, combinator: Combinator, next: Compound) -> Self {
        self.rest.push((combinator, next));
        self
    }

    pub fn descendant(self, next: Compound) -> Self {
        self.combine(Combinator::Descendant, next)
    }

    pub fn child(self, next: Compound) -> Self {
        self.combine(Combinator::Child, next)
    }

    pub fn next_sibling(self, next: Compound) -> Self {
        self.combine(Combinator::NextSibling, next)
    }

    pub fn subsequent_sibling(self, next: Compound) -> Self {
        self.combine(Combinator::SubsequentSibling, next)
    }

    pub fn column(self, next: Compound) -> Self {
        self.combine(Combinator::Column, next)
    }
}

impl From<Compound> for Selector {
    fn from(compound: Compound) -> Self {
        Selector::new(compound)
    }
}

impl ToCss for Selector {
    fn to_css(&self, buf: &mut String) {
        self.first.to_css(buf);
        for (combinator, compound) in &self.rest {
            combinator.to_css(buf);
            compound.to_css(buf);
        }
    }
}

/// A selector relative to an anchor element, as taken by `:has()`.
///
/// The descendant combinator is implied and not written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeSelector {
    pub combinator: Combinator,
    pub selector: Selector,
}

impl RelativeSelector {
    pub fn new(combinator: Combinator, selector: impl Into<Selector>) -> Self {
        RelativeSelector {
            combinator,
            selector: selector.into(),
        }
    }
}

impl From<Selector> for RelativeSelector {
    fn from(selector: Selector) -> Self {
        RelativeSelector::new(Combinator::Descendant, selector)
    }
}

impl ToCss for RelativeSelector {
    fn to_css(&self, buf: &mut String) {
        if let Some(symbol) = self.combinator.symbol() {
            buf.push_str(symbol);
            buf.push(' ');
        }
        self.selector.to_css(buf);
    }
}

/// A non-empty, comma-separated list of selectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorList(Vec<Selector>);

impl SelectorList {
    pub fn new<S: Into<Selector>>(selectors: impl IntoIterator<Item = S>) -> Result<Self> {
        let selectors: Vec<Selector> = selectors.into_iter().map(Into::into).collect();
        if selectors.is_empty() {
            return Err(Error::EmptyList("selector list"));
        }
        Ok(SelectorList(selectors))
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.0
    }
}

impl From<Selector> for SelectorList {
    fn from(selector: Selector) -> Self {
        SelectorList(vec![selector])
    }
}

impl From<Compound> for SelectorList {
    fn from(compound: Compound) -> Self {
        SelectorList(vec![compound.into()])
    }
}

impl ToCss for SelectorList {
    fn to_css(&self, buf: &mut String) {
        write_comma_separated(buf, &self.0);
    }
}
