//! CSS declarations and declaration blocks.

use std::borrow::Cow;

use crate::properties::Property;
use crate::values::{DashedIdent, ToCss};

// ============================================================================
// Declaration - A CSS property-value pair
// ============================================================================

/// A serialized `name:value` pair.
///
/// Built from a [`Property`] value with [`Property::declaration`], or from a
/// custom property name with [`Declaration::custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    name: Cow<'static, str>,
    value: String,
    important: bool,
}

impl Declaration {
    pub(crate) fn new(name: &'static str, value: String) -> Self {
        Declaration {
            name: Cow::Borrowed(name),
            value,
            important: false,
        }
    }

    /// A declaration or at-rule descriptor with a computed name.
    pub(crate) fn named(name: impl Into<Cow<'static, str>>, value: String) -> Self {
        Declaration {
            name: name.into(),
            value,
            important: false,
        }
    }

    /// A custom property declaration such as `--accent:#0af`.
    pub fn custom(name: &DashedIdent, value: &impl ToCss) -> Self {
        Declaration {
            name: Cow::Owned(name.to_css_string()),
            value: value.to_css_string(),
            important: false,
        }
    }

    /// The same declaration marked `!important`.
    pub fn important(self) -> Self {
        Declaration {
            important: true,
            ..self
        }
    }

    /// The same declaration without `!important`, for conditions that only
    /// test a property and value.
    pub(crate) fn without_importance(self, context: &str) -> Self {
        if self.important {
            log::debug!("dropping !important from {} in {context}", self.name);
        }
        Declaration {
            important: false,
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_important(&self) -> bool {
        self.important
    }
}

impl ToCss for Declaration {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.name);
        buf.push(':');
        buf.push_str(&self.value);
        if self.important {
            buf.push_str("!important");
        }
    }
}

// ============================================================================
// DeclarationBlock
// ============================================================================

/// An ordered list of declarations, serialized as `{ a:b; c:d; }`.
///
/// Repeated property names are kept, as CSS fallbacks rely on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DeclarationBlock(Vec<Declaration>);

impl DeclarationBlock {
    pub fn new() -> Self {
        DeclarationBlock::default()
    }

    /// Append the declaration of a property value.
    pub fn declare(self, property: &impl Property) -> Self {
        self.push(property.declaration())
    }

    pub fn push(mut self, declaration: Declaration) -> Self {
        self.0.push(declaration);
        self
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Declaration> for DeclarationBlock {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        DeclarationBlock(iter.into_iter().collect())
    }
}

impl ToCss for DeclarationBlock {
    fn to_css(&self, buf: &mut String) {
        write_block(buf, |buf| {
            for declaration in &self.0 {
                write_block_entry(buf, declaration);
            }
        });
    }
}

/// Write `{`, the entries written by `body`, then ` }`.
///
/// Entries are written with [`write_block_entry`] or [`write_nested`], so an
/// empty block is `{ }`.
pub(crate) fn write_block(buf: &mut String, body: impl FnOnce(&mut String)) {
    buf.push('{');
    body(buf);
    buf.push_str(" }");
}

/// Write a `;`-terminated block entry.
pub(crate) fn write_block_entry(buf: &mut String, entry: &impl ToCss) {
    buf.push(' ');
    entry.to_css(buf);
    buf.push(';');
}

/// Write a nested rule inside a block.
pub(crate) fn write_nested(buf: &mut String, rule: &impl ToCss) {
    buf.push(' ');
    rule.to_css(buf);
}
