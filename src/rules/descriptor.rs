//! Ordered descriptor maps for block at-rules.

use std::borrow::Cow;

use crate::declaration::{Declaration, write_block, write_block_entry};
use crate::properties::Property;
use crate::values::ToCss;

/// The entries of an at-rule block, in insertion order.
///
/// Unlike a [`DeclarationBlock`](crate::declaration::DeclarationBlock),
/// names are unique: setting a name that is already present replaces the
/// entry where it stands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DescriptorBlock(Vec<Declaration>);

impl DescriptorBlock {
    pub fn new() -> Self {
        DescriptorBlock::default()
    }

    /// Set descriptor `name` to `value`.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: &(impl ToCss + ?Sized)) {
        self.insert(Declaration::named(name, value.to_css_string()));
    }

    /// Set a property declaration, as accepted by `@page` and its margin boxes.
    pub fn declare(&mut self, property: &impl Property) {
        self.insert(property.declaration());
    }

    pub fn insert(&mut self, entry: Declaration) {
        match self.0.iter_mut().find(|existing| existing.name() == entry.name()) {
            Some(existing) => {
                log::trace!(
                    "replacing descriptor {}: {:?} -> {:?}",
                    entry.name(),
                    existing.value(),
                    entry.value()
                );
                *existing = entry;
            }
            None => self.0.push(entry),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.0.iter().find(|entry| entry.name() == name)
    }

    pub fn entries(&self) -> &[Declaration] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write the entries without braces, for blocks that also hold nested rules.
    pub(crate) fn write_entries(&self, buf: &mut String) {
        for entry in &self.0 {
            write_block_entry(buf, entry);
        }
    }
}

impl ToCss for DescriptorBlock {
    fn to_css(&self, buf: &mut String) {
        write_block(buf, |buf| self.write_entries(buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FontDisplay;
    use crate::values::CssString;

    #[test]
    fn test_replace_in_place() {
        let mut block = DescriptorBlock::new();
        block.set("font-family", &CssString::new("Inter"));
        block.set("font-display", &FontDisplay::Swap);
        block.set("font-family", &CssString::new("Inter Variable"));

        assert_eq!(block.len(), 2);
        assert_eq!(block.get("font-family").map(|d| d.value()), Some("\"Inter Variable\""));
        assert_eq!(
            block.to_css_string(),
            "{ font-family:\"Inter Variable\"; font-display:swap; }"
        );
    }

    #[test]
    fn test_empty_block() {
        assert!(DescriptorBlock::new().is_empty());
        assert_eq!(DescriptorBlock::new().to_css_string(), "{ }");
    }
}
