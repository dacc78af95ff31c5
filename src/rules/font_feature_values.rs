//! `@font-feature-values`.
//!
//! <https://drafts.csswg.org/css-fonts-4/#font-feature-values>

use super::descriptor::DescriptorBlock;
use super::font_face::FontDisplay;
use crate::declaration::{write_block, write_nested};
use crate::error::{Error, Result};
use crate::values::{CssString, CustomIdent, ToCss, enum_property, push_display, write_comma_separated};

enum_property! {
    /// Feature value block types.
    pub enum FeatureValueType {
        Stylistic => "stylistic",
        HistoricalForms => "historical-forms",
        Styleset => "styleset",
        CharacterVariant => "character-variant",
        Swash => "swash",
        Ornaments => "ornaments",
        Annotation => "annotation",
    }
}

struct Indices(Vec<u32>);

impl ToCss for Indices {
    fn to_css(&self, buf: &mut String) {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            push_display(buf, index);
        }
    }
}

/// `@styleset { name: index+; ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureValueBlock {
    pub kind: FeatureValueType,
    values: DescriptorBlock,
}

impl FeatureValueBlock {
    pub fn new(kind: FeatureValueType) -> Self {
        FeatureValueBlock {
            kind,
            values: DescriptorBlock::new(),
        }
    }

    /// Map `name` to feature indices. Fails when `indices` is empty.
    pub fn value(mut self, name: CustomIdent, indices: impl IntoIterator<Item = u32>) -> Result<Self> {
        let indices: Vec<_> = indices.into_iter().collect();
        if indices.is_empty() {
            return Err(Error::EmptyList("feature value indices"));
        }
        self.values.set(name.to_css_string(), &Indices(indices));
        Ok(self)
    }

    pub fn values(&self) -> &DescriptorBlock {
        &self.values
    }
}

impl ToCss for FeatureValueBlock {
    fn to_css(&self, buf: &mut String) {
        buf.push('@');
        self.kind.to_css(buf);
        buf.push(' ');
        self.values.to_css(buf);
    }
}

/// `@font-feature-values <family-name># { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontFeatureValuesRule {
    families: Vec<CssString>,
    descriptors: DescriptorBlock,
    blocks: Vec<FeatureValueBlock>,
}

impl FontFeatureValuesRule {
    /// Fails when `families` is empty.
    pub fn new<S: Into<String>>(families: impl IntoIterator<Item = S>) -> Result<Self> {
        let families: Vec<_> = families.into_iter().map(CssString::new).collect();
        if families.is_empty() {
            return Err(Error::EmptyList("@font-feature-values family list"));
        }
        Ok(FontFeatureValuesRule {
            families,
            descriptors: DescriptorBlock::new(),
            blocks: Vec::new(),
        })
    }

    pub fn font_display(mut self, display: FontDisplay) -> Self {
        self.descriptors.set("font-display", &display);
        self
    }

    /// Add a feature value block. A block of a type already present replaces it.
    pub fn block(mut self, block: FeatureValueBlock) -> Self {
        match self.blocks.iter_mut().find(|existing| existing.kind == block.kind) {
            Some(existing) => {
                log::trace!("replacing @{} block", block.kind.as_str());
                *existing = block;
            }
            None => self.blocks.push(block),
        }
        self
    }

    pub fn blocks(&self) -> &[FeatureValueBlock] {
        &self.blocks
    }
}

impl ToCss for FontFeatureValuesRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@font-feature-values ");
        write_comma_separated(buf, &self.families);
        buf.push(' ');
        write_block(buf, |buf| {
            self.descriptors.write_entries(buf);
            for block in &self.blocks {
                write_nested(buf, block);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> CustomIdent {
        CustomIdent::new(name).unwrap()
    }

    #[test]
    fn test_font_feature_values() {
        let styleset = FeatureValueBlock::new(FeatureValueType::Styleset)
            .value(ident("nice-style"), [12])
            .unwrap()
            .value(ident("alt-g"), [1, 3])
            .unwrap();
        let swash = FeatureValueBlock::new(FeatureValueType::Swash)
            .value(ident("flowing"), [1])
            .unwrap();
        let rule = FontFeatureValuesRule::new(["Font One", "Font Two"])
            .unwrap()
            .font_display(FontDisplay::Swap)
            .block(styleset)
            .block(swash);
        assert_eq!(
            rule.to_css_string(),
            "@font-feature-values \"Font One\", \"Font Two\" { font-display:swap; \
             @styleset { nice-style:12; alt-g:1 3; } @swash { flowing:1; } }"
        );
    }

    #[test]
    fn test_block_replaced_by_type() {
        let first = FeatureValueBlock::new(FeatureValueType::Ornaments)
            .value(ident("fleurons"), [1])
            .unwrap();
        let second = FeatureValueBlock::new(FeatureValueType::Ornaments)
            .value(ident("fleurons"), [2])
            .unwrap();
        let rule = FontFeatureValuesRule::new(["Font"]).unwrap().block(first).block(second);
        assert_eq!(rule.blocks().len(), 1);
        assert_eq!(
            rule.to_css_string(),
            "@font-feature-values \"Font\" { @ornaments { fleurons:2; } }"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!(FontFeatureValuesRule::new(Vec::<String>::new()).is_err());
        assert!(
            FeatureValueBlock::new(FeatureValueType::Swash)
                .value(ident("x"), [])
                .is_err()
        );
    }
}
