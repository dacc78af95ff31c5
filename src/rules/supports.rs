//! `@supports` conditions and rules.
//!
//! <https://drafts.csswg.org/css-conditional-5/#at-supports-ext>

use std::ops::{BitAnd, BitOr, Not};

use super::condition::Condition;
use super::font_face::{FontFormat, FontTech};
use super::{CssRule, collect_rules, write_rule_block};
use crate::declaration::Declaration;
use crate::properties::Property;
use crate::selector::Selector;
use crate::values::ToCss;

/// A single `@supports` test.
#[derive(Debug, Clone, PartialEq)]
pub enum SupportsFeature {
    /// `(property:value)`
    Declaration(Declaration),
    /// `selector(<complex-selector>)`
    Selector(Selector),
    /// `font-tech(<font-tech>)`
    FontTech(FontTech),
    /// `font-format(<font-format>)`
    FontFormat(FontFormat),
}

impl ToCss for SupportsFeature {
    fn to_css(&self, buf: &mut String) {
        let (function, write): (&str, &dyn ToCss) = match self {
            SupportsFeature::Declaration(declaration) => ("", declaration),
            SupportsFeature::Selector(selector) => ("selector", selector),
            SupportsFeature::FontTech(tech) => ("font-tech", tech),
            SupportsFeature::FontFormat(format) => ("font-format", format),
        };
        buf.push_str(function);
        buf.push('(');
        write.to_css(buf);
        buf.push(')');
    }
}

impl From<SupportsFeature> for Condition<SupportsFeature> {
    fn from(feature: SupportsFeature) -> Self {
        Condition::Leaf(feature)
    }
}

/// A supports condition, serialized as `@supports <condition>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Supports {
    condition: Condition<SupportsFeature>,
}

impl Supports {
    fn leaf(feature: SupportsFeature) -> Self {
        Supports {
            condition: Condition::Leaf(feature),
        }
    }

    /// Test support for a property value: `(display:grid)`.
    pub fn declaration(property: &impl Property) -> Self {
        Supports::leaf(SupportsFeature::Declaration(property.declaration()))
    }

    pub fn selector(selector: impl Into<Selector>) -> Self {
        Supports::leaf(SupportsFeature::Selector(selector.into()))
    }

    pub fn font_tech(tech: FontTech) -> Self {
        Supports::leaf(SupportsFeature::FontTech(tech))
    }

    pub fn font_format(format: FontFormat) -> Self {
        Supports::leaf(SupportsFeature::FontFormat(format))
    }

    pub fn and(self, other: Supports) -> Self {
        Supports {
            condition: self.condition.and(other.condition),
        }
    }

    pub fn or(self, other: Supports) -> Self {
        Supports {
            condition: self.condition.or(other.condition),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Supports {
            condition: self.condition.negate(),
        }
    }

    pub fn condition(&self) -> &Condition<SupportsFeature> {
        &self.condition
    }

    /// Write the argument of `@import ... supports(...)`.
    ///
    /// A lone declaration is written bare, as the `supports()` function
    /// accepts a declaration directly.
    pub(crate) fn write_import_condition(&self, buf: &mut String) {
        match self.condition.leaf() {
            Some(SupportsFeature::Declaration(declaration)) => declaration.to_css(buf),
            _ => self.condition.to_css(buf),
        }
    }

    /// Wrap rules in this condition.
    pub fn block<R: Into<CssRule>>(self, rules: impl IntoIterator<Item = R>) -> SupportsRule {
        SupportsRule {
            supports: self,
            rules: collect_rules(rules),
        }
    }
}

/// `!important` is not part of a supports condition and is dropped.
impl From<Declaration> for Supports {
    fn from(declaration: Declaration) -> Self {
        Supports::leaf(SupportsFeature::Declaration(
            declaration.without_importance("@supports"),
        ))
    }
}

impl BitAnd for Supports {
    type Output = Supports;

    fn bitand(self, other: Supports) -> Supports {
        self.and(other)
    }
}

impl BitOr for Supports {
    type Output = Supports;

    fn bitor(self, other: Supports) -> Supports {
        self.or(other)
    }
}

impl Not for Supports {
    type Output = Supports;

    fn not(self) -> Supports {
        Supports {
            condition: self.condition.negate(),
        }
    }
}

impl ToCss for Supports {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@supports ");
        self.condition.to_css(buf);
    }
}

/// `@supports <condition> { rules }`
#[derive(Debug, Clone, PartialEq)]
pub struct SupportsRule {
    pub supports: Supports,
    pub rules: Vec<CssRule>,
}

impl ToCss for SupportsRule {
    fn to_css(&self, buf: &mut String) {
        self.supports.to_css(buf);
        write_rule_block(buf, &self.rules);
    }
}
