//! At-rules and style rules.
//!
//! Every rule is a structured value serialized on demand:
//! - block rules as `@name prelude { entry; entry; }`
//! - statement rules as `@name prelude;`
//! - style rules as `selectors { a:b; }`
//!
//! Conditional rules (`@media`, `@supports`, `@container`, `@layer`) hold
//! nested [`CssRule`]s. Descriptor rules (`@font-face`, `@page`, ...) hold a
//! [`DescriptorBlock`].

pub mod condition;
pub mod container;
pub mod counter_style;
pub mod descriptor;
pub mod font_face;
pub mod font_feature_values;
pub mod import;
pub mod keyframes;
pub mod layer;
pub mod media;
pub mod page;
pub mod property;
pub mod style;
pub mod supports;

pub use condition::Condition;
pub use container::{Container, ContainerFeature, ContainerQuery, ContainerRule};
pub use counter_style::{
    AdditiveSymbols, AdditiveTuple, CounterRange, CounterStyleRule, CounterSystem, SpeakAs, Symbol,
};
pub use descriptor::DescriptorBlock;
pub use font_face::{FontDisplay, FontFaceRule, FontFormat, FontSource, FontTech, UnicodeRange};
pub use font_feature_values::{FeatureValueBlock, FeatureValueType, FontFeatureValuesRule};
pub use import::{CharsetRule, ImportLayer, ImportRule, NamespaceRule};
pub use keyframes::{Keyframe, KeyframeOffset, KeyframeSelector, KeyframesRule};
pub use layer::{LayerName, LayerRule};
pub use media::{Media, MediaFeature, MediaQuery, MediaRule, MediaType};
pub use page::{MarginBox, MarginRule, PagePseudo, PageRule, PageSelector, PageSize};
pub use property::{PropertyRule, Syntax, SyntaxComponent};
pub use style::StyleRule;
pub use supports::{Supports, SupportsFeature, SupportsRule};

use crate::declaration::{write_block, write_nested};
use crate::values::ToCss;

/// Any rule that can appear in a stylesheet or inside a conditional block.
#[derive(Debug, Clone, PartialEq)]
pub enum CssRule {
    Style(StyleRule),
    Media(MediaRule),
    Supports(SupportsRule),
    Container(ContainerRule),
    Layer(LayerRule),
    FontFace(FontFaceRule),
    Page(PageRule),
    CounterStyle(CounterStyleRule),
    Property(PropertyRule),
    FontFeatureValues(FontFeatureValuesRule),
    Keyframes(KeyframesRule),
    Import(ImportRule),
    Namespace(NamespaceRule),
    Charset(CharsetRule),
}

macro_rules! rule_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for CssRule {
                fn from(rule: $ty) -> Self {
                    CssRule::$variant(rule)
                }
            }
        )*
    };
}

rule_from! {
    Style(StyleRule),
    Media(MediaRule),
    Supports(SupportsRule),
    Container(ContainerRule),
    Layer(LayerRule),
    FontFace(FontFaceRule),
    Page(PageRule),
    CounterStyle(CounterStyleRule),
    Property(PropertyRule),
    FontFeatureValues(FontFeatureValuesRule),
    Keyframes(KeyframesRule),
    Import(ImportRule),
    Namespace(NamespaceRule),
    Charset(CharsetRule),
}

impl ToCss for CssRule {
    fn to_css(&self, buf: &mut String) {
        match self {
            CssRule::Style(rule) => rule.to_css(buf),
            CssRule::Media(rule) => rule.to_css(buf),
            CssRule::Supports(rule) => rule.to_css(buf),
            CssRule::Container(rule) => rule.to_css(buf),
            CssRule::Layer(rule) => rule.to_css(buf),
            CssRule::FontFace(rule) => rule.to_css(buf),
            CssRule::Page(rule) => rule.to_css(buf),
            CssRule::CounterStyle(rule) => rule.to_css(buf),
            CssRule::Property(rule) => rule.to_css(buf),
            CssRule::FontFeatureValues(rule) => rule.to_css(buf),
            CssRule::Keyframes(rule) => rule.to_css(buf),
            CssRule::Import(rule) => rule.to_css(buf),
            CssRule::Namespace(rule) => rule.to_css(buf),
            CssRule::Charset(rule) => rule.to_css(buf),
        }
    }
}

/// Collect rules for a conditional block.
pub(crate) fn collect_rules<R: Into<CssRule>>(rules: impl IntoIterator<Item = R>) -> Vec<CssRule> {
    rules.into_iter().map(Into::into).collect()
}

/// Write ` { rule rule }` after a prelude.
pub(crate) fn write_rule_block(buf: &mut String, rules: &[CssRule]) {
    buf.push(' ');
    write_block(buf, |buf| {
        for rule in rules {
            write_nested(buf, rule);
        }
    });
}

/// Write a statement at-rule: `@name prelude;`.
pub(crate) fn write_statement(buf: &mut String, name: &str, prelude: impl FnOnce(&mut String)) {
    buf.push('@');
    buf.push_str(name);
    buf.push(' ');
    prelude(buf);
    buf.push(';');
}
