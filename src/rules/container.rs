//! `@container` queries and rules.
//!
//! <https://drafts.csswg.org/css-conditional-5/#container-rule>

use std::ops::{BitAnd, BitOr, Not};

use super::condition::Condition;
use super::media::{Comparison, Orientation, Range, RangeFeature, RangeValue, Ratio, write_feature};
use super::{CssRule, collect_rules, write_rule_block};
use crate::declaration::Declaration;
use crate::error::{Error, Result};
use crate::properties::Property;
use crate::values::{CustomIdent, Length, ToCss};

/// A size feature test on the query container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerFeature {
    Width(Length),
    MinWidth(Length),
    MaxWidth(Length),
    Height(Length),
    MinHeight(Length),
    MaxHeight(Length),
    InlineSize(Length),
    MinInlineSize(Length),
    MaxInlineSize(Length),
    BlockSize(Length),
    MinBlockSize(Length),
    MaxBlockSize(Length),
    AspectRatio(Ratio),
    Orientation(Orientation),
    Range(Range),
}

impl ContainerFeature {
    fn name(&self) -> &'static str {
        match self {
            ContainerFeature::Width(_) => "width",
            ContainerFeature::MinWidth(_) => "min-width",
            ContainerFeature::MaxWidth(_) => "max-width",
            ContainerFeature::Height(_) => "height",
            ContainerFeature::MinHeight(_) => "min-height",
            ContainerFeature::MaxHeight(_) => "max-height",
            ContainerFeature::InlineSize(_) => "inline-size",
            ContainerFeature::MinInlineSize(_) => "min-inline-size",
            ContainerFeature::MaxInlineSize(_) => "max-inline-size",
            ContainerFeature::BlockSize(_) => "block-size",
            ContainerFeature::MinBlockSize(_) => "min-block-size",
            ContainerFeature::MaxBlockSize(_) => "max-block-size",
            ContainerFeature::AspectRatio(_) => "aspect-ratio",
            ContainerFeature::Orientation(_) => "orientation",
            ContainerFeature::Range(_) => "",
        }
    }
}

impl ToCss for ContainerFeature {
    fn to_css(&self, buf: &mut String) {
        let name = self.name();
        match self {
            ContainerFeature::Width(length)
            | ContainerFeature::MinWidth(length)
            | ContainerFeature::MaxWidth(length)
            | ContainerFeature::Height(length)
            | ContainerFeature::MinHeight(length)
            | ContainerFeature::MaxHeight(length)
            | ContainerFeature::InlineSize(length)
            | ContainerFeature::MinInlineSize(length)
            | ContainerFeature::MaxInlineSize(length)
            | ContainerFeature::BlockSize(length)
            | ContainerFeature::MinBlockSize(length)
            | ContainerFeature::MaxBlockSize(length) => write_feature(buf, name, Some(length)),
            ContainerFeature::AspectRatio(ratio) => write_feature(buf, name, Some(ratio)),
            ContainerFeature::Orientation(orientation) => write_feature(buf, name, Some(orientation)),
            ContainerFeature::Range(range) => range.to_css(buf),
        }
    }
}

/// A single container query test.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerQuery {
    Size(ContainerFeature),
    /// `style(property:value)`
    Style(Declaration),
}

impl ToCss for ContainerQuery {
    fn to_css(&self, buf: &mut String) {
        match self {
            ContainerQuery::Size(feature) => feature.to_css(buf),
            ContainerQuery::Style(declaration) => {
                buf.push_str("style(");
                declaration.to_css(buf);
                buf.push(')');
            }
        }
    }
}

impl From<ContainerQuery> for Condition<ContainerQuery> {
    fn from(query: ContainerQuery) -> Self {
        Condition::Leaf(query)
    }
}

/// `@container [name] <condition>`
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    name: Option<CustomIdent>,
    condition: Condition<ContainerQuery>,
}

/// Names the container grammar reserves in addition to the CSS-wide keywords.
const RESERVED_NAMES: [&str; 4] = ["none", "and", "not", "or"];

impl Container {
    fn leaf(query: ContainerQuery) -> Self {
        Container {
            name: None,
            condition: Condition::Leaf(query),
        }
    }

    pub fn size(feature: ContainerFeature) -> Self {
        Container::leaf(ContainerQuery::Size(feature))
    }

    pub fn min_width(width: Length) -> Self {
        Container::size(ContainerFeature::MinWidth(width))
    }

    pub fn max_width(width: Length) -> Self {
        Container::size(ContainerFeature::MaxWidth(width))
    }

    /// `(feature op value)`, e.g. `(inline-size > 30em)`.
    pub fn compare(
        feature: RangeFeature,
        comparison: Comparison,
        value: impl Into<RangeValue>,
    ) -> Self {
        Container::size(ContainerFeature::Range(Range::Compare {
            feature,
            comparison,
            value: value.into(),
        }))
    }

    /// A style query on a property value.
    pub fn style(property: &impl Property) -> Self {
        Container::leaf(ContainerQuery::Style(property.declaration()))
    }

    /// A style query on a custom property, `style(--theme:dark)`.
    ///
    /// `!important` is not part of a style query and is dropped.
    pub fn style_declaration(declaration: Declaration) -> Self {
        Container::leaf(ContainerQuery::Style(declaration.without_importance("style()")))
    }

    /// Restrict the query to containers named `name`.
    ///
    /// Fails for `none` and the query keywords `and`, `not`, `or`.
    pub fn named(self, name: CustomIdent) -> Result<Self> {
        if RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name.as_str()))
        {
            return Err(Error::ReservedIdent(name.as_str().to_owned()));
        }
        Ok(Container {
            name: Some(name),
            ..self
        })
    }

    /// Combine conditions. The name of `self` is kept.
    pub fn and(self, other: Container) -> Self {
        Container {
            condition: self.condition.and(other.condition),
            ..self
        }
    }

    pub fn or(self, other: Container) -> Self {
        Container {
            condition: self.condition.or(other.condition),
            ..self
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Container {
            condition: self.condition.negate(),
            ..self
        }
    }

    pub fn name(&self) -> Option<&CustomIdent> {
        self.name.as_ref()
    }

    pub fn condition(&self) -> &Condition<ContainerQuery> {
        &self.condition
    }

    pub fn block<R: Into<CssRule>>(self, rules: impl IntoIterator<Item = R>) -> ContainerRule {
        ContainerRule {
            container: self,
            rules: collect_rules(rules),
        }
    }
}

impl BitAnd for Container {
    type Output = Container;

    fn bitand(self, other: Container) -> Container {
        self.and(other)
    }
}

impl BitOr for Container {
    type Output = Container;

    fn bitor(self, other: Container) -> Container {
        self.or(other)
    }
}

impl Not for Container {
    type Output = Container;

    fn not(self) -> Container {
        Container {
            condition: self.condition.negate(),
            ..self
        }
    }
}

impl ToCss for Container {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@container ");
        if let Some(name) = &self.name {
            name.to_css(buf);
            buf.push(' ');
        }
        self.condition.to_css(buf);
    }
}

/// `@container [name] <condition> { rules }`
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRule {
    pub container: Container,
    pub rules: Vec<CssRule>,
}

impl ToCss for ContainerRule {
    fn to_css(&self, buf: &mut String) {
        self.container.to_css(buf);
        write_rule_block(buf, &self.rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::DeclarationBlock;
    use crate::properties::flex::FlexDirection;
    use crate::properties::font::FontWeight;
    use crate::rules::StyleRule;
    use crate::selector::Compound;
    use crate::values::DashedIdent;

    fn ident(name: &str) -> CustomIdent {
        CustomIdent::new(name).unwrap()
    }

    #[test]
    fn test_size_queries() {
        assert_eq!(
            Container::min_width(Length::px(400.0)).to_css_string(),
            "@container (min-width: 400px)"
        );
        assert_eq!(
            Container::compare(RangeFeature::InlineSize, Comparison::GreaterThan, Length::em(30.0))
                .to_css_string(),
            "@container (inline-size > 30em)"
        );
        assert_eq!(
            Container::size(ContainerFeature::Orientation(Orientation::Landscape)).to_css_string(),
            "@container (orientation: landscape)"
        );
    }

    #[test]
    fn test_named_container() {
        let query = Container::min_width(Length::px(700.0))
            .named(ident("sidebar"))
            .unwrap();
        assert_eq!(query.to_css_string(), "@container sidebar (min-width: 700px)");

        for reserved in ["none", "and", "NOT", "or"] {
            let result = Container::min_width(Length::px(1.0)).named(ident(reserved));
            assert!(result.is_err(), "{reserved} should be rejected");
        }
    }

    #[test]
    fn test_style_queries() {
        let theme = DashedIdent::new("--theme").unwrap();
        let dark = Declaration::custom(&theme, &ident("dark"));
        assert_eq!(
            Container::style_declaration(dark).to_css_string(),
            "@container style(--theme:dark)"
        );
        assert_eq!(
            Container::style(&FontWeight::bold()).to_css_string(),
            "@container style(font-weight:bold)"
        );
    }

    #[test]
    fn test_style_query_drops_important() {
        let theme = DashedIdent::new("--theme").unwrap();
        let dark = Declaration::custom(&theme, &ident("dark")).important();
        assert_eq!(
            Container::style_declaration(dark).to_css_string(),
            "@container style(--theme:dark)"
        );
    }

    #[test]
    fn test_logic() {
        let wide = Container::min_width(Length::px(400.0));
        let narrow = Container::max_width(Length::px(800.0));
        assert_eq!(
            (wide.clone() & narrow.clone()).to_css_string(),
            "@container (min-width: 400px) and (max-width: 800px)"
        );
        assert_eq!(
            (wide.clone() | narrow).to_css_string(),
            "@container (min-width: 400px) or (max-width: 800px)"
        );
        assert_eq!((!wide.clone()).to_css_string(), "@container not (min-width: 400px)");
        assert_eq!(
            wide.not().not().to_css_string(),
            "@container not (not (min-width: 400px))"
        );
    }

    #[test]
    fn test_container_rule() {
        let rule = Container::min_width(Length::px(400.0))
            .named(ident("card"))
            .unwrap()
            .block([StyleRule::new(
                Compound::new().class("card-body").unwrap(),
                DeclarationBlock::new().declare(&FlexDirection::Row),
            )]);
        assert_eq!(
            rule.to_css_string(),
            "@container card (min-width: 400px) { .card-body { flex-direction:row; } }"
        );
    }
}
