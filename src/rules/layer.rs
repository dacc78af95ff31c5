//! `@layer` cascade layers.
//!
//! <https://drafts.csswg.org/css-cascade-5/#layering>

use super::{CssRule, collect_rules, write_rule_block, write_statement};
use crate::error::Result;
use crate::values::{CustomIdent, NonEmpty, ToCss, write_comma_separated, write_separated};

/// A dotted layer name such as `framework.theme`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayerName(NonEmpty<CustomIdent>);

impl LayerName {
    /// Fails when `parts` is empty.
    pub fn new(parts: impl IntoIterator<Item = CustomIdent>) -> Result<Self> {
        NonEmpty::new("layer name", parts).map(LayerName)
    }

    pub fn parts(&self) -> &[CustomIdent] {
        &self.0
    }

    /// The name of a sublayer of this layer.
    pub fn sublayer(mut self, part: CustomIdent) -> Self {
        self.0.push(part);
        self
    }
}

impl From<CustomIdent> for LayerName {
    fn from(part: CustomIdent) -> Self {
        LayerName(NonEmpty::single(part))
    }
}

impl ToCss for LayerName {
    fn to_css(&self, buf: &mut String) {
        write_separated(buf, &self.0, ".");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayerRule {
    /// `@layer a, b;` declares layer order. Built with [`LayerRule::statement`].
    Statement(NonEmpty<LayerName>),
    /// `@layer name? { rules }`
    Block {
        name: Option<LayerName>,
        rules: Vec<CssRule>,
    },
}

impl LayerRule {
    /// Fails when `names` is empty.
    pub fn statement<N: Into<LayerName>>(names: impl IntoIterator<Item = N>) -> Result<Self> {
        NonEmpty::new("@layer statement", names.into_iter().map(Into::into))
            .map(LayerRule::Statement)
    }

    pub fn block<R: Into<CssRule>>(name: impl Into<LayerName>, rules: impl IntoIterator<Item = R>) -> Self {
        LayerRule::Block {
            name: Some(name.into()),
            rules: collect_rules(rules),
        }
    }

    /// An anonymous layer.
    pub fn anonymous<R: Into<CssRule>>(rules: impl IntoIterator<Item = R>) -> Self {
        LayerRule::Block {
            name: None,
            rules: collect_rules(rules),
        }
    }
}

impl ToCss for LayerRule {
    fn to_css(&self, buf: &mut String) {
        match self {
            LayerRule::Statement(names) => {
                write_statement(buf, "layer", |buf| write_comma_separated(buf, names))
            }
            LayerRule::Block { name, rules } => {
                buf.push_str("@layer");
                if let Some(name) = name {
                    buf.push(' ');
                    name.to_css(buf);
                }
                write_rule_block(buf, rules);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::DeclarationBlock;
    use crate::properties::box_model::BoxSizing;
    use crate::rules::StyleRule;
    use crate::selector::Compound;

    fn ident(name: &str) -> CustomIdent {
        CustomIdent::new(name).unwrap()
    }

    #[test]
    fn test_statement() {
        let rule = LayerRule::statement([
            LayerName::from(ident("reset")),
            LayerName::from(ident("framework")).sublayer(ident("theme")),
            LayerName::from(ident("utilities")),
        ])
        .unwrap();
        assert_eq!(rule.to_css_string(), "@layer reset, framework.theme, utilities;");
        assert!(LayerRule::statement(Vec::<LayerName>::new()).is_err());
        assert!(LayerName::new([]).is_err());
    }

    #[test]
    fn test_statement_names_are_never_empty() {
        let LayerRule::Statement(names) = LayerRule::statement([ident("base")]).unwrap() else {
            panic!("expected a statement");
        };
        assert_eq!(names.len(), 1);
        assert_eq!(names.first().parts(), &[ident("base")]);

        let names = NonEmpty::new("@layer statement", [LayerName::from(ident("a"))]).unwrap();
        assert_eq!(LayerRule::Statement(names).to_css_string(), "@layer a;");
    }

    #[test]
    fn test_blocks() {
        let reset = StyleRule::new(
            Compound::universal(),
            DeclarationBlock::new().declare(&BoxSizing::BorderBox),
        );
        assert_eq!(
            LayerRule::block(ident("reset"), [reset.clone()]).to_css_string(),
            "@layer reset { * { box-sizing:border-box; } }"
        );
        assert_eq!(
            LayerRule::anonymous([reset]).to_css_string(),
            "@layer { * { box-sizing:border-box; } }"
        );
        assert_eq!(
            LayerRule::anonymous(Vec::<CssRule>::new()).to_css_string(),
            "@layer { }"
        );
    }
}
