//! `@property` registrations.
//!
//! <https://drafts.css-houdini.org/css-properties-values-api/#at-property-rule>

use super::descriptor::DescriptorBlock;
use crate::error::Result;
use crate::values::string::write_string;
use crate::values::{CustomIdent, DashedIdent, NonEmpty, ToCss, enum_property, write_separated};

enum_property! {
    /// Data type names accepted in a syntax string.
    pub enum SyntaxType {
        Length => "<length>",
        Number => "<number>",
        Percentage => "<percentage>",
        LengthPercentage => "<length-percentage>",
        Color => "<color>",
        Image => "<image>",
        Url => "<url>",
        Integer => "<integer>",
        Angle => "<angle>",
        Time => "<time>",
        Resolution => "<resolution>",
        TransformFunction => "<transform-function>",
        TransformList => "<transform-list>",
        CustomIdent => "<custom-ident>",
        String => "<string>",
    }
}

enum_property! {
    pub enum Multiplier {
        /// `+`
        SpaceList => "+",
        /// `#`
        CommaList => "#",
    }
}

/// A data type or literal identifier, with an optional multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyntaxComponent {
    Type(SyntaxType, Option<Multiplier>),
    Ident(CustomIdent, Option<Multiplier>),
}

impl From<SyntaxType> for SyntaxComponent {
    fn from(data_type: SyntaxType) -> Self {
        SyntaxComponent::Type(data_type, None)
    }
}

impl From<CustomIdent> for SyntaxComponent {
    fn from(ident: CustomIdent) -> Self {
        SyntaxComponent::Ident(ident, None)
    }
}

impl ToCss for SyntaxComponent {
    fn to_css(&self, buf: &mut String) {
        let multiplier = match self {
            SyntaxComponent::Type(data_type, multiplier) => {
                data_type.to_css(buf);
                multiplier
            }
            SyntaxComponent::Ident(ident, multiplier) => {
                ident.to_css(buf);
                multiplier
            }
        };
        if let Some(multiplier) = multiplier {
            multiplier.to_css(buf);
        }
    }
}

/// Value of the `syntax` descriptor, serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// `"*"`, any token sequence.
    Universal,
    /// Alternatives separated by `|`.
    Components(NonEmpty<SyntaxComponent>),
}

impl Syntax {
    /// Fails when `components` is empty.
    pub fn new<C: Into<SyntaxComponent>>(components: impl IntoIterator<Item = C>) -> Result<Self> {
        NonEmpty::new("syntax", components.into_iter().map(Into::into)).map(Syntax::Components)
    }
}

impl ToCss for Syntax {
    fn to_css(&self, buf: &mut String) {
        let mut text = String::new();
        match self {
            Syntax::Universal => text.push('*'),
            Syntax::Components(components) => write_separated(&mut text, components, " | "),
        }
        write_string(buf, &text);
    }
}

struct Inherits(bool);

impl ToCss for Inherits {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(if self.0 { "true" } else { "false" });
    }
}

/// `@property --name { syntax; inherits; initial-value? }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyRule {
    name: DashedIdent,
    descriptors: DescriptorBlock,
}

impl PropertyRule {
    /// A registration with the required `syntax` and `inherits` descriptors.
    pub fn new(name: DashedIdent, syntax: Syntax, inherits: bool) -> Self {
        let mut descriptors = DescriptorBlock::new();
        descriptors.set("syntax", &syntax);
        descriptors.set("inherits", &Inherits(inherits));
        PropertyRule { name, descriptors }
    }

    pub fn initial_value(mut self, value: &impl ToCss) -> Self {
        self.descriptors.set("initial-value", value);
        self
    }

    pub fn name(&self) -> &DashedIdent {
        &self.name
    }

    pub fn descriptors(&self) -> &DescriptorBlock {
        &self.descriptors
    }
}

impl ToCss for PropertyRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@property ");
        self.name.to_css(buf);
        buf.push(' ');
        self.descriptors.to_css(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Length, NamedColor};

    fn name(name: &str) -> DashedIdent {
        DashedIdent::new(name).unwrap()
    }

    #[test]
    fn test_property_rule() {
        let rule = PropertyRule::new(name("--accent"), Syntax::new([SyntaxType::Color]).unwrap(), false)
            .initial_value(&NamedColor::RebeccaPurple);
        assert_eq!(
            rule.to_css_string(),
            "@property --accent { syntax:\"<color>\"; inherits:false; initial-value:rebeccapurple; }"
        );
    }

    #[test]
    fn test_syntax_strings() {
        let syntax = Syntax::new([
            SyntaxComponent::Type(SyntaxType::Length, Some(Multiplier::SpaceList)),
            SyntaxComponent::from(SyntaxType::Percentage),
            SyntaxComponent::from(CustomIdent::new("auto").unwrap()),
        ])
        .unwrap();
        assert_eq!(syntax.to_css_string(), "\"<length>+ | <percentage> | auto\"");
        assert_eq!(Syntax::Universal.to_css_string(), "\"*\"");
        assert!(Syntax::new(Vec::<SyntaxType>::new()).is_err());
    }

    #[test]
    fn test_syntax_components_are_never_empty() {
        let Syntax::Components(components) = Syntax::new([SyntaxType::Color]).unwrap() else {
            panic!("expected components");
        };
        assert_eq!(components.first(), &SyntaxComponent::from(SyntaxType::Color));
        assert_eq!(
            Syntax::new(Vec::<SyntaxType>::new()),
            Err(crate::Error::EmptyList("syntax"))
        );
    }

    #[test]
    fn test_initial_value_replaced() {
        let rule = PropertyRule::new(name("--gap"), Syntax::new([SyntaxType::Length]).unwrap(), true)
            .initial_value(&Length::px(4.0))
            .initial_value(&Length::px(8.0));
        assert_eq!(
            rule.to_css_string(),
            "@property --gap { syntax:\"<length>\"; inherits:true; initial-value:8px; }"
        );
    }
}
