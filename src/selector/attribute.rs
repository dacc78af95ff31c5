//! Attribute selectors (`[href]`, `[lang|="en"]`, `[type="a" i]`).

use super::non_empty;
use crate::error::Result;
use crate::values::{ToCss, enum_property};
use crate::values::ident::write_ident;
use crate::values::string::write_string;

enum_property! {
    /// How an attribute value is compared.
    pub enum AttributeMatcher {
        EqualTo => "=",
        WhiteSpaceSeparatedListContaining => "~=",
        HyphenSeparatedListBeginningWith => "|=",
        StartsWith => "^=",
        EndsWith => "$=",
        ContainsSubstring => "*=",
    }
}

enum_property! {
    /// The trailing `i` / `s` flag.
    pub enum AttributeModifier {
        CaseInsensitive => "i",
        CaseSensitive => "s",
    }
}

/// `[name]` or `[name <matcher> "value" <modifier>?]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    name: String,
    matcher: Option<(AttributeMatcher, String)>,
    modifier: Option<AttributeModifier>,
}

impl AttributeSelector {
    /// Matches elements that carry the attribute at all.
    pub fn exists(name: impl Into<String>) -> Result<Self> {
        Ok(AttributeSelector {
            name: non_empty(name)?,
            matcher: None,
            modifier: None,
        })
    }

    pub fn new(
        name: impl Into<String>,
        matcher: AttributeMatcher,
        value: impl Into<String>,
    ) -> Result<Self> {
        Ok(AttributeSelector {
            name: non_empty(name)?,
            matcher: Some((matcher, value.into())),
            modifier: None,
        })
    }

    /// `[name="value"]`
    pub fn equals(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        AttributeSelector::new(name, AttributeMatcher::EqualTo, value)
    }

    /// Append a case flag. Ignored on a presence test, which has no value to compare.
    pub fn modifier(self, modifier: AttributeModifier) -> Self {
        if self.matcher.is_none() {
            log::debug!("dropping case modifier on [{}] presence selector", self.name);
            return self;
        }
        AttributeSelector {
            modifier: Some(modifier),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ToCss for AttributeSelector {
    fn to_css(&self, buf: &mut String) {
        buf.push('[');
        write_ident(buf, &self.name);
        if let Some((matcher, value)) = &self.matcher {
            matcher.to_css(buf);
            write_string(buf, value);
            if let Some(modifier) = &self.modifier {
                buf.push(' ');
                modifier.to_css(buf);
            }
        }
        buf.push(']');
    }
}
