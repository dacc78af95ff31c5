//! Combinators between compound selectors.
//!
//! <https://drafts.csswg.org/selectors-4/#combinators>

use crate::values::ToCss;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
    /// `a || b`
    Column,
}

impl Combinator {
    /// The combinator token, `None` for the whitespace descendant combinator.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Combinator::Descendant => None,
            Combinator::Child => Some(">"),
            Combinator::NextSibling => Some("+"),
            Combinator::SubsequentSibling => Some("~"),
            Combinator::Column => Some("||"),
        }
    }
}

impl ToCss for Combinator {
    /// Written with its surrounding whitespace: ` `, ` > `, ` + `, ...
    fn to_css(&self, buf: &mut String) {
        buf.push(' ');
        if let Some(symbol) = self.symbol() {
            buf.push_str(symbol);
            buf.push(' ');
        }
    }
}
