//! Boolean conditions shared by `@supports` and `@container`.
//!
//! Both grammars combine parenthesized tests with `not`, `and` and `or`,
//! and forbid mixing `and` with `or` at one level. Nested operators are
//! therefore always written inside parentheses: `not (not (x))`,
//! `(a or b) and c`.

use crate::values::ToCss;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition<L> {
    /// A single test, written as-is. Leaves carry their own parentheses.
    Leaf(L),
    Not(Box<Condition<L>>),
    And(Vec<Condition<L>>),
    Or(Vec<Condition<L>>),
}

impl<L> Condition<L> {
    /// `self and other`. Extends an existing conjunction.
    pub fn and(self, other: impl Into<Condition<L>>) -> Self {
        match self {
            Condition::And(mut terms) => {
                terms.push(other.into());
                Condition::And(terms)
            }
            condition => Condition::And(vec![condition, other.into()]),
        }
    }

    /// `self or other`. Extends an existing disjunction.
    pub fn or(self, other: impl Into<Condition<L>>) -> Self {
        match self {
            Condition::Or(mut terms) => {
                terms.push(other.into());
                Condition::Or(terms)
            }
            condition => Condition::Or(vec![condition, other.into()]),
        }
    }

    /// `not self`.
    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    pub fn leaf(&self) -> Option<&L> {
        match self {
            Condition::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }
}

fn write_in_parens<L: ToCss>(buf: &mut String, condition: &Condition<L>) {
    if let Condition::Leaf(leaf) = condition {
        leaf.to_css(buf);
    } else {
        buf.push('(');
        condition.to_css(buf);
        buf.push(')');
    }
}

fn write_joined<L: ToCss>(buf: &mut String, terms: &[Condition<L>], operator: &str) {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            buf.push(' ');
            buf.push_str(operator);
            buf.push(' ');
        }
        write_in_parens(buf, term);
    }
}

impl<L: ToCss> ToCss for Condition<L> {
    fn to_css(&self, buf: &mut String) {
        match self {
            Condition::Leaf(leaf) => leaf.to_css(buf),
            Condition::Not(inner) => {
                buf.push_str("not ");
                write_in_parens(buf, inner);
            }
            Condition::And(terms) => write_joined(buf, terms, "and"),
            Condition::Or(terms) => write_joined(buf, terms, "or"),
        }
    }
}
