//! Pseudo-classes and the `An+B` microsyntax.
//!
//! <https://drafts.csswg.org/selectors-4/#pseudo-classes>

use super::{RelativeSelector, SelectorList, non_empty};
use crate::error::Result;
use crate::values::ident::write_ident;
use crate::values::{NonEmpty, ToCss, enum_property, push_display, write_comma_separated};

enum_property! {
    /// Pseudo-classes without arguments.
    pub enum PseudoClassKeyword {
        Hover => "hover",
        Active => "active",
        Focus => "focus",
        FocusVisible => "focus-visible",
        FocusWithin => "focus-within",
        Link => "link",
        Visited => "visited",
        AnyLink => "any-link",
        Target => "target",
        Scope => "scope",
        Root => "root",
        Empty => "empty",
        FirstChild => "first-child",
        LastChild => "last-child",
        OnlyChild => "only-child",
        FirstOfType => "first-of-type",
        LastOfType => "last-of-type",
        OnlyOfType => "only-of-type",
        Checked => "checked",
        Indeterminate => "indeterminate",
        Default => "default",
        Disabled => "disabled",
        Enabled => "enabled",
        Required => "required",
        Optional => "optional",
        Valid => "valid",
        Invalid => "invalid",
        UserValid => "user-valid",
        UserInvalid => "user-invalid",
        InRange => "in-range",
        OutOfRange => "out-of-range",
        ReadOnly => "read-only",
        ReadWrite => "read-write",
        PlaceholderShown => "placeholder-shown",
        Autofill => "autofill",
        Defined => "defined",
        Fullscreen => "fullscreen",
        Modal => "modal",
        PopoverOpen => "popover-open",
    }
}

enum_property! {
    /// Argument of `:dir()`.
    pub enum TextDirection {
        Ltr => "ltr",
        Rtl => "rtl",
    }
}

/// The `An+B` argument of the `:nth-*()` pseudo-classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nth {
    Odd,
    Even,
    /// `a` steps of `n` plus offset `b`.
    AnB(i32, i32),
}

impl Nth {
    /// A single position, `b`.
    pub fn index(b: i32) -> Self {
        Nth::AnB(0, b)
    }
}

impl ToCss for Nth {
    fn to_css(&self, buf: &mut String) {
        let (a, b) = match self {
            Nth::Odd => return buf.push_str("odd"),
            Nth::Even => return buf.push_str("even"),
            Nth::AnB(a, b) => (*a, *b),
        };
        if a == 0 {
            push_display(buf, b);
            return;
        }
        match a {
            1 => buf.push('n'),
            -1 => buf.push_str("-n"),
            _ => {
                push_display(buf, a);
                buf.push('n');
            }
        }
        if b > 0 {
            buf.push('+');
            push_display(buf, b);
        } else if b < 0 {
            push_display(buf, b);
        }
    }
}

/// A language range inside `:lang()`, such as `en` or `fr-CA`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageRange(String);

impl LanguageRange {
    /// Fails on the empty string.
    pub fn new(range: impl Into<String>) -> Result<Self> {
        non_empty(range).map(LanguageRange)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToCss for LanguageRange {
    fn to_css(&self, buf: &mut String) {
        write_ident(buf, &self.0);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    Keyword(PseudoClassKeyword),
    Not(SelectorList),
    Is(SelectorList),
    Where(SelectorList),
    Has(NonEmpty<RelativeSelector>),
    /// `:nth-child(An+B [of S]?)`
    NthChild(Nth, Option<SelectorList>),
    NthLastChild(Nth, Option<SelectorList>),
    NthOfType(Nth),
    NthLastOfType(Nth),
    Lang(NonEmpty<LanguageRange>),
    Dir(TextDirection),
}

impl PseudoClass {
    pub fn has(selectors: impl IntoIterator<Item = RelativeSelector>) -> Result<Self> {
        NonEmpty::new(":has()", selectors).map(PseudoClass::Has)
    }

    pub fn lang<S: Into<String>>(ranges: impl IntoIterator<Item = S>) -> Result<Self> {
        let ranges = ranges
            .into_iter()
            .map(LanguageRange::new)
            .collect::<Result<Vec<_>>>()?;
        NonEmpty::new(":lang()", ranges).map(PseudoClass::Lang)
    }

    pub fn nth_child(nth: Nth) -> Self {
        PseudoClass::NthChild(nth, None)
    }
}

impl From<PseudoClassKeyword> for PseudoClass {
    fn from(keyword: PseudoClassKeyword) -> Self {
        PseudoClass::Keyword(keyword)
    }
}

fn write_function(buf: &mut String, name: &str, body: impl FnOnce(&mut String)) {
    buf.push(':');
    buf.push_str(name);
    buf.push('(');
    body(buf);
    buf.push(')');
}

fn write_nth(buf: &mut String, nth: &Nth, of: &Option<SelectorList>) {
    nth.to_css(buf);
    if let Some(selectors) = of {
        buf.push_str(" of ");
        selectors.to_css(buf);
    }
}

impl ToCss for PseudoClass {
    fn to_css(&self, buf: &mut String) {
        match self {
            PseudoClass::Keyword(keyword) => {
                buf.push(':');
                keyword.to_css(buf);
            }
            PseudoClass::Not(list) => write_function(buf, "not", |buf| list.to_css(buf)),
            PseudoClass::Is(list) => write_function(buf, "is", |buf| list.to_css(buf)),
            PseudoClass::Where(list) => write_function(buf, "where", |buf| list.to_css(buf)),
            PseudoClass::Has(selectors) => {
                write_function(buf, "has", |buf| write_comma_separated(buf, selectors))
            }
            PseudoClass::NthChild(nth, of) => {
                write_function(buf, "nth-child", |buf| write_nth(buf, nth, of))
            }
            PseudoClass::NthLastChild(nth, of) => {
                write_function(buf, "nth-last-child", |buf| write_nth(buf, nth, of))
            }
            PseudoClass::NthOfType(nth) => write_function(buf, "nth-of-type", |buf| nth.to_css(buf)),
            PseudoClass::NthLastOfType(nth) => {
                write_function(buf, "nth-last-of-type", |buf| nth.to_css(buf))
            }
            PseudoClass::Lang(ranges) => {
                write_function(buf, "lang", |buf| write_comma_separated(buf, ranges))
            }
            PseudoClass::Dir(direction) => write_function(buf, "dir", |buf| direction.to_css(buf)),
        }
    }
}
