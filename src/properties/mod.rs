//! CSS property types.
//!
//! One type per CSS property. Each type holds the closed grammar of its
//! property plus a `Global` arm for the CSS-wide keywords, and implements
//! [`Property`], which carries the property name as a constant.
//!
//! Most types are generated by [`keyword_property!`] and [`value_property!`];
//! multi-value shorthands add convenience constructors on top.

mod macros;

pub mod background;
pub mod border;
pub mod box_model;
pub mod effects;
pub mod flex;
pub mod font;
pub mod grid;
pub mod layout;
pub mod list;
pub mod outline;
pub mod text;
pub mod transform;
pub mod transition;

pub(crate) use macros::{keyword_property, value_property};

use crate::declaration::Declaration;
use crate::values::{ToCss, enum_property};

enum_property! {
    /// The CSS-wide keywords, accepted by every property.
    ///
    /// <https://drafts.csswg.org/css-cascade-5/#defaulting-keywords>
    pub enum GlobalKeyword {
        Inherit => "inherit",
        Initial => "initial",
        Unset => "unset",
        Revert => "revert",
        RevertLayer => "revert-layer",
    }
}

/// A CSS property value together with its property name.
pub trait Property: ToCss + Sized {
    /// The property name, e.g. `"background-color"`.
    const NAME: &'static str;

    /// The value made of a CSS-wide keyword.
    fn global(keyword: GlobalKeyword) -> Self;

    /// The property name. Identical for every value of the type.
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// The `name:value` declaration for this value.
    fn declaration(&self) -> Declaration {
        Declaration::new(Self::NAME, self.to_css_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_keywords() {
        let texts: Vec<_> = GlobalKeyword::ALL.iter().map(|k| k.to_css_string()).collect();
        assert_eq!(texts, ["inherit", "initial", "unset", "revert", "revert-layer"]);
    }
}
