//! Identifier types.

use super::ToCss;
use crate::error::{Error, Result};

const CSS_WIDE_KEYWORDS: [&str; 6] = [
    "inherit",
    "initial",
    "unset",
    "revert",
    "revert-layer",
    "default",
];

/// Write `name` as an escaped CSS identifier.
pub(crate) fn write_ident(buf: &mut String, name: &str) {
    // Writing into a String cannot fail
    let _ = cssparser::serialize_identifier(name, buf);
}

/// A `<custom-ident>`: an author-chosen name such as an animation or counter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomIdent(String);

impl CustomIdent {
    /// Fails for the empty string and for the CSS-wide keywords, which CSS
    /// excludes from `<custom-ident>`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyIdent);
        }
        if CSS_WIDE_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(&name))
        {
            return Err(Error::ReservedIdent(name));
        }
        Ok(CustomIdent(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToCss for CustomIdent {
    fn to_css(&self, buf: &mut String) {
        write_ident(buf, &self.0);
    }
}

/// A `<dashed-ident>` such as a custom property name (`--accent`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DashedIdent(String);

impl DashedIdent {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !name.starts_with("--") || name.len() == 2 {
            return Err(Error::InvalidDashedIdent(name));
        }
        Ok(DashedIdent(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ToCss for DashedIdent {
    fn to_css(&self, buf: &mut String) {
        write_ident(buf, &self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_ident() {
        assert_eq!(CustomIdent::new("slide-in").unwrap().to_css_string(), "slide-in");
        assert_eq!(CustomIdent::new("1st").unwrap().to_css_string(), "\\31 st");
        assert_eq!(CustomIdent::new("a b").unwrap().to_css_string(), "a\\ b");
    }

    #[test]
    fn test_custom_ident_rejects_reserved() {
        assert_eq!(CustomIdent::new(""), Err(Error::EmptyIdent));
        assert_eq!(
            CustomIdent::new("Inherit"),
            Err(Error::ReservedIdent("Inherit".to_string()))
        );
        assert!(CustomIdent::new("revert-layer").is_err());
    }

    #[test]
    fn test_dashed_ident() {
        assert_eq!(DashedIdent::new("--accent").unwrap().to_css_string(), "--accent");
        assert!(DashedIdent::new("accent").is_err());
        assert!(DashedIdent::new("--").is_err());
    }
}
