//! List marker properties.
//!
//! <https://drafts.csswg.org/css-lists-3/>

use super::{keyword_property, value_property};
use crate::values::Image;

keyword_property! {
    /// `list-style-type`, predefined counter styles.
    pub enum ListStyleType: "list-style-type" {
        None => "none",
        Disc => "disc",
        Circle => "circle",
        Square => "square",
        Decimal => "decimal",
        DecimalLeadingZero => "decimal-leading-zero",
        LowerRoman => "lower-roman",
        UpperRoman => "upper-roman",
        LowerAlpha => "lower-alpha",
        UpperAlpha => "upper-alpha",
        LowerLatin => "lower-latin",
        UpperLatin => "upper-latin",
        LowerGreek => "lower-greek",
        DisclosureOpen => "disclosure-open",
        DisclosureClosed => "disclosure-closed",
    }
}

keyword_property! {
    /// `list-style-position`
    pub enum ListStylePosition: "list-style-position" {
        Inside => "inside",
        Outside => "outside",
    }
}

value_property! {
    /// `list-style-image`
    pub ListStyleImage: "list-style-image" => Image;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;
    use crate::values::{ToCss, Url};

    #[test]
    fn test_list_style() {
        assert_eq!(ListStyleType::LowerRoman.to_css_string(), "lower-roman");
        assert_eq!(ListStyleType::None.declaration().to_css_string(), "list-style-type:none");
        assert_eq!(ListStylePosition::Inside.to_css_string(), "inside");
        assert_eq!(
            ListStyleImage::new(Url::new("bullet.svg")).to_css_string(),
            "url(\"bullet.svg\")"
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ListStyleType::NAME, "list-style-type");
        assert_eq!(ListStylePosition::NAME, "list-style-position");
        assert_eq!(ListStyleImage::NAME, "list-style-image");
    }
}
