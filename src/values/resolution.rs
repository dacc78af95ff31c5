//! The `<resolution>` type.

use super::dimension;

dimension! {
    /// A `<resolution>`.
    ///
    /// <https://drafts.csswg.org/css-values-4/#resolution>
    pub struct Resolution(ResolutionUnit) {
        Dpi => "dpi" as dpi,
        Dpcm => "dpcm" as dpcm,
        Dppx => "dppx" as dppx,
        /// Alias of `dppx`
        X => "x" as x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ToCss;

    #[test]
    fn test_resolution_units() {
        assert_eq!(Resolution::dppx(2.0).to_css_string(), "2dppx");
        assert_eq!(Resolution::dpi(96.0).to_css_string(), "96dpi");
        assert_eq!(Resolution::dpcm(37.8).to_css_string(), "37.8dpcm");
        assert_eq!(Resolution::x(1.5).to_css_string(), "1.5x");
    }
}
