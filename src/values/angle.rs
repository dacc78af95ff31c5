//! The `<angle>` type.

use super::dimension;

dimension! {
    /// An `<angle>`.
    ///
    /// <https://drafts.csswg.org/css-values-4/#angles>
    pub struct Angle(AngleUnit) {
        Deg => "deg" as deg,
        Rad => "rad" as rad,
        Grad => "grad" as grad,
        Turn => "turn" as turn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ToCss;

    #[test]
    fn test_angle_units() {
        assert_eq!(Angle::deg(45.0).to_css_string(), "45deg");
        assert_eq!(Angle::rad(1.5).to_css_string(), "1.5rad");
        assert_eq!(Angle::grad(100.0).to_css_string(), "100grad");
        assert_eq!(Angle::turn(0.25).to_css_string(), "0.25turn");
        assert_eq!(Angle::deg(0.0).to_css_string(), "0deg");
    }
}
