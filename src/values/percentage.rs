//! The `<percentage>` type.

use super::{Sign, ToCss, clamp_finite, write_dimension};

/// A `<percentage>`, stored as the number written before `%`.
///
/// `Percentage::new(10.0)` serializes as `10%`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Percentage(pub f32);

impl Percentage {
    pub const fn new(value: f32) -> Self {
        Percentage(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Clamp into `[min, max]`; NaN becomes `min`.
    pub(crate) fn clamped(self, min: f32, max: f32) -> Self {
        Percentage(clamp_finite("percentage", self.0, min, max, min))
    }
}

impl ToCss for Percentage {
    fn to_css(&self, buf: &mut String) {
        write_dimension(buf, self.0, "%");
    }
}

impl Sign for Percentage {
    const KIND: &'static str = "Percentage";

    fn numeric_value(&self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(Percentage::new(10.0).to_css_string(), "10%");
        assert_eq!(Percentage::new(33.5).to_css_string(), "33.5%");
        assert_eq!(Percentage::new(0.0).to_css_string(), "0%");
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Percentage(120.0).clamped(0.0, 100.0), Percentage(100.0));
        assert_eq!(Percentage(-5.0).clamped(0.0, 100.0), Percentage(0.0));
        assert_eq!(Percentage(40.0).clamped(0.0, 100.0), Percentage(40.0));
        assert_eq!(Percentage(f32::NAN).clamped(0.0, 100.0), Percentage(0.0));
    }
}
