//! The `<time>` type.

use super::dimension;

dimension! {
    /// A `<time>`.
    ///
    /// <https://drafts.csswg.org/css-values-4/#time>
    pub struct Time(TimeUnit) {
        S => "s" as s,
        Ms => "ms" as ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{NonNegative, ToCss};

    #[test]
    fn test_time_units() {
        assert_eq!(Time::s(1.5).to_css_string(), "1.5s");
        assert_eq!(Time::ms(250.0).to_css_string(), "250ms");
        assert_eq!(Time::s(0.0).to_css_string(), "0s");
    }

    #[test]
    fn test_negative_time_rejected_where_required() {
        assert!(NonNegative::new(Time::ms(-10.0)).is_err());
        assert!(NonNegative::new(Time::ms(10.0)).is_ok());
    }
}
