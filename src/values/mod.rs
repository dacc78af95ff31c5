//! CSS value types and the serialization core.
//!
//! This module contains:
//! - The [`ToCss`] trait every value, property and rule implements
//! - Primitive values (numbers, lengths, percentages, angles, colors, ...)
//! - Composite values built from primitives (length-percentage, position, shadow, ...)
//! - The shared number formatter used for every numeric token

use std::fmt::{Display, Write};

mod macros;

pub mod angle;
pub mod border;
pub mod color;
pub mod easing;
pub mod ident;
pub mod image;
pub mod length;
pub mod non_empty;
pub mod number;
pub mod percentage;
pub mod position;
pub mod rect;
pub mod resolution;
pub mod shadow;
pub mod size;
pub mod string;
pub mod time;
pub mod url;

pub(crate) use macros::{dimension, enum_property};

pub use angle::{Angle, AngleUnit};
pub use border::{BorderSide, LineStyle, LineWidth};
pub use color::{Alpha, Color, Hsl, Hwb, NamedColor, SystemColor};
pub use easing::{CubicBezier, EasingFunction, StepPosition, Steps};
pub use ident::{CustomIdent, DashedIdent};
pub use image::{ColorStop, GradientDirection, GradientSide, Image, LinearGradient};
pub use length::{Length, LengthPercentage, LengthPercentageOrAuto, LengthUnit};
pub use non_empty::NonEmpty;
pub use number::{Integer, NonNegative, Number, Sign};
pub use percentage::Percentage;
pub use position::{HorizontalKeyword, HorizontalSide, Position, VerticalKeyword, VerticalSide};
pub use rect::Rect;
pub use resolution::{Resolution, ResolutionUnit};
pub use shadow::{Shadow, ShadowList, TextShadow};
pub use size::{MaxSize, Size};
pub use string::CssString;
pub use time::{Time, TimeUnit};
pub use url::Url;

/// Serialize a value as CSS text.
pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

impl<T: ToCss + ?Sized> ToCss for &T {
    fn to_css(&self, buf: &mut String) {
        (**self).to_css(buf);
    }
}

impl<T: ToCss> ToCss for Box<T> {
    fn to_css(&self, buf: &mut String) {
        (**self).to_css(buf);
    }
}

// ============================================================================
// Formatting helpers
// ============================================================================

/// Append any `Display` value. Writing into a `String` cannot fail.
pub(crate) fn push_display(buf: &mut String, value: impl Display) {
    let _ = write!(buf, "{value}");
}

/// Write a number in its canonical CSS form.
///
/// The output is the shortest decimal that round-trips to the same `f32`,
/// without exponent, trailing zeros or trailing `.`. Negative zero prints as
/// `0`. Non-finite values have no numeric token and are written as
/// `calc(NaN)`, `calc(infinity)` or `calc(-infinity)`.
pub fn write_number(buf: &mut String, value: f32) {
    if !value.is_finite() {
        write_non_finite(buf, value, None);
    } else if value == 0.0 {
        buf.push('0');
    } else {
        push_display(buf, value);
    }
}

/// Write a number immediately followed by its unit (`10px`, `50%`, `0s`).
///
/// Zero keeps its unit.
pub fn write_dimension(buf: &mut String, value: f32, unit: &str) {
    if value.is_finite() {
        write_number(buf, value);
        buf.push_str(unit);
    } else {
        write_non_finite(buf, value, Some(unit));
    }
}

fn write_non_finite(buf: &mut String, value: f32, unit: Option<&str>) {
    log::warn!("serializing non-finite number {value} as calc()");
    let keyword = if value.is_nan() {
        "NaN"
    } else if value.is_sign_negative() {
        "-infinity"
    } else {
        "infinity"
    };
    buf.push_str("calc(");
    buf.push_str(keyword);
    if let Some(unit) = unit {
        buf.push_str(" * 1");
        buf.push_str(unit);
    }
    buf.push(')');
}

/// Clamp `value` into `[min, max]` for a range CSS clamps. NaN becomes
/// `fallback`.
///
/// Every clamping constructor goes through here, so they all treat NaN and
/// infinities the same way.
pub(crate) fn clamp_finite(what: &str, value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    let clamped = if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    };
    if clamped != value {
        log::debug!("clamping {what} {value} into [{min}, {max}]");
    }
    clamped
}

/// Write every item, with `separator` between consecutive items.
pub(crate) fn write_separated<T: ToCss>(buf: &mut String, items: &[T], separator: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buf.push_str(separator);
        }
        item.to_css(buf);
    }
}

/// Write a comma-separated list (`a, b, c`).
pub(crate) fn write_comma_separated<T: ToCss>(buf: &mut String, items: &[T]) {
    write_separated(buf, items, ", ");
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn number(value: f32) -> String {
        let mut buf = String::new();
        write_number(&mut buf, value);
        buf
    }

    #[test]
    fn test_number_trims_trailing_zeros() {
        assert_eq!(number(1.50), "1.5");
        assert_eq!(number(2.0), "2");
        assert_eq!(number(0.6), "0.6");
        assert_eq!(number(-3.25), "-3.25");
    }

    #[test]
    fn test_number_never_uses_exponent() {
        assert_eq!(number(1e-7), "0.0000001");
        assert_eq!(number(1e10), "10000000000");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(number(-0.0), "0");
    }

    #[test]
    fn test_non_finite_numbers() {
        assert_eq!(number(f32::NAN), "calc(NaN)");
        assert_eq!(number(f32::INFINITY), "calc(infinity)");
        assert_eq!(number(f32::NEG_INFINITY), "calc(-infinity)");

        let mut buf = String::new();
        write_dimension(&mut buf, f32::INFINITY, "px");
        assert_eq!(buf, "calc(infinity * 1px)");
    }

    #[test]
    fn test_zero_dimension_keeps_unit() {
        let mut buf = String::new();
        write_dimension(&mut buf, 0.0, "px");
        assert_eq!(buf, "0px");
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite("x", 0.5, 0.0, 1.0, 0.0), 0.5);
        assert_eq!(clamp_finite("x", -2.0, 0.0, 1.0, 0.0), 0.0);
        assert_eq!(clamp_finite("x", f32::INFINITY, 0.0, 1.0, 0.0), 1.0);
        assert_eq!(clamp_finite("x", f32::NEG_INFINITY, 1.0, 1000.0, 400.0), 1.0);
        assert_eq!(clamp_finite("x", f32::NAN, 1.0, 1000.0, 400.0), 400.0);
    }

    proptest! {
        #[test]
        fn prop_clamp_finite_stays_in_range(value in proptest::num::f32::ANY) {
            let clamped = clamp_finite("x", value, 0.0, 100.0, 0.0);
            prop_assert!((0.0..=100.0).contains(&clamped));
        }

        #[test]
        fn prop_number_round_trips(value in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
            let text = number(value);
            prop_assert!(!text.contains('e'));
            prop_assert!(!text.ends_with('.'));
            if text.contains('.') {
                prop_assert!(!text.ends_with('0'));
            }
            let parsed: f32 = text.parse().unwrap();
            prop_assert_eq!(parsed, if value == 0.0 { 0.0 } else { value });
        }

        #[test]
        fn prop_dimension_is_number_plus_unit(value in -1.0e6f32..1.0e6f32) {
            let mut buf = String::new();
            write_dimension(&mut buf, value, "em");
            prop_assert_eq!(buf, format!("{}em", number(value)));
        }
    }
}
