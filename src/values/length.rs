//! Lengths and the length-or-percentage composites.

use super::{NonNegative, Percentage, Sign, ToCss, dimension};
use crate::error::Result;

dimension! {
    /// A `<length>`.
    ///
    /// <https://drafts.csswg.org/css-values-4/#lengths>
    pub struct Length(LengthUnit) {
        // Absolute
        Px => "px" as px,
        Cm => "cm" as cm,
        Mm => "mm" as mm,
        /// Quarter-millimeters
        Q => "q" as q,
        In => "in" as inches,
        Pt => "pt" as pt,
        Pc => "pc" as pc,

        // Font-relative
        Em => "em" as em,
        Rem => "rem" as rem,
        Ex => "ex" as ex,
        Rex => "rex" as rex,
        Cap => "cap" as cap,
        Rcap => "rcap" as rcap,
        Ch => "ch" as ch,
        Rch => "rch" as rch,
        Ic => "ic" as ic,
        Ric => "ric" as ric,
        Lh => "lh" as lh,
        Rlh => "rlh" as rlh,

        // Viewport-relative
        Vw => "vw" as vw,
        Vh => "vh" as vh,
        Vi => "vi" as vi,
        Vb => "vb" as vb,
        Vmin => "vmin" as vmin,
        Vmax => "vmax" as vmax,
        Svw => "svw" as svw,
        Svh => "svh" as svh,
        Lvw => "lvw" as lvw,
        Lvh => "lvh" as lvh,
        Dvw => "dvw" as dvw,
        Dvh => "dvh" as dvh,

        // Container-relative
        Cqw => "cqw" as cqw,
        Cqh => "cqh" as cqh,
        Cqi => "cqi" as cqi,
        Cqb => "cqb" as cqb,
        Cqmin => "cqmin" as cqmin,
        Cqmax => "cqmax" as cqmax,
    }
}

impl Length {
    pub const fn zero() -> Self {
        Length::px(0.0)
    }
}

/// `<length-percentage>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthPercentage {
    Length(Length),
    Percentage(Percentage),
}

impl LengthPercentage {
    pub const fn px(value: f32) -> Self {
        LengthPercentage::Length(Length::px(value))
    }

    pub const fn percent(value: f32) -> Self {
        LengthPercentage::Percentage(Percentage::new(value))
    }

    pub const fn zero() -> Self {
        LengthPercentage::Length(Length::zero())
    }
}

impl From<Length> for LengthPercentage {
    fn from(length: Length) -> Self {
        LengthPercentage::Length(length)
    }
}

impl From<Percentage> for LengthPercentage {
    fn from(percentage: Percentage) -> Self {
        LengthPercentage::Percentage(percentage)
    }
}

impl ToCss for LengthPercentage {
    fn to_css(&self, buf: &mut String) {
        match self {
            LengthPercentage::Length(length) => length.to_css(buf),
            LengthPercentage::Percentage(percentage) => percentage.to_css(buf),
        }
    }
}

impl Sign for LengthPercentage {
    const KIND: &'static str = "LengthPercentage";

    fn numeric_value(&self) -> f32 {
        match self {
            LengthPercentage::Length(length) => length.numeric_value(),
            LengthPercentage::Percentage(percentage) => percentage.numeric_value(),
        }
    }
}

impl NonNegative<LengthPercentage> {
    /// Build a non-negative length-percentage from anything convertible.
    pub fn length_percentage(value: impl Into<LengthPercentage>) -> Result<Self> {
        NonNegative::new(value.into())
    }
}

/// `auto | <length-percentage>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthPercentageOrAuto {
    Auto,
    LengthPercentage(LengthPercentage),
}

impl From<LengthPercentage> for LengthPercentageOrAuto {
    fn from(value: LengthPercentage) -> Self {
        LengthPercentageOrAuto::LengthPercentage(value)
    }
}

impl From<Length> for LengthPercentageOrAuto {
    fn from(length: Length) -> Self {
        LengthPercentageOrAuto::LengthPercentage(length.into())
    }
}

impl From<Percentage> for LengthPercentageOrAuto {
    fn from(percentage: Percentage) -> Self {
        LengthPercentageOrAuto::LengthPercentage(percentage.into())
    }
}

impl ToCss for LengthPercentageOrAuto {
    fn to_css(&self, buf: &mut String) {
        match self {
            LengthPercentageOrAuto::Auto => buf.push_str("auto"),
            LengthPercentageOrAuto::LengthPercentage(value) => value.to_css(buf),
        }
    }
}
