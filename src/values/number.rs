//! Unit-less numbers and the non-negative wrapper.

use super::{Length, LengthPercentage, ToCss, push_display, write_number};
use crate::error::{Error, Result};

/// A `<number>`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Number(pub f32);

impl ToCss for Number {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.0);
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number(value)
    }
}

/// An `<integer>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integer(pub i32);

impl ToCss for Integer {
    fn to_css(&self, buf: &mut String) {
        push_display(buf, self.0);
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Integer(value)
    }
}

/// A value with a sign that CSS may restrict.
pub trait Sign {
    /// Name used in error messages.
    const KIND: &'static str;

    /// The numeric payload whose sign is checked.
    fn numeric_value(&self) -> f32;
}

impl Sign for Number {
    const KIND: &'static str = "Number";

    fn numeric_value(&self) -> f32 {
        self.0
    }
}

impl Sign for Integer {
    const KIND: &'static str = "Integer";

    fn numeric_value(&self) -> f32 {
        self.0 as f32
    }
}

/// A value that CSS requires to be zero or positive.
///
/// Construction fails with [`Error::Negative`] for negative input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonNegative<T>(T);

impl<T: Sign> NonNegative<T> {
    pub fn new(value: T) -> Result<Self> {
        let numeric = value.numeric_value();
        if numeric < 0.0 {
            return Err(Error::Negative {
                what: T::KIND,
                value: numeric,
            });
        }
        Ok(NonNegative(value))
    }
}

impl<T> NonNegative<T> {
    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl NonNegative<Length> {
    /// `0px`
    pub const fn zero() -> Self {
        NonNegative(Length::zero())
    }
}

impl NonNegative<LengthPercentage> {
    /// `0px`
    pub const fn zero() -> Self {
        NonNegative(LengthPercentage::zero())
    }
}

impl<T: ToCss> ToCss for NonNegative<T> {
    fn to_css(&self, buf: &mut String) {
        self.0.to_css(buf);
    }
}
