//! Transform properties.
//!
//! <https://drafts.csswg.org/css-transforms-2/>

use super::value_property;
use crate::values::{
    Angle, Length, LengthPercentage, Number, Position, ToCss, write_comma_separated, write_number,
};

/// A `<transform-function>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformFunction {
    Translate(LengthPercentage, Option<LengthPercentage>),
    TranslateX(LengthPercentage),
    TranslateY(LengthPercentage),
    Scale(f32, Option<f32>),
    ScaleX(f32),
    ScaleY(f32),
    Rotate(Angle),
    Skew(Angle, Option<Angle>),
    SkewX(Angle),
    SkewY(Angle),
    /// `matrix(a, b, c, d, e, f)`
    Matrix([f32; 6]),
    Perspective(Length),
}

impl TransformFunction {
    pub fn translate(x: impl Into<LengthPercentage>, y: impl Into<LengthPercentage>) -> Self {
        TransformFunction::Translate(x.into(), Some(y.into()))
    }

    pub fn scale(factor: f32) -> Self {
        TransformFunction::Scale(factor, None)
    }
}

fn write_function(buf: &mut String, name: &str, body: impl FnOnce(&mut String)) {
    buf.push_str(name);
    buf.push('(');
    body(buf);
    buf.push(')');
}

fn write_pair<T: ToCss>(buf: &mut String, first: &T, second: &Option<T>) {
    first.to_css(buf);
    if let Some(second) = second {
        buf.push_str(", ");
        second.to_css(buf);
    }
}

impl ToCss for TransformFunction {
    fn to_css(&self, buf: &mut String) {
        match self {
            TransformFunction::Translate(x, y) => {
                write_function(buf, "translate", |buf| write_pair(buf, x, y))
            }
            TransformFunction::TranslateX(x) => write_function(buf, "translateX", |buf| x.to_css(buf)),
            TransformFunction::TranslateY(y) => write_function(buf, "translateY", |buf| y.to_css(buf)),
            TransformFunction::Scale(x, y) => write_function(buf, "scale", |buf| {
                write_pair(buf, &Number(*x), &y.map(Number))
            }),
            TransformFunction::ScaleX(x) => write_function(buf, "scaleX", |buf| write_number(buf, *x)),
            TransformFunction::ScaleY(y) => write_function(buf, "scaleY", |buf| write_number(buf, *y)),
            TransformFunction::Rotate(angle) => {
                write_function(buf, "rotate", |buf| angle.to_css(buf))
            }
            TransformFunction::Skew(x, y) => write_function(buf, "skew", |buf| write_pair(buf, x, y)),
            TransformFunction::SkewX(angle) => write_function(buf, "skewX", |buf| angle.to_css(buf)),
            TransformFunction::SkewY(angle) => write_function(buf, "skewY", |buf| angle.to_css(buf)),
            TransformFunction::Matrix(values) => write_function(buf, "matrix", |buf| {
                write_comma_separated(buf, &values.map(Number))
            }),
            TransformFunction::Perspective(length) => {
                write_function(buf, "perspective", |buf| length.to_css(buf))
            }
        }
    }
}

/// `none | <transform-function>+`. An empty list is `none`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformList(Vec<TransformFunction>);

impl TransformList {
    pub fn none() -> Self {
        TransformList::default()
    }

    pub fn new(functions: impl IntoIterator<Item = TransformFunction>) -> Self {
        TransformList(functions.into_iter().collect())
    }

    pub fn functions(&self) -> &[TransformFunction] {
        &self.0
    }
}

impl From<TransformFunction> for TransformList {
    fn from(function: TransformFunction) -> Self {
        TransformList(vec![function])
    }
}

impl ToCss for TransformList {
    fn to_css(&self, buf: &mut String) {
        if self.0.is_empty() {
            buf.push_str("none");
            return;
        }
        for (i, function) in self.0.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            function.to_css(buf);
        }
    }
}

value_property! {
    /// `transform`
    pub Transform: "transform" => TransformList;
    /// `transform-origin`, two-value form.
    pub TransformOrigin: "transform-origin" => Position;
}
