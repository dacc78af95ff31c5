//! `<easing-function>` for transitions and animations.

use super::{ToCss, clamp_finite, enum_property, push_display, write_number};
use crate::error::{Error, Result};

enum_property! {
    /// `<step-position>`
    pub enum StepPosition {
        JumpStart => "jump-start",
        JumpEnd => "jump-end",
        JumpNone => "jump-none",
        JumpBoth => "jump-both",
        Start => "start",
        End => "end",
    }
}

/// `<easing-function>`
///
/// <https://drafts.csswg.org/css-easing-1/#easing-functions>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    StepStart,
    StepEnd,
    /// Built with [`EasingFunction::cubic_bezier`].
    CubicBezier(CubicBezier),
    /// Built with [`EasingFunction::steps`].
    Steps(Steps),
}

/// `cubic-bezier(x1, y1, x2, y2)`; x coordinates lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// The control points `[x1, y1, x2, y2]`.
    pub fn points(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl ToCss for CubicBezier {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("cubic-bezier(");
        for (i, value) in self.points().into_iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            write_number(buf, value);
        }
        buf.push(')');
    }
}

/// `steps(count[, position])`; count is at least 1, or 2 for `jump-none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Steps {
    count: u32,
    position: Option<StepPosition>,
}

impl Steps {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn position(&self) -> Option<StepPosition> {
        self.position
    }
}

impl ToCss for Steps {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("steps(");
        push_display(buf, self.count);
        if let Some(position) = self.position {
            buf.push_str(", ");
            position.to_css(buf);
        }
        buf.push(')');
    }
}

impl EasingFunction {
    /// x coordinates are clamped into `[0, 1]`. A NaN x becomes 0; a
    /// non-finite y is kept and written as `calc()`.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let x = |value| clamp_finite("cubic-bezier x coordinate", value, 0.0, 1.0, 0.0);
        EasingFunction::CubicBezier(CubicBezier {
            x1: x(x1),
            y1,
            x2: x(x2),
            y2,
        })
    }

    pub fn steps(count: u32, position: Option<StepPosition>) -> Result<Self> {
        // jump-none needs two steps to move at all
        let min = if position == Some(StepPosition::JumpNone) { 2 } else { 1 };
        if count < min {
            return Err(Error::TooSmall {
                what: "steps() count",
                value: count.into(),
                min: min.into(),
            });
        }
        Ok(EasingFunction::Steps(Steps { count, position }))
    }
}

impl ToCss for EasingFunction {
    fn to_css(&self, buf: &mut String) {
        match self {
            EasingFunction::Linear => buf.push_str("linear"),
            EasingFunction::Ease => buf.push_str("ease"),
            EasingFunction::EaseIn => buf.push_str("ease-in"),
            EasingFunction::EaseOut => buf.push_str("ease-out"),
            EasingFunction::EaseInOut => buf.push_str("ease-in-out"),
            EasingFunction::StepStart => buf.push_str("step-start"),
            EasingFunction::StepEnd => buf.push_str("step-end"),
            EasingFunction::CubicBezier(bezier) => bezier.to_css(buf),
            EasingFunction::Steps(steps) => steps.to_css(buf),
        }
    }
}
