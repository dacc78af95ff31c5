//! Transition and animation properties.
//!
//! <https://drafts.csswg.org/css-transitions-1/> and <https://drafts.csswg.org/css-animations-1/>

use super::{Property, keyword_property, value_property};
use crate::error::Result;
use crate::values::{
    CustomIdent, DashedIdent, EasingFunction, NonNegative, Number, Time, ToCss,
    write_comma_separated,
};

/// One entry of `transition-property`.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionTarget {
    All,
    /// A property known to this crate, by its CSS name.
    Property(&'static str),
    Custom(DashedIdent),
}

impl TransitionTarget {
    /// The property modeled by `P`.
    pub fn property<P: Property>() -> Self {
        TransitionTarget::Property(P::NAME)
    }
}

impl ToCss for TransitionTarget {
    fn to_css(&self, buf: &mut String) {
        match self {
            TransitionTarget::All => buf.push_str("all"),
            TransitionTarget::Property(name) => buf.push_str(name),
            TransitionTarget::Custom(name) => name.to_css(buf),
        }
    }
}

/// `none | <single-transition-property>#`. An empty list is `none`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionTargets(Vec<TransitionTarget>);

impl TransitionTargets {
    pub fn none() -> Self {
        TransitionTargets::default()
    }

    pub fn new(targets: impl IntoIterator<Item = TransitionTarget>) -> Self {
        TransitionTargets(targets.into_iter().collect())
    }
}

impl From<TransitionTarget> for TransitionTargets {
    fn from(target: TransitionTarget) -> Self {
        TransitionTargets(vec![target])
    }
}

impl ToCss for TransitionTargets {
    fn to_css(&self, buf: &mut String) {
        if self.0.is_empty() {
            buf.push_str("none");
        } else {
            write_comma_separated(buf, &self.0);
        }
    }
}

/// `none | <custom-ident>`
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationNameValue {
    None,
    Name(CustomIdent),
}

impl From<CustomIdent> for AnimationNameValue {
    fn from(name: CustomIdent) -> Self {
        AnimationNameValue::Name(name)
    }
}

impl ToCss for AnimationNameValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            AnimationNameValue::None => buf.push_str("none"),
            AnimationNameValue::Name(name) => name.to_css(buf),
        }
    }
}

/// `infinite | <number [0,∞]>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationCount {
    Infinite,
    Number(NonNegative<Number>),
}

impl IterationCount {
    pub fn number(count: f32) -> Result<Self> {
        Ok(IterationCount::Number(NonNegative::new(Number(count))?))
    }
}

impl ToCss for IterationCount {
    fn to_css(&self, buf: &mut String) {
        match self {
            IterationCount::Infinite => buf.push_str("infinite"),
            IterationCount::Number(count) => count.to_css(buf),
        }
    }
}

value_property! {
    /// `transition-property`
    pub TransitionProperty: "transition-property" => TransitionTargets;
    /// `transition-duration`
    pub TransitionDuration: "transition-duration" => NonNegative<Time>;
    /// `transition-delay`; negative delays start part-way through.
    pub TransitionDelay: "transition-delay" => Time;
    /// `transition-timing-function`
    pub TransitionTimingFunction: "transition-timing-function" => EasingFunction;

    /// `animation-name`
    pub AnimationName: "animation-name" => AnimationNameValue;
    /// `animation-duration`
    pub AnimationDuration: "animation-duration" => NonNegative<Time>;
    /// `animation-delay`
    pub AnimationDelay: "animation-delay" => Time;
    /// `animation-timing-function`
    pub AnimationTimingFunction: "animation-timing-function" => EasingFunction;
    /// `animation-iteration-count`
    pub AnimationIterationCount: "animation-iteration-count" => IterationCount;
}

impl TransitionDuration {
    pub fn time(time: Time) -> Result<Self> {
        Ok(TransitionDuration::Value(NonNegative::new(time)?))
    }
}

impl AnimationDuration {
    pub fn time(time: Time) -> Result<Self> {
        Ok(AnimationDuration::Value(NonNegative::new(time)?))
    }
}

keyword_property! {
    /// `animation-direction`
    pub enum AnimationDirection: "animation-direction" {
        Normal => "normal",
        Reverse => "reverse",
        Alternate => "alternate",
        AlternateReverse => "alternate-reverse",
    }
}

keyword_property! {
    /// `animation-fill-mode`
    pub enum AnimationFillMode: "animation-fill-mode" {
        None => "none",
        Forwards => "forwards",
        Backwards => "backwards",
        Both => "both",
    }
}

keyword_property! {
    /// `animation-play-state`
    pub enum AnimationPlayState: "animation-play-state" {
        Running => "running",
        Paused => "paused",
    }
}
