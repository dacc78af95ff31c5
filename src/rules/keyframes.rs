//! `@keyframes`.
//!
//! <https://drafts.csswg.org/css-animations-1/#keyframes>

use crate::declaration::{DeclarationBlock, write_block, write_nested};
use crate::error::{Error, Result};
use crate::values::{CustomIdent, Percentage, ToCss, write_comma_separated};

/// A keyframe offset in `[0%, 100%]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyframeOffset(Percentage);

impl KeyframeOffset {
    /// Clamps into `[0, 100]`; NaN becomes `0%`.
    pub fn new(value: f32) -> Self {
        KeyframeOffset(Percentage::new(value).clamped(0.0, 100.0))
    }

    pub fn get(&self) -> Percentage {
        self.0
    }
}

impl ToCss for KeyframeOffset {
    fn to_css(&self, buf: &mut String) {
        self.0.to_css(buf);
    }
}

/// `from`, `to` or a percentage in `[0%, 100%]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyframeSelector {
    From,
    To,
    /// Built with [`KeyframeSelector::percent`].
    Percentage(KeyframeOffset),
}

impl KeyframeSelector {
    /// A percentage offset, clamped into `[0, 100]`.
    pub fn percent(value: f32) -> Self {
        KeyframeSelector::Percentage(KeyframeOffset::new(value))
    }
}

impl ToCss for KeyframeSelector {
    fn to_css(&self, buf: &mut String) {
        match self {
            KeyframeSelector::From => buf.push_str("from"),
            KeyframeSelector::To => buf.push_str("to"),
            KeyframeSelector::Percentage(offset) => offset.to_css(buf),
        }
    }
}

/// `<keyframe-selector># { declarations }`
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    selectors: Vec<KeyframeSelector>,
    pub declarations: DeclarationBlock,
}

impl Keyframe {
    /// Fails when `selectors` is empty.
    pub fn new(selectors: impl IntoIterator<Item = KeyframeSelector>, declarations: DeclarationBlock) -> Result<Self> {
        let selectors: Vec<_> = selectors.into_iter().collect();
        if selectors.is_empty() {
            return Err(Error::EmptyList("keyframe selector"));
        }
        Ok(Keyframe {
            selectors,
            declarations,
        })
    }

    pub fn selectors(&self) -> &[KeyframeSelector] {
        &self.selectors
    }
}

impl ToCss for Keyframe {
    fn to_css(&self, buf: &mut String) {
        write_comma_separated(buf, &self.selectors);
        buf.push(' ');
        self.declarations.to_css(buf);
    }
}

/// `@keyframes <name> { keyframes }`
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesRule {
    name: CustomIdent,
    keyframes: Vec<Keyframe>,
}

impl KeyframesRule {
    /// Fails for `none`, which cannot name an animation.
    pub fn new(name: CustomIdent) -> Result<Self> {
        if name.as_str().eq_ignore_ascii_case("none") {
            return Err(Error::ReservedIdent(name.as_str().to_owned()));
        }
        Ok(KeyframesRule {
            name,
            keyframes: Vec::new(),
        })
    }

    /// Add a keyframe. A keyframe with the same selector list replaces the
    /// earlier one in place.
    pub fn keyframe(mut self, keyframe: Keyframe) -> Self {
        match self
            .keyframes
            .iter_mut()
            .find(|existing| existing.selectors == keyframe.selectors)
        {
            Some(existing) => {
                log::trace!(
                    "replacing keyframe {} in @keyframes {}",
                    write_selectors(&keyframe.selectors),
                    self.name.as_str()
                );
                *existing = keyframe;
            }
            None => self.keyframes.push(keyframe),
        }
        self
    }

    /// Add a keyframe at a single offset.
    pub fn at(self, selector: KeyframeSelector, declarations: DeclarationBlock) -> Self {
        self.keyframe(Keyframe {
            selectors: vec![selector],
            declarations,
        })
    }

    pub fn name(&self) -> &CustomIdent {
        &self.name
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }
}

fn write_selectors(selectors: &[KeyframeSelector]) -> String {
    let mut buf = String::new();
    write_comma_separated(&mut buf, selectors);
    buf
}

impl ToCss for KeyframesRule {
    fn to_css(&self, buf: &mut String) {
        buf.push_str("@keyframes ");
        self.name.to_css(buf);
        buf.push(' ');
        write_block(buf, |buf| {
            for keyframe in &self.keyframes {
                write_nested(buf, keyframe);
            }
        });
    }
}
