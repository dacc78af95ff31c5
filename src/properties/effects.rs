//! Visual effect and interaction properties.

use super::{keyword_property, value_property};
use crate::values::{Alpha, Shadow, ShadowList};

value_property! {
    /// `opacity`, clamped into `[0, 1]`.
    pub Opacity: "opacity" => Alpha;
    /// `box-shadow`
    pub BoxShadow: "box-shadow" => ShadowList<Shadow>;
}

impl BoxShadow {
    pub fn none() -> Self {
        BoxShadow::Value(ShadowList::none())
    }

    pub fn layers(shadows: impl IntoIterator<Item = Shadow>) -> Self {
        BoxShadow::Value(ShadowList::new(shadows))
    }
}

keyword_property! {
    /// `cursor`, keyword cursors only.
    ///
    /// <https://drafts.csswg.org/css-ui-4/#cursor>
    pub enum Cursor: "cursor" {
        Auto => "auto",
        Default => "default",
        None => "none",
        ContextMenu => "context-menu",
        Help => "help",
        Pointer => "pointer",
        Progress => "progress",
        Wait => "wait",
        Cell => "cell",
        Crosshair => "crosshair",
        Text => "text",
        VerticalText => "vertical-text",
        Alias => "alias",
        Copy => "copy",
        Move => "move",
        NoDrop => "no-drop",
        NotAllowed => "not-allowed",
        Grab => "grab",
        Grabbing => "grabbing",
        AllScroll => "all-scroll",
        ColResize => "col-resize",
        RowResize => "row-resize",
        NResize => "n-resize",
        EResize => "e-resize",
        SResize => "s-resize",
        WResize => "w-resize",
        NeResize => "ne-resize",
        NwResize => "nw-resize",
        SeResize => "se-resize",
        SwResize => "sw-resize",
        EwResize => "ew-resize",
        NsResize => "ns-resize",
        NeswResize => "nesw-resize",
        NwseResize => "nwse-resize",
        ZoomIn => "zoom-in",
        ZoomOut => "zoom-out",
    }
}

keyword_property! {
    /// `pointer-events`, HTML keywords.
    pub enum PointerEvents: "pointer-events" {
        Auto => "auto",
        None => "none",
    }
}

keyword_property! {
    /// `user-select`
    pub enum UserSelect: "user-select" {
        Auto => "auto",
        Text => "text",
        None => "none",
        Contain => "contain",
        All => "all",
    }
}

keyword_property! {
    /// `mix-blend-mode`
    pub enum MixBlendMode: "mix-blend-mode" {
        Normal => "normal",
        Multiply => "multiply",
        Screen => "screen",
        Overlay => "overlay",
        Darken => "darken",
        Lighten => "lighten",
        ColorDodge => "color-dodge",
        ColorBurn => "color-burn",
        HardLight => "hard-light",
        SoftLight => "soft-light",
        Difference => "difference",
        Exclusion => "exclusion",
        Hue => "hue",
        Saturation => "saturation",
        Color => "color",
        Luminosity => "luminosity",
        PlusLighter => "plus-lighter",
    }
}
